#![expect(missing_docs)]

use core::fmt::Write;

use jsonc_tree::{ParserOptions, parse, parse_with_options};

fn render_errors(inputs: &[&str], options: ParserOptions) -> String {
    let mut out = String::new();
    for input in inputs {
        match parse_with_options(input, options) {
            Ok(root) => writeln!(out, "{input:?} => ok {:?}", root.kind()).unwrap(),
            Err(err) => writeln!(out, "{input:?} => {err} (length {})", err.length).unwrap(),
        }
    }
    out
}

#[test]
fn snapshot_error_messages() {
    let inputs = [
        "",
        "42",
        "[1, 2,]",
        "{\n  \"a\": 01\n}",
        "[\"tab\\q\"]",
        "[\"\\u00",
        "[\"\\uZZZZ\"]",
        "[nulll]",
        "[fals]",
        "{\"open\": [1, 2",
        "[1] /* dangling",
        "{} {}",
    ];

    insta::assert_snapshot!(render_errors(&inputs, ParserOptions::default()), @r#"
    "" => unexpected end of input at line 1, byte 0 (length 0)
    "42" => unexpected token at line 1, byte 0 (length 0)
    "[1, 2,]" => unexpected token at line 1, byte 6 (length 0)
    "{\n  \"a\": 01\n}" => invalid number at line 2, byte 10 (length 1)
    "[\"tab\\q\"]" => invalid control sequence at line 1, byte 6 (length 4)
    "[\"\\u00" => four hexadecimal digits required at line 1, byte 4 (length 2)
    "[\"\\uZZZZ\"]" => invalid hexadecimal digit at line 1, byte 4 (length 2)
    "[nulll]" => unexpected expression at line 1, byte 1 (length 4)
    "[fals]" => unexpected token at line 1, byte 5 (length 4)
    "{\"open\": [1, 2" => unexpected end of input at line 1, byte 14 (length 0)
    "[1] /* dangling" => unexpected end of input at line 1, byte 15 (length 11)
    "{} {}" => unexpected token at line 1, byte 3 (length 0)
    "#);
}

#[test]
fn snapshot_relaxed_options() {
    let inputs = ["[1] trailing", "[1 /* c */]", "[[[]]]"];
    let options = ParserOptions {
        allow_comments: false,
        allow_trailing_content: true,
        max_depth: 2,
        ..Default::default()
    };

    insta::assert_snapshot!(render_errors(&inputs, options), @r#"
    "[1] trailing" => ok Array
    "[1 /* c */]" => unexpected token at line 1, byte 3 (length 0)
    "[[[]]]" => maximum nesting depth exceeded at line 1, byte 2 (length 0)
    "#);
}

#[test]
fn snapshot_tree_debug() {
    let root = parse(br#"{"k": [1, 2.5, "s", true, null, {}]}"#).unwrap();
    insta::assert_snapshot!(format!("{root:?}"), @r#"Object({"k": Array([Some(Int("1")), Some(Double("2.5")), Some(String("s")), Some(True), Some(Null), Some(Object({}))])})"#);
}
