#![allow(dead_code)]

use jsonc_tree::Value;
use quickcheck::{Arbitrary, Gen};
use serde_json::Value as Json;

/// Separators spliced between tokens when rendering a document.
const FILLERS: &[&str] = &[
    "",
    " ",
    "\n",
    "\t",
    "\r\n  ",
    "/* c */",
    "/**/",
    "// line\n",
    " /* multi\nline */ ",
];

/// A random JSON document whose root is an object or an array.
#[derive(Clone, Debug)]
pub struct Doc(pub Json);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        let root = if bool::arbitrary(g) {
            object(g, 3)
        } else {
            array(g, 3)
        };
        Doc(root)
    }
}

fn scalar(g: &mut Gen) -> Json {
    match u8::arbitrary(g) % 6 {
        0 => Json::Null,
        1 => Json::Bool(bool::arbitrary(g)),
        2 => Json::from(i64::arbitrary(g)),
        3 => serde_json::Number::from_f64(f64::arbitrary(g)).map_or(Json::Null, Json::Number),
        _ => Json::String(String::arbitrary(g)),
    }
}

fn value(g: &mut Gen, depth: usize) -> Json {
    if depth == 0 {
        return scalar(g);
    }
    match u8::arbitrary(g) % 4 {
        0 => object(g, depth - 1),
        1 => array(g, depth - 1),
        _ => scalar(g),
    }
}

fn object(g: &mut Gen, depth: usize) -> Json {
    let len = usize::arbitrary(g) % 5;
    let map = (0..len)
        .map(|_| (String::arbitrary(g), value(g, depth)))
        .collect();
    Json::Object(map)
}

fn array(g: &mut Gen, depth: usize) -> Json {
    let len = usize::arbitrary(g) % 5;
    Json::Array((0..len).map(|_| value(g, depth)).collect())
}

/// Renders `doc` as JSONC, placing a filler chosen by `seeds` between every
/// pair of tokens.
pub fn render(doc: &Json, seeds: &[u8]) -> String {
    let mut renderer = Renderer {
        out: String::new(),
        seeds,
        next: 0,
    };
    renderer.value(doc);
    renderer.out
}

struct Renderer<'a> {
    out: String,
    seeds: &'a [u8],
    next: usize,
}

impl Renderer<'_> {
    fn filler(&mut self) {
        if self.seeds.is_empty() {
            return;
        }
        let seed = self.seeds[self.next % self.seeds.len()];
        self.next += 1;
        self.out.push_str(FILLERS[usize::from(seed) % FILLERS.len()]);
    }

    fn value(&mut self, value: &Json) {
        match value {
            Json::Object(map) => {
                self.out.push('{');
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.filler();
                    self.out.push_str(&Json::from(key.as_str()).to_string());
                    self.filler();
                    self.out.push(':');
                    self.filler();
                    self.value(value);
                    self.filler();
                }
                self.filler();
                self.out.push('}');
            }
            Json::Array(items) => {
                self.out.push('[');
                for (i, value) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.filler();
                    self.value(value);
                    self.filler();
                }
                self.filler();
                self.out.push(']');
            }
            scalar => self.out.push_str(&scalar.to_string()),
        }
    }
}

/// The raw lexeme the parser should keep for a string: the serialized form
/// without its quotes.
pub fn string_lexeme(s: &str) -> String {
    let quoted = Json::from(s).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Whether `parsed` has the same shape and lexemes as `expected`.
pub fn mirrors(parsed: &Value, expected: &Json) -> bool {
    match (parsed, expected) {
        (Value::Null, Json::Null) => true,
        (Value::True, Json::Bool(true)) | (Value::False, Json::Bool(false)) => true,
        (Value::Int(lexeme), Json::Number(n)) => {
            let text = n.to_string();
            *lexeme == text && !text.contains('.')
        }
        (Value::Double(lexeme), Json::Number(n)) => {
            let text = n.to_string();
            *lexeme == text && text.contains('.')
        }
        (Value::String(lexeme), Json::String(s)) => *lexeme == string_lexeme(s),
        (Value::Array(array), Json::Array(items)) => {
            array.len() == items.len()
                && array
                    .iter()
                    .zip(items)
                    .all(|(slot, item)| slot.is_some_and(|v| mirrors(v, item)))
        }
        (Value::Object(map), Json::Object(members)) => {
            map.len() == members.len()
                && members.iter().all(|(key, member)| {
                    map.get(&string_lexeme(key))
                        .is_some_and(|v| mirrors(v, member))
                })
        }
        _ => false,
    }
}

/// Number of tests to run for a property, scaled up on CI.
pub fn quickcheck_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
