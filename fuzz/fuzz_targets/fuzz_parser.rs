#![no_main]

use arbitrary::Arbitrary;
use jsonc_tree::{ParserOptions, Value, parse, parse_with_options};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    allow_comments: bool,
    allow_trailing_content: bool,
    max_depth: u8,
    array_capacity: u8,
    array_growth_factor: u8,
    data: &'a [u8],
}

fn check_tree(value: &Value, depth: usize, max_depth: usize) {
    assert!(depth <= max_depth, "tree deeper than max_depth");
    if let Some(array) = value.as_array() {
        assert!(array.len() <= array.capacity());
        for item in array.iter() {
            check_tree(item.expect("parsed arrays are dense"), depth + 1, max_depth);
        }
    } else if let Some(map) = value.as_object() {
        assert_eq!(map.iter().count(), map.len());
        for child in map.values() {
            check_tree(child, depth + 1, max_depth);
        }
    }
}

fuzz_target!(|input: Input<'_>| {
    let options = ParserOptions {
        allow_comments: input.allow_comments,
        allow_trailing_content: input.allow_trailing_content,
        max_depth: usize::from(input.max_depth),
        array_capacity: usize::from(input.array_capacity),
        array_growth_factor: usize::from(input.array_growth_factor),
    };

    match parse_with_options(input.data, options) {
        Ok(root) => {
            assert!(root.is_array() || root.is_object());
            check_tree(&root, 1, options.max_depth);
        }
        Err(err) => assert!(err.position <= input.data.len()),
    }

    // Anything strict JSON accepts as a container must parse with defaults.
    if let Ok(reference) = serde_json::from_slice::<serde_json::Value>(input.data) {
        if reference.is_array() || reference.is_object() {
            let parsed = parse(input.data);
            assert!(parsed.is_ok(), "rejected valid JSON: {parsed:?}");
        }
    }
});
