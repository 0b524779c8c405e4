//! Integration tests for style attribute merging.

use plume_css::{StyleMap, merge_styles};

#[test]
fn test_new_value_wins_old_position_kept() {
    assert_eq!(
        merge_styles("color:red;font-size:14px", "color:blue;margin:10px"),
        "color:blue;font-size:14px;margin:10px"
    );
}

#[test]
fn test_empty_inputs() {
    assert_eq!(merge_styles("", ""), "");
    assert_eq!(merge_styles("", "color:red"), "color:red");
    assert_eq!(merge_styles("color:red", ""), "color:red");
}

#[test]
fn test_duplicates_within_one_input() {
    assert_eq!(
        merge_styles("color:red;margin:0;color:green", "padding:0"),
        "color:green;margin:0;padding:0"
    );
}

#[test]
fn test_whitespace_is_trimmed() {
    assert_eq!(
        merge_styles("  color : red ;  ", " margin:  0 auto "),
        "color:red;margin:0 auto"
    );
}

#[test]
fn test_malformed_fragments_are_dropped() {
    assert_eq!(
        merge_styles("color;:blue;margin:", "padding:1px;;width"),
        "padding:1px"
    );
}

#[test]
fn test_quotes_are_safe_for_attributes() {
    assert_eq!(
        merge_styles("", r#"font-family:"Open Sans";content:"a""#),
        "font-family:'Open Sans';content:'a'"
    );
}

#[test]
fn test_repeated_merges_accumulate() {
    let first = merge_styles("", "color:red;margin:0");
    let second = merge_styles(&first, "margin:4px;padding:2px");
    let third = merge_styles(&second, "color:blue");
    assert_eq!(third, "color:blue;margin:4px;padding:2px");
}

#[test]
fn test_style_map_iteration_order() {
    let mut map = StyleMap::parse("b:1;a:2");
    map.extend_from("c:3;b:4");
    let pairs: Vec<(&str, &str)> = map.iter().collect();
    assert_eq!(pairs, vec![("b", "4"), ("a", "2"), ("c", "3")]);
    assert!(!map.is_empty());
    assert!(StyleMap::new().is_empty());
}
