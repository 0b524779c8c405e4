//! Integration tests for the CSS parser.

use plume_css::parser::{CSSParser, Declaration, Rule, parse_stylesheet};
use plume_css::tokenizer::CSSTokenizer;

fn declaration(name: &str, value: &str) -> Declaration {
    Declaration {
        name: name.to_string(),
        value: value.to_string(),
        important: false,
    }
}

#[test]
fn test_style_rule_parts() {
    let sheet = parse_stylesheet("  h1,\n  h2   .title { color: red; margin : 0  auto }  ");
    let rules: Vec<_> = sheet.style_rules().collect();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].selector, "h1, h2 .title");
    assert_eq!(
        rules[0].declarations,
        vec![declaration("color", "red"), declaration("margin", "0 auto")]
    );
    assert_eq!(
        rules[0].source,
        "h1,\n  h2   .title { color: red; margin : 0  auto }"
    );
}

#[test]
fn test_duplicate_declarations_are_kept() {
    let sheet = parse_stylesheet("p { color: red; color: blue }");
    let rule = sheet.style_rules().next().unwrap();
    assert_eq!(
        rule.declarations,
        vec![declaration("color", "red"), declaration("color", "blue")]
    );
}

#[test]
fn test_important_annotation() {
    let sheet = parse_stylesheet("p { color: red ! IMPORTANT; margin: 0 }");
    let rule = sheet.style_rules().next().unwrap();
    assert_eq!(
        rule.declarations[0],
        Declaration {
            name: "color".to_string(),
            value: "red".to_string(),
            important: true,
        }
    );
    assert_eq!(rule.declarations[0].to_inline(), "color:red !important");
    assert_eq!(rule.declarations[1].to_inline(), "margin:0");
}

#[test]
fn test_function_values_keep_inner_semicolons_out() {
    let sheet = parse_stylesheet("a { background: url(x.png) no-repeat, rgb(1, 2, 3); }");
    let rule = sheet.style_rules().next().unwrap();
    assert_eq!(
        rule.declarations,
        vec![declaration("background", "url(x.png) no-repeat, rgb(1, 2, 3)")]
    );
}

#[test]
fn test_invalid_declarations_are_dropped() {
    let sheet = parse_stylesheet("p { color red; : blue; margin:; padding: 1px }");
    let rule = sheet.style_rules().next().unwrap();
    assert_eq!(rule.declarations, vec![declaration("padding", "1px")]);
}

#[test]
fn test_at_rules_keep_verbatim_source() {
    let css = "@import 'a.css';\n@media screen and (min-width: 10px) {\n  p { color: red }\n}\nb { x: y }";
    let sheet = parse_stylesheet(css);
    let at_rules: Vec<_> = sheet.at_rules().collect();
    assert_eq!(at_rules.len(), 2);
    assert_eq!(at_rules[0].name, "import");
    assert_eq!(at_rules[0].prelude, "'a.css'");
    assert_eq!(at_rules[0].source, "@import 'a.css';");
    assert_eq!(at_rules[1].name, "media");
    assert_eq!(at_rules[1].prelude, "screen and (min-width: 10px)");
    assert_eq!(
        at_rules[1].source,
        "@media screen and (min-width: 10px) {\n  p { color: red }\n}"
    );

    // The nested `p` rule is not a top-level rule.
    let selectors: Vec<_> = sheet.style_rules().map(|r| r.selector.as_str()).collect();
    assert_eq!(selectors, vec!["b"]);
}

#[test]
fn test_rule_order_is_source_order() {
    let sheet = parse_stylesheet("a {} @font-face { font-family: X } b {}");
    let kinds: Vec<&str> = sheet
        .rules
        .iter()
        .map(|rule| match rule {
            Rule::Style(style) => style.selector.as_str(),
            Rule::At(at) => at.name.as_str(),
        })
        .collect();
    assert_eq!(kinds, vec!["a", "font-face", "b"]);
}

#[test]
fn test_comments_and_cdo_are_ignored() {
    let sheet = parse_stylesheet("<!-- /* lead */ p /* mid */ { color: /* v */ red } -->");
    let rule = sheet.style_rules().next().unwrap();
    assert_eq!(rule.selector, "p");
    assert_eq!(rule.declarations, vec![declaration("color", "red")]);
}

#[test]
fn test_unterminated_input_recovers() {
    let sheet = parse_stylesheet("p { color: red");
    let rule = sheet.style_rules().next().unwrap();
    assert_eq!(rule.declarations, vec![declaration("color", "red")]);

    // A prelude with no block is dropped.
    assert!(parse_stylesheet("p.dangling").rules.is_empty());
}

#[test]
fn test_parser_from_tokens() {
    let css = "div { width: 50% }";
    let mut tokenizer = CSSTokenizer::new(css);
    tokenizer.run();
    let sheet = CSSParser::new(css, tokenizer.into_tokens()).parse_stylesheet();
    assert_eq!(sheet.rules.len(), 1);
    assert!(matches!(&sheet.rules[0], Rule::Style(rule) if rule.declarations[0].value == "50%"));
}
