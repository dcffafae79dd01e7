use regex::Regex;

use super::Pattern;

fn regex(pattern: &str) -> Regex { Regex::new(pattern).unwrap() }

#[test]
fn matches_only_at_the_start() {
    let pattern = regex(r"\d+");

    let matched = pattern.find_at_start("123abc").unwrap();
    assert_eq!(matched.text(), "123");
    assert_eq!(matched.len(), 3);
    assert!(!matched.is_empty());

    // the digits appear later in the slice, so this is not a match
    assert!(pattern.find_at_start("abc123").is_none());
}

#[test]
fn explicit_anchors_compose() {
    let pattern = regex(r"^[a-z]+");

    assert_eq!(pattern.find_at_start("abc1").unwrap().text(), "abc");
    assert!(pattern.find_at_start("1abc").is_none());
}

#[test]
fn surfaces_present_named_captures() {
    let pattern = regex(r"(?P<head>a)(?P<tail>b)?");

    let matched = pattern.find_at_start("ab").unwrap();
    assert_eq!(matched.named("head"), Some("a"));
    assert_eq!(matched.named("tail"), Some("b"));

    let matched = pattern.find_at_start("a").unwrap();
    assert_eq!(matched.named("head"), Some("a"));
    assert_eq!(matched.named("tail"), None);
    assert_eq!(matched.named("missing"), None);
}

#[test]
fn exposes_its_textual_form() {
    let pattern = regex(r"^\s+");
    assert_eq!(Pattern::as_str(&pattern), r"^\s+");
}
