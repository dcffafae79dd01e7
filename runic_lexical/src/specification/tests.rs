use regex::Regex;

use super::{Rule, Specification, TransformError};

fn regex(pattern: &str) -> Regex { Regex::new(pattern).unwrap() }

fn number_rule() -> Rule { Rule::new(regex(r"^\d+"), "NUM") }

fn plus_rule() -> Rule { Rule::new(regex(r"^\+"), "PLUS") }

#[test]
fn preserves_insertion_order() {
    let mut specification = Specification::new();
    specification.add(Rule::discard(regex(r"^\s+")));
    specification.add(number_rule());
    specification.add(plus_rule());

    assert_eq!(specification.len(), 3);
    assert!(specification[0].is_discard());
    assert_eq!(specification[1].kind(), Some("NUM"));
    assert_eq!(specification[2].kind(), Some("PLUS"));
}

#[test]
fn supports_positional_insertion_and_removal() {
    let mut specification = Specification::new();
    specification.add(number_rule());
    specification.add(plus_rule());

    specification.insert(0, Rule::discard(regex(r"^\s+")));
    assert_eq!(specification.len(), 3);
    assert!(specification[0].is_discard());

    let removed = specification.remove(1);
    assert_eq!(removed.kind(), Some("NUM"));
    assert_eq!(specification.len(), 2);
    assert_eq!(specification[1].kind(), Some("PLUS"));
}

#[test]
fn allows_duplicate_rules() {
    let mut specification = Specification::new();
    specification.add(number_rule());
    specification.add(number_rule());

    assert_eq!(specification.len(), 2);
    assert_eq!(specification[0], specification[1]);
}

#[test]
fn removes_the_first_equal_rule_by_value() {
    let mut specification = Specification::new();
    specification.add(number_rule());
    specification.add(plus_rule());
    specification.add(number_rule());

    assert!(specification.remove_rule(&number_rule()));
    assert_eq!(specification.len(), 2);
    assert_eq!(specification[0].kind(), Some("PLUS"));
    assert_eq!(specification[1].kind(), Some("NUM"));

    assert!(!specification.remove_rule(&Rule::new(regex("^x"), "X")));
}

#[test]
fn checks_containment_by_value() {
    let mut specification = Specification::new();
    specification.add(number_rule());

    assert!(specification.contains(&number_rule()));
    assert!(!specification.contains(&plus_rule()));

    specification.clear();
    assert!(specification.is_empty());
}

#[test]
fn compares_rules_by_pattern_kind_and_capture_plan() {
    assert_eq!(number_rule(), number_rule());
    assert_ne!(number_rule(), plus_rule());
    assert_ne!(number_rule(), Rule::discard(regex(r"^\d+")));

    let with_groups = || -> Rule {
        Rule::new(regex("^(?P<head>a)(?P<tail>b)"), "PAIR")
            .with_capture_groups(["head", "tail"])
            .with_group_join("-")
    };
    assert_eq!(with_groups(), with_groups());
    assert_ne!(
        with_groups(),
        with_groups().with_group_join("/")
    );
}

#[test]
fn compares_transforms_by_identity() {
    let transformed = || {
        number_rule()
            .with_transform(|value| async move { Ok::<_, TransformError>(value) })
    };

    // two separately built transforms are distinct even if textually alike
    assert_ne!(transformed(), transformed());
    assert_ne!(transformed(), number_rule());
}

#[test]
fn iterates_in_order() {
    let mut specification = Specification::new();
    specification.add(number_rule());
    specification.add(plus_rule());

    let kinds: Vec<_> = specification.iter().filter_map(Rule::kind).collect();
    assert_eq!(kinds, ["NUM", "PLUS"]);
}
