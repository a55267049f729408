//! Media query resolution tests.
//!
//! Exercises the public API against the breakpoint tables styles are usually
//! authored with.

use breakpoints::{
    BreakpointTable, CssWrapper, Error, Media, Query, Rule, ToCss, bound_below, next_width,
    normalize, resolve, resolve_condition, smallest_width,
};
use proptest::prelude::*;

fn three() -> BreakpointTable {
    BreakpointTable::new([("sm", 0), ("md", 768), ("lg", 1024)]).expect("valid table")
}

fn four() -> BreakpointTable {
    BreakpointTable::new([("sm", 0), ("md", 768), ("lg", 1024), ("xl", 1280)])
        .expect("valid table")
}

// ============================================================================
// Rendered Conditions
// ============================================================================

#[test]
fn test_only_middle_breakpoint() {
    assert_eq!(
        resolve_condition(&three(), "md", Rule::Only, None).unwrap(),
        "(min-width: 768px) and (max-width: 1023px)"
    );
}

#[test]
fn test_up_smallest_breakpoint() {
    assert_eq!(
        resolve_condition(&three(), "sm", Rule::Up, None).unwrap(),
        "(min-width: 0px)"
    );
}

#[test]
fn test_range_with_reversed_keys() {
    assert_eq!(
        resolve_condition(&four(), "lg", Rule::Down, Some("sm")).unwrap(),
        "(min-width: 0px) and (max-width: 1279px)"
    );
}

#[test]
fn test_range_ending_at_highest_fails() {
    assert!(matches!(
        resolve_condition(&three(), "lg", Rule::Down, Some("sm")),
        Err(Error::NoHigherBreakpoint { .. })
    ));
}

#[test]
fn test_down_on_highest_is_ambiguous() {
    let err = resolve_condition(&three(), "lg", Rule::Down, None).unwrap_err();
    assert!(matches!(err, Error::AmbiguousDownRule { ref key } if key == "lg"));
    assert!(err.to_string().contains("do you need more breakpoints"));
}

#[test]
fn test_only_on_highest_fails() {
    assert!(matches!(
        resolve_condition(&three(), "lg", Rule::Only, None),
        Err(Error::NoHigherBreakpoint { width: 1024 })
    ));
}

#[test]
fn test_declaration_order_does_not_matter() {
    let shuffled = BreakpointTable::new([("lg", 1024), ("sm", 0), ("md", 768)]).unwrap();
    for key in ["sm", "md"] {
        for rule in [Rule::Up, Rule::Down, Rule::Only] {
            assert_eq!(
                resolve_condition(&shuffled, key, rule, None).unwrap(),
                resolve_condition(&three(), key, rule, None).unwrap(),
                "{key} {rule}"
            );
        }
    }
}

#[test]
fn test_media_prelude() {
    let condition = resolve(&four(), Query::between("md", "lg")).unwrap();
    assert_eq!(
        condition.to_media(),
        "@media only screen and (min-width: 768px) and (max-width: 1279px)"
    );
}

// ============================================================================
// Resolver Edge Cases
// ============================================================================

#[test]
fn test_empty_table_errors() {
    let empty = BreakpointTable::default();
    assert!(matches!(smallest_width(&empty), Err(Error::EmptyTable)));
    assert!(matches!(next_width(&empty, 0), Err(Error::EmptyTable)));
}

#[test]
fn test_single_breakpoint_table() {
    let table = BreakpointTable::new([("base", 0)]).unwrap();
    assert_eq!(
        resolve_condition(&table, "base", Rule::Up, None).unwrap(),
        "(min-width: 0px)"
    );
    assert!(matches!(
        resolve_condition(&table, "base", Rule::Down, None),
        Err(Error::AmbiguousDownRule { .. })
    ));
}

// ============================================================================
// Mixins
// ============================================================================

#[test]
fn test_media_with_closure_wrapper() {
    let media = Media::new(four(), |media: &str, rules: Vec<&str>| {
        format!("{media} {{ {} }}", rules.join(" "))
    });

    let css = media
        .between("sm", "md")
        .unwrap()
        .apply(vec!["margin: 0;", "padding: 0;"]);
    assert_eq!(
        css,
        "@media only screen and (min-width: 0px) and (max-width: 1023px) { margin: 0; padding: 0; }"
    );
}

#[test]
fn test_shorthands_cover_every_breakpoint() {
    let media = Media::new(four(), CssWrapper);
    let shorthands = media.shorthands().unwrap();

    assert_eq!(shorthands.len(), media.list().len());
    for (name, mixin) in &shorthands {
        let width = media.table().get(name).unwrap();
        assert_eq!(
            mixin.media(),
            format!("@media only screen and (min-width: {width}px)")
        );
    }

    let css = shorthands[3].1.apply("font-size: 18px;").unwrap();
    assert_eq!(
        css,
        "@media only screen and (min-width: 1280px) { font-size: 18px; }"
    );
}

// ============================================================================
// Properties
// ============================================================================

fn arb_table() -> impl Strategy<Value = BreakpointTable> {
    prop::collection::btree_set(0u32..5_000, 1..10).prop_map(|widths| {
        BreakpointTable::new(widths.into_iter().enumerate().map(|(i, w)| (format!("bp{i}"), w)))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn prop_up_renders_one_min_width_clause(table in arb_table()) {
        for bp in &table {
            let condition = resolve_condition(&table, &bp.name, Rule::Up, None).unwrap();
            prop_assert_eq!(condition, format!("(min-width: {}px)", bp.width));
        }
    }

    #[test]
    fn prop_only_spans_to_next_breakpoint(table in arb_table()) {
        let widths = table.ascending_widths().to_vec();
        for bp in &table {
            let result = resolve(&table, Query::only(&bp.name));
            match widths.iter().find(|&&w| w > bp.width) {
                Some(&next) => {
                    let condition = result.unwrap();
                    prop_assert_eq!(
                        condition.to_css_string(),
                        format!("(min-width: {}px) and (max-width: {}px)", bp.width, next - 1)
                    );
                }
                None => prop_assert!(
                    matches!(result, Err(Error::NoHigherBreakpoint { .. })),
                    "expected NoHigherBreakpoint for {}, got {:?}",
                    bp.name,
                    result
                ),
            }
        }
    }

    #[test]
    fn prop_range_matches_normalized_bounds(table in arb_table(), a in 0usize..10, b in 0usize..10) {
        let names: Vec<&str> = table.names().collect();
        let (a, b) = (names[a % names.len()], names[b % names.len()]);
        let (low, high) = normalize(&table, a, Some(b)).unwrap();
        let high = high.unwrap();

        match bound_below(&table, high) {
            Ok(bound) => {
                let expected = format!(
                    "(min-width: {}px) and (max-width: {}px)",
                    table.get(low).unwrap(),
                    bound
                );
                prop_assert_eq!(resolve_condition(&table, a, Rule::Up, Some(b)).unwrap(), expected.clone());
                prop_assert_eq!(resolve_condition(&table, b, Rule::Down, Some(a)).unwrap(), expected);
            }
            Err(_) => {
                prop_assert!(resolve_condition(&table, a, Rule::Only, Some(b)).is_err());
            }
        }
    }
}
