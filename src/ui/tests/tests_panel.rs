//! Tests for panel identifiers

use super::super::Panel;
use rstest::rstest;

#[rstest]
#[case("expression", Panel::Expression)]
#[case("Expr", Panel::Expression)]
#[case(" rules ", Panel::Rules)]
#[case("r", Panel::Rules)]
fn test_parse_panel(#[case] name: &str, #[case] expected: Panel) {
    assert_eq!(name.parse::<Panel>(), Ok(expected));
}

#[test]
fn test_unknown_panel() {
    let err = "grammar".parse::<Panel>().unwrap_err();
    assert!(err.to_string().contains("unknown panel 'grammar'"));
}

#[test]
fn test_display_round_trips() {
    for panel in [Panel::Expression, Panel::Rules] {
        assert_eq!(panel.to_string().parse::<Panel>(), Ok(panel));
    }
}

#[test]
fn test_unknown_panel_reports_input_as_typed() {
    let err = " Grammar ".parse::<Panel>().unwrap_err();
    assert_eq!(err.0, " Grammar ");
}
