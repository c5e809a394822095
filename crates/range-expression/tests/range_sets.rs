//! End-to-end behaviour of typed range sets over built-in value types.
#![expect(clippy::expect_used, reason = "tests assert compilation succeeds")]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rstest::rstest;

use range_expression::{RangeError, RangeSet};

fn ints(pattern: &str) -> RangeSet<i32> {
    RangeSet::new(pattern).expect("integer pattern should compile")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[rstest]
#[case("1..5", 1, 5)]
#[case("-10..-2", -10, -2)]
#[case("0..0", 0, 0)]
#[case(" 3 .. 8 ", 3, 8)]
fn bounded_ranges_are_inclusive_on_both_ends(
    #[case] pattern: &str,
    #[case] low: i32,
    #[case] high: i32,
) {
    let set = ints(pattern);
    for value in (low - 5)..=(high + 5) {
        assert_eq!(
            set.contains(&value),
            (low..=high).contains(&value),
            "{value} against `{pattern}`"
        );
    }
}

#[test]
fn open_ranges_extend_to_the_type_limits() {
    let up_to = ints("..5");
    let from = ints("5..");
    for value in [i32::MIN, -1, 4, 5, 6, i32::MAX] {
        assert_eq!(up_to.contains(&value), value <= 5, "..5 with {value}");
        assert_eq!(from.contains(&value), value >= 5, "5.. with {value}");
    }
}

#[test]
fn joined_pattern_is_the_union_of_its_parts() {
    let parts = ["..-20", "-3..4", "9", "15..30", "100.."];
    let joined = ints(&parts.join(","));
    let singles: Vec<_> = parts.iter().map(|part| ints(part)).collect();
    for value in -50..150 {
        let any = singles.iter().any(|set| set.contains(&value));
        assert_eq!(joined.contains(&value), any, "value {value}");
    }
}

#[rstest]
#[case("1..5,7..10,15..20")]
#[case("  1 ..5 ,7")]
#[case("..3,5..9,10.. 150,-5 ..-1 ,900..")]
fn display_returns_the_pattern_verbatim(#[case] pattern: &str) {
    assert_eq!(ints(pattern).to_string(), pattern);
}

#[rstest]
#[case("1..2..3")]
#[case("1....3")]
#[case("abc..d")]
#[case("")]
#[case("  ")]
#[case("..")]
#[case("*")]
#[case("5x")]
fn malformed_patterns_are_invalid(#[case] pattern: &str) {
    let result = RangeSet::<i32>::new(pattern);
    assert!(
        matches!(result, Err(RangeError::InvalidPattern { .. })),
        "`{pattern}` gave {result:?}"
    );
}

#[rstest]
#[case("0...5")]
#[case("...5")]
#[case("1.5...2")]
#[case(".5..1")]
#[case("1..2.")]
#[case("1e400..")]
fn malformed_float_patterns_are_invalid(#[case] pattern: &str) {
    let result = RangeSet::<f64>::new(pattern);
    assert!(
        matches!(result, Err(RangeError::InvalidPattern { .. })),
        "`{pattern}` gave {result:?}"
    );
}

#[test]
fn trailing_commas_are_tolerated_in_typed_mode() {
    let set = ints("1..5,,7,");
    assert_eq!(set.len(), 2);
    assert!(set.contains(&7));
}

#[rstest]
#[case("5..1")]
#[case("1..2,10..-10")]
fn reversed_ranges_are_rejected(#[case] pattern: &str) {
    let result = RangeSet::<i32>::new(pattern);
    assert!(
        matches!(result, Err(RangeError::InvalidRange { .. })),
        "`{pattern}` gave {result:?}"
    );
}

#[rstest]
#[case(1.5, true)]
#[case(1.75, false)]
#[case(2.0, true)]
#[case(-1.5, true)]
#[case(3.000_001, false)]
fn floating_point_scenario(#[case] value: f64, #[case] expected: bool) {
    let set: RangeSet<f64> = "-1.5..1.5,2.0..3.0".parse().expect("float pattern");
    assert_eq!(set.contains(&value), expected);
}

#[test]
fn date_scenario() {
    let set: RangeSet<NaiveDate> = "2024-01-01..2024-12-31".parse().expect("date pattern");
    assert!(set.contains(&date(2024, 6, 15)));
    assert!(set.contains(&date(2024, 12, 31)));
    assert!(!set.contains(&date(2025, 1, 1)));
    assert!(matches!(
        RangeSet::<NaiveDate>::new("2024-02-30"),
        Err(RangeError::InvalidPattern { .. })
    ));
}

#[test]
fn date_time_ranges_end_at_midnight_unless_told_otherwise() {
    let set: RangeSet<NaiveDateTime> =
        "2024-01-01..2024-12-31".parse().expect("date-time pattern");
    let noon = |d: NaiveDate| d.and_hms_opt(12, 0, 0).expect("valid time");
    assert!(set.contains(&noon(date(2024, 6, 15))));
    assert!(!set.contains(&noon(date(2024, 12, 31))));

    let precise: RangeSet<NaiveDateTime> = "2024-12-31T08:00..2024-12-31T17:30:00Z"
        .parse()
        .expect("timestamped pattern");
    assert!(precise.contains(&noon(date(2024, 12, 31))));
}

#[test]
fn time_of_day_ranges() {
    let set: RangeSet<NaiveTime> = "09:00..12:30, 13:15..17:00".parse().expect("time pattern");
    let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid time");
    assert!(set.contains(&at(12, 30)));
    assert!(!set.contains(&at(13, 0)));
    assert!(set.contains(&at(16, 59)));
    assert!(RangeSet::<NaiveTime>::new("09:60").is_err());
}

#[test]
fn custom_parser_scenario() {
    let set = RangeSet::<i32>::builder("A..C")
        .parser(|text: &str| match text {
            "A" => Ok(1),
            "B" => Ok(2),
            "C" => Ok(3),
            other => Err(format!("unknown grade `{other}`")),
        })
        .build()
        .expect("custom parser pattern");
    assert!(set.contains(&1));
    assert!(set.contains(&3));
    assert!(!set.contains(&4));

    let Err(err) = RangeSet::<i32>::builder("A..D")
        .parser(|text: &str| match text {
            "A" => Ok(1),
            other => Err(format!("unknown grade `{other}`")),
        })
        .build()
    else {
        panic!("unknown grade should be rejected");
    };
    let info = err.pattern_info().expect("parse failures are pattern errors");
    assert_eq!(info.literal.as_deref(), Some("D"));
}

#[test]
fn unknown_types_need_a_parser() {
    #[derive(Clone, PartialEq, PartialOrd, Debug)]
    struct Opaque(u8);

    let result = RangeSet::<Opaque>::new("1..2");
    assert!(matches!(
        result,
        Err(RangeError::UnsupportedType { type_name, .. }) if type_name.contains("Opaque")
    ));
}

#[test]
fn ranges_view_reports_open_sides_as_none() {
    let set = ints("..3,5..9,12");
    let pairs: Vec<_> = set.ranges().map(|(s, e)| (s.copied(), e.copied())).collect();
    assert_eq!(
        pairs,
        vec![(None, Some(3)), (Some(5), Some(9)), (Some(12), Some(12))]
    );
}
