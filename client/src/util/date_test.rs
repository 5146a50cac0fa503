use super::*;
use time::Month;

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

#[test]
fn format_iso_date_zero_pads_month_and_day() {
    assert_eq!(format_iso_date(date(2012, Month::March, 4)), "2012-03-04");
}

#[test]
fn parse_iso_date_accepts_surrounding_whitespace() {
    assert_eq!(parse_iso_date(" 2020-12-31 "), Some(date(2020, Month::December, 31)));
}

#[test]
fn parse_iso_date_rejects_garbage_and_impossible_days() {
    assert_eq!(parse_iso_date(""), None);
    assert_eq!(parse_iso_date("31.12.2020"), None);
    assert_eq!(parse_iso_date("2021-02-29"), None);
    assert_eq!(parse_iso_date("2020-01-01T00:00:00Z"), None);
}

#[test]
fn iso_round_trip_keeps_calendar_day() {
    for d in [
        date(1999, Month::January, 1),
        date(2000, Month::February, 29),
        date(2023, Month::October, 31),
        date(2024, Month::December, 31),
    ] {
        assert_eq!(parse_iso_date(&format_iso_date(d)), Some(d));
    }
}

#[test]
fn format_display_date_uses_day_month_year() {
    assert_eq!(format_display_date(date(2015, Month::July, 9)), "09.07.2015");
}

#[test]
fn iso_date_serde_adapter_rejects_bad_strings() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        #[serde(with = "iso_date")]
        #[allow(dead_code)]
        d: Date,
    }
    assert!(serde_json::from_str::<Wrapper>(r#"{"d":"2020-13-01"}"#).is_err());
    assert!(serde_json::from_str::<Wrapper>(r#"{"d":"2020-12-01"}"#).is_ok());
}
