use chrono::NaiveDateTime;
use indexmap::IndexMap;

use crate::calendars::{
    add_business_days, date_range, filter_weekdays, format_date_range, get_day_of_week_str,
    is_holiday, is_weekend, month_ranges, ndt, next_business_day, time_difference_in_minutes,
    HolidaySet, DAY_OF_WEEK_STRINGS,
};
use crate::json::JSON;
use crate::timeinfo::{TimeInfoExtractor, TimeInfoSpec};
use crate::timezones::TzConverter;

fn parse(dt: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(dt, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn weekday_field_over_one_week() {
    // 2023-12-04 is a Monday and tm_wday counts Monday-first.
    let extractor = TimeInfoExtractor::from_attrs(&["tm_wday"]).unwrap();
    let week: Vec<i32> = date_range(&ndt(2023, 12, 4), &ndt(2023, 12, 11))
        .map(|d| extractor.extract(&d)["tm_wday"])
        .collect();
    assert_eq!(vec![0, 1, 2, 3, 4, 5, 6], week);
}

#[test]
fn day_names_from_extracted_weekday() {
    // The name table is Sunday-first, so the Monday-first field rotates by one.
    let extractor = TimeInfoExtractor::from_attrs(&["tm_wday"]).unwrap();
    let sunday = ndt(2023, 12, 3);
    let wday = extractor.extract(&sunday)["tm_wday"];
    assert_eq!(6, wday);
    let name = get_day_of_week_str((wday as u8 + 1) % 7).unwrap();
    assert_eq!(DAY_OF_WEEK_STRINGS[0], name);
    assert_eq!("Sun", name);
}

#[test]
fn weekend_days_in_a_range() {
    let days: Vec<_> = date_range(&ndt(2023, 12, 1), &ndt(2023, 12, 8)).collect();
    let weekend = filter_weekdays(&days);
    assert_eq!(vec![ndt(2023, 12, 2), ndt(2023, 12, 3)], weekend);
    assert!(weekend.iter().all(is_weekend));
}

#[test]
fn business_days_within_month_span() {
    let spans = month_ranges(&ndt(2023, 12, 1), &ndt(2023, 12, 31));
    assert_eq!(1, spans.len());
    let (start, end) = spans[0];
    let business: Vec<_> = date_range(&start, &end).filter(|d| !is_weekend(d)).collect();
    assert_eq!(21, business.len());
    assert_eq!(ndt(2023, 12, 1), business[0]);
    assert_eq!(ndt(2023, 12, 29), *business.last().unwrap());
}

#[test]
fn formatted_range_of_business_window() {
    let start = ndt(2023, 12, 1);
    let end = add_business_days(&start, 3).unwrap();
    assert_eq!(ndt(2023, 12, 6), end);
    assert_eq!(
        "2023-12-01 to 2023-12-06",
        format_date_range(&start, &end, "%Y-%m-%d").unwrap()
    );
}

#[test]
fn minutes_across_next_business_day() {
    let friday_close = parse("2023-12-01 17:00:00");
    assert_eq!(parse("2023-12-04 17:00:00"), next_business_day(&friday_close));
    let monday_open = parse("2023-12-04 09:00:00");
    assert_eq!(64 * 60, time_difference_in_minutes(&friday_close, &monday_open));
}

#[test]
fn holidays_from_a_serialized_set() {
    let js = r#"["2023-12-25T00:00:00","2024-01-01T00:00:00"]"#;
    let hols = HolidaySet::from_json(js).unwrap();
    assert!(is_holiday(&ndt(2023, 12, 25), &hols));
    assert!(is_holiday(&ndt(2024, 1, 1), &hols));
    assert!(!is_holiday(&ndt(2023, 12, 24), &hols));
}

#[test]
fn converted_instant_feeds_extraction() {
    let conv = TzConverter::try_from_utc("Asia/Tokyo").unwrap();
    let extractor = TimeInfoExtractor::from_attrs(&["tm_mday", "tm_hour"]).unwrap();
    let utc_evening = parse("2023-06-30 22:00:00");
    let local = conv.convert(&utc_evening).naive_local();
    let info = extractor.extract(&local);
    assert_eq!(Some(&1), info.get("tm_mday")); // crossed into July in Tokyo
    assert_eq!(Some(&7), info.get("tm_hour"));
}

#[test]
fn extractor_survives_json_round_trip() {
    let spec = TimeInfoSpec::FieldRenameMap(IndexMap::from([
        ("hour".to_string(), "tm_hour".to_string()),
        ("minute".to_string(), "tm_min".to_string()),
    ]));
    let extractor = TimeInfoExtractor::try_new(spec).unwrap();
    let restored = TimeInfoExtractor::from_json(&extractor.to_json().unwrap()).unwrap();
    let instant = parse("2023-06-15 08:45:00");
    assert_eq!(extractor.extract(&instant), restored.extract(&instant));
    assert_eq!(Some(&8), restored.extract(&instant).get("hour"));
}

#[test]
fn converter_survives_json_round_trip() {
    let conv = TzConverter::try_new("America/New_York", "UTC").unwrap();
    let restored = TzConverter::from_json(&conv.to_json().unwrap()).unwrap();
    let instant = ndt(2023, 1, 15);
    assert_eq!(conv.convert(&instant), restored.convert(&instant));
}
