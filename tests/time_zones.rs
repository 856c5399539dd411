extern crate caltime;

use std::borrow::Cow;

use caltime::{LocalDateTime, LocalDate, LocalTime, Month, DatePiece, TimePiece};
use caltime::{ZonedDateTime, Duration};
use caltime::zone::{StaticTimeZone, FixedTimespanSet, FixedTimespan, TimeZoneSource, TimeZone};


// A northern-hemisphere zone at UTC+0 standard time, one hour of
// daylight-saving in the summers of 2008 through 2010.
const TEST_ZONESET: &'static StaticTimeZone<'static> = &StaticTimeZone {
    name: "Test Zoneset",
    fixed_timespans: FixedTimespanSet {
        first: FixedTimespan {
            offset: 0,
            is_dst: false,
            name: Cow::Borrowed("ZONE_STD"),
        },
        rest: &[
            (1206838800, FixedTimespan {
                offset: 3600,
                is_dst: true,
                name: Cow::Borrowed("ZONE_DST"),
            }),
            (1224982800, FixedTimespan {
                offset: 0,
                is_dst: false,
                name: Cow::Borrowed("ZONE_STD"),
            }),
            (1238288400, FixedTimespan {
                offset: 3600,
                is_dst: true,
                name: Cow::Borrowed("ZONE_DST"),
            }),
            (1256432400, FixedTimespan {
                offset: 0,
                is_dst: false,
                name: Cow::Borrowed("ZONE_STD"),
            }),
            (1269738000, FixedTimespan {
                offset: 3600,
                is_dst: true,
                name: Cow::Borrowed("ZONE_DST"),
            }),
            (1288486800, FixedTimespan {
                offset: 0,
                is_dst: false,
                name: Cow::Borrowed("ZONE_STD"),
            }),
        ]
    }
};

fn zone() -> TimeZone {
    TimeZone(TimeZoneSource::Static(TEST_ZONESET))
}

fn local(year: i64, month: Month, day: i8, hour: i8, minute: i8) -> LocalDateTime {
    LocalDateTime::new(
        LocalDate::ymd(year, month, day).unwrap(),
        LocalTime::hms(hour, minute, 0).unwrap(),
    )
}


#[test]
fn construction() {
    let test_date = local(2010, Month::June, 9, 15, 15);

    let zone = zone();
    assert_eq!(zone.offset(test_date), 3600);

    let zoned_date = zone.convert_local(test_date).unwrap_precise();
    assert_eq!(zoned_date.year(), 2010);
    assert_eq!(zoned_date.hour(), 15);

    let instant = local(2010, Month::June, 9, 14, 15).to_instant();
    assert_eq!(instant, zoned_date.to_instant());
}

#[test]
fn ambiguity() {
    let test_date = local(2010, Month::October, 31, 1, 15);

    let converted = zone().convert_local(test_date);
    assert!(converted.is_ambiguous(),
        "Local time {:?} should be ambiguous", converted);
}

#[test]
fn impossible() {
    let test_date = local(2010, Month::March, 28, 1, 15);

    let converted = zone().convert_local(test_date);
    assert!(converted.is_impossible(),
        "Local time {:?} should be impossible", converted);
}

#[test]
fn dst_queries() {
    let summer = local(2010, Month::June, 9, 12, 0);
    let winter = local(2010, Month::January, 9, 12, 0);

    let zone = zone();
    assert!(zone.is_dst(summer));
    assert_eq!(zone.offset(summer), 3600);
    assert_eq!(zone.standard_offset(summer), 0);

    assert!(!zone.is_dst(winter));
    assert_eq!(zone.offset(winter), 0);
}

#[test]
fn building_from_fields_resolves_dst() {
    // a summer wall clock picks up the daylight-saving offset
    let time = ZonedDateTime::in_zone(2010, Month::June, 9, 15, 15, 0, 0, zone()).unwrap();

    assert_eq!(time.hour(), 15);
    assert_eq!(time.offset().hours(), 1);
    assert_eq!(time.to_instant(), local(2010, Month::June, 9, 14, 15).to_instant());

    // a winter wall clock doesn’t
    let time = ZonedDateTime::in_zone(2010, Month::January, 9, 15, 15, 0, 0, zone()).unwrap();

    assert_eq!(time.hour(), 15);
    assert_eq!(time.offset().hours(), 0);
    assert_eq!(time.to_instant(), local(2010, Month::January, 9, 15, 15).to_instant());
}

#[test]
fn conversion_preserves_the_instant() {
    let utc = ZonedDateTime::at(local(2010, Month::June, 9, 14, 15).to_instant().seconds());
    let zoned = utc.to_zone(&zone());

    assert_eq!(zoned.hour(), 15);
    assert_eq!(zoned.minute(), 15);
    assert_eq!(zoned, utc);

    let back = zoned.to_universal_time();
    assert_eq!(back.hour(), 14);
    assert_eq!(back, utc);
}

#[test]
fn zone_names() {
    let summer = local(2010, Month::June, 9, 12, 0);
    let winter = local(2010, Month::January, 9, 12, 0);

    let zone = zone();
    assert_eq!(zone.zone_name(), Some("Test Zoneset"));
    assert_eq!(zone.name(summer), "ZONE_DST");
    assert_eq!(zone.name(winter), "ZONE_STD");
    assert!(!zone.is_fixed());
}

#[test]
fn start_of_day_in_the_summer() {
    let time = ZonedDateTime::in_zone(2010, Month::June, 9, 15, 15, 0, 0, zone()).unwrap();
    let start = time.start_of_day();

    assert_eq!(start.hour(), 0);
    assert_eq!(start.day(), 9);
    assert_eq!(start.offset().hours(), 1);

    // midnight in the zone is 23:00 the previous day in UTC
    assert_eq!(start.to_instant(), local(2010, Month::June, 8, 23, 0).to_instant());
}

#[test]
fn the_spring_forward_day_is_23_hours_long() {
    // the zone springs forward at 01:00 UTC on 2010-03-28
    let time = ZonedDateTime::in_zone(2010, Month::March, 28, 15, 0, 0, 0, zone()).unwrap();

    let start = time.start_of_day();
    let end = time.end_of_day();

    assert_eq!(start.hour(), 0);
    assert_eq!(start.offset().hours(), 0);
    assert_eq!(end.hour(), 23);
    assert_eq!(end.offset().hours(), 1);

    assert_eq!(&end - &start, Duration::of_ms(82_799, 999));
}

#[test]
fn month_boundaries_in_a_zone() {
    let time = ZonedDateTime::in_zone(2010, Month::June, 9, 15, 15, 0, 0, zone()).unwrap();

    let start = time.start_of_month();
    assert_eq!(start.day(), 1);
    assert_eq!(start.month(), Month::June);
    assert_eq!(start.hour(), 0);
    assert_eq!(start.offset().hours(), 1);

    let end = time.end_of_month();
    assert_eq!(end.day(), 30);
    assert_eq!(end.hour(), 23);
    assert_eq!(end.millisecond(), 999);
}

#[test]
fn year_boundaries_span_both_offsets() {
    let time = ZonedDateTime::in_zone(2010, Month::June, 9, 15, 15, 0, 0, zone()).unwrap();

    let start = time.start_of_year();
    assert_eq!(start.month(), Month::January);
    assert_eq!(start.offset().hours(), 0);

    let end = time.end_of_year();
    assert_eq!(end.month(), Month::December);
    assert_eq!(end.offset().hours(), 0);
}

#[test]
fn arithmetic_across_a_transition_keeps_the_zone() {
    // 12:00 the day before the spring-forward transition
    let before = ZonedDateTime::in_zone(2010, Month::March, 27, 12, 0, 0, 0, zone()).unwrap();
    let after = before.add_days(1);

    // 24 absolute hours later, the wall clock reads 13:00
    assert_eq!(after.day(), 28);
    assert_eq!(after.hour(), 13);
    assert_eq!(after.offset().hours(), 1);
}
