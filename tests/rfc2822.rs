extern crate caltime;

use caltime::{ZonedDateTime, Month, Offset, TimePiece, DatePiece};
use caltime::rfc2822;


fn fixed(hour: i8, offset: Offset) -> ZonedDateTime {
    ZonedDateTime::from_fields(2024, Month::January, 1, hour, 0, 0, 0, offset).unwrap()
}


#[test]
fn canonical_form() {
    assert_eq!(fixed(0, Offset::utc()).to_rfc2822(), "Mon, 01 Jan 2024 00:00:00 +0000");
}

#[test]
fn rfc_822_writes_the_same_text() {
    let time = fixed(9, Offset::of_hours_and_minutes(1, 0).unwrap());
    assert_eq!(time.to_rfc822(), time.to_rfc2822());
    assert_eq!(time.to_rfc822(), "Mon, 01 Jan 2024 09:00:00 +0100");
}

#[test]
fn round_trip_at_a_zero_offset() {
    let time = fixed(0, Offset::utc());
    assert_eq!(ZonedDateTime::parse_rfc822(&time.to_rfc822()).unwrap(), time);
}

#[test]
fn round_trip_keeps_the_offset() {
    let offset = Offset::of_hours_and_minutes(-8, 0).unwrap();
    let time = fixed(18, offset);
    let back = ZonedDateTime::parse_rfc2822(&time.to_rfc2822()).unwrap();

    assert_eq!(back, time);
    assert_eq!(back.offset(), offset);
    assert_eq!(back.hour(), 18);
}

#[test]
fn gmt_matches_the_numeric_zero() {
    assert_eq!(
        rfc2822::parse("Mon, 01 Jan 2024 00:00:00 GMT").unwrap(),
        rfc2822::parse("Mon, 01 Jan 2024 00:00:00 +0000").unwrap());
}

#[test]
fn est_matches_minus_five() {
    let named = rfc2822::parse("Mon, 01 Jan 2024 00:00:00 EST").unwrap();
    let numeric = rfc2822::parse("Mon, 01 Jan 2024 00:00:00 -0500").unwrap();

    assert_eq!(named, numeric);
    assert_eq!(named.offset().hours(), -5);
}

#[test]
fn military_zones() {
    // A through M (skipping J) go west, N through Y go east
    let west = rfc2822::parse("Mon, 01 Jan 2024 00:00:00 C").unwrap();
    assert_eq!(west.offset().hours(), -3);

    let east = rfc2822::parse("Mon, 01 Jan 2024 00:00:00 R").unwrap();
    assert_eq!(east.offset().hours(), 5);
}

#[test]
fn parsed_zones_shift_the_instant() {
    let utc = rfc2822::parse("Mon, 01 Jan 2024 05:00:00 GMT").unwrap();
    let eastern = rfc2822::parse("Mon, 01 Jan 2024 00:00:00 EST").unwrap();

    // 00:00 in EST is 05:00 in UTC
    assert_eq!(utc, eastern);
}

#[test]
fn garbage_is_rejected() {
    assert!(rfc2822::parse("yesterday at noon").is_err());
    assert!(rfc2822::parse("").is_err());
    assert!(rfc2822::parse("\t \n").is_err());
}

#[test]
fn unknown_zone_names_are_rejected() {
    assert!(rfc2822::parse("Mon, 01 Jan 2024 00:00:00 XYZ").is_err());
    assert!(rfc2822::parse("Mon, 01 Jan 2024 00:00:00 J").is_err());
}

#[test]
fn the_day_number_may_be_short() {
    assert_eq!(
        rfc2822::parse("Mon, 1 Jan 2024 00:00:00 +0000").unwrap(),
        fixed(0, Offset::utc()));
}

#[test]
fn leap_day_formats_and_parses() {
    let leap = ZonedDateTime::from_fields(2024, Month::February, 29, 12, 0, 0, 0, Offset::utc()).unwrap();
    let text = leap.to_rfc2822();

    assert_eq!(text, "Thu, 29 Feb 2024 12:00:00 +0000");
    assert_eq!(rfc2822::parse(&text).unwrap().day(), 29);
}
