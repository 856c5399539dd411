extern crate caltime;

use caltime::{LocalDate, LocalTime, LocalDateTime, ZonedDateTime, Month, Weekday, DatePiece, TimePiece};


#[test]
fn calendar_dates() {
    let date: LocalDate = "1985-04-12".parse().unwrap();
    assert_eq!(date, LocalDate::ymd(1985, Month::April, 12).unwrap());
}

#[test]
fn week_dates() {
    let date: LocalDate = "2015-W37-5".parse().unwrap();
    assert_eq!(date, LocalDate::ymd(2015, Month::September, 11).unwrap());
    assert_eq!(date.weekday(), Weekday::Friday);
}

#[test]
fn ordinal_dates() {
    let date: LocalDate = "2015-256".parse().unwrap();
    assert_eq!(date, LocalDate::ymd(2015, Month::September, 13).unwrap());
}

#[test]
fn times() {
    let time: LocalTime = "14:35:02".parse().unwrap();
    assert_eq!(time, LocalTime::hms(14, 35, 2).unwrap());
}

#[test]
fn datetimes() {
    let when: LocalDateTime = "2001-02-03T04:05:06".parse().unwrap();

    assert_eq!(when.year(), 2001);
    assert_eq!(when.month(), Month::February);
    assert_eq!(when.hour(), 4);
    assert_eq!(when.second(), 6);
}

#[test]
fn zoned_datetimes() {
    let when: ZonedDateTime = "2001-02-03T04:05:06+07:00".parse().unwrap();

    assert_eq!(when.hour(), 4);
    assert_eq!(when.offset().hours(), 7);

    // the wall clock reads 04:05 but the instant is 21:05 the day before
    let utc = when.to_universal_time();
    assert_eq!(utc.day(), 2);
    assert_eq!(utc.hour(), 21);
}

#[test]
fn empty_strings_fail() {
    assert!("".parse::<LocalDate>().is_err());
    assert!("".parse::<ZonedDateTime>().is_err());
}

#[test]
fn word_salad_fails() {
    assert!("just now".parse::<LocalDateTime>().is_err());
}

#[test]
fn out_of_range_fields_fail() {
    assert!("2001-13-32T99:99:99".parse::<LocalDateTime>().is_err());
}
