extern crate caltime;

use caltime::{Instant, LocalDateTime, ZonedDateTime, DatePiece, TimePiece, Month};


#[test]
fn the_epoch() {
    let date = LocalDateTime::at(0);
    assert_eq!(date.to_instant().seconds(), 0);

    assert_eq!(date.year(), 1970);
    assert_eq!(date.month(), Month::January);
    assert_eq!(date.day(), 1);
    assert_eq!(date.hour(), 0);
}

#[test]
fn a_day_later() {
    let date = LocalDateTime::at(86400);
    assert_eq!(date.to_instant().seconds(), 86400);
    assert_eq!(date.day(), 2);
}

#[test]
fn some_date() {
    let date = LocalDateTime::at(1234567890);
    assert_eq!(date.to_instant().seconds(), 1234567890);

    assert_eq!(date.year(), 2009);
    assert_eq!(date.month(), Month::February);
    assert_eq!(date.day(), 13);
    assert_eq!(date.hour(), 23);
    assert_eq!(date.minute(), 31);
    assert_eq!(date.second(), 30);
}

#[test]
fn before_the_epoch() {
    let date = LocalDateTime::at(-86400);
    assert_eq!(date.to_instant().seconds(), -86400);

    assert_eq!(date.year(), 1969);
    assert_eq!(date.month(), Month::December);
    assert_eq!(date.day(), 31);
}

#[test]
fn round_trips_either_way() {
    for seconds in [0_i64, 1, 86399, 86400, 1234567890, -1, -86400, 4102444800].iter() {
        let date = LocalDateTime::at(*seconds);
        assert_eq!(date.to_instant().seconds(), *seconds, "seconds {}", seconds);
    }
}

#[test]
fn milliseconds_survive() {
    let instant = Instant::at_ms(1234567890, 123);
    let date = LocalDateTime::from_instant(instant);

    assert_eq!(date.millisecond(), 123);
    assert_eq!(date.to_instant(), instant);
}

#[test]
fn zoned_values_from_instants() {
    let time = ZonedDateTime::from_instant(Instant::at(1234567890));
    assert_eq!(time.to_instant(), Instant::at(1234567890));
    assert_eq!(time.year(), 2009);
}
