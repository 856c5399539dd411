//! Pure calendar calculations: period boundaries, quarters, leap years,
//! weekend tests, and ordinal suffixes.
//!
//! The functions over `LocalDateTime` here are zone-naive: they work on
//! the wall-clock fields as given. The `*_in` variants read the wall clock
//! in a named zone first, compute the boundary there, and resolve it back
//! through the zone’s transition table.

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year, split_cycles};
use cal::zone::TimeZone;
use cal::zoned::ZonedDateTime;
use duration::Duration;


/// The number of days in the given month of the given year.
pub fn days_in_month(year: i64, month: Month) -> i8 {
    month.days_in_month(Year(year).is_leap_year())
}

/// Whether the given year is a leap year, read off February’s day count.
pub fn is_leap_year(year: i64) -> bool {
    days_in_month(year, Month::February) == 29
}

/// The English ordinal suffix for a day of the month.
///
/// The elevenths, twelfths, and thirteenths take “th” like every other
/// teen, which falls out of the table by them not being 1, 2, or 3.
///
/// ### Examples
///
/// ```
/// use caltime::math::day_suffix;
///
/// assert_eq!(day_suffix(1), "st");
/// assert_eq!(day_suffix(11), "th");
/// assert_eq!(day_suffix(22), "nd");
/// ```
pub fn day_suffix(day: i8) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22      => "nd",
        3 | 23      => "rd",
        _           => "th",
    }
}

/// Moves a date by a number of calendar months, clamping the day to the
/// length of the month it lands in.
pub fn shift_months(date: LocalDate, months: i64) -> LocalDate {
    let total = date.year() * 12 + date.month().months_from_january() as i64 + months;
    let (year, month_index) = split_cycles(total, 12);

    // split_cycles keeps the month index within 0..12.
    let month = Month::from_zero(month_index as i8).unwrap();

    let limit = month.days_in_month(Year(year).is_leap_year());
    let day = if date.day() > limit { limit } else { date.day() };

    // The day was clamped into the month’s range just above.
    LocalDate::ymd(year, month, day).unwrap()
}


// --- zone-naive boundaries ---

/// The first tick of the given wall clock’s day.
pub fn start_of_day(time: LocalDateTime) -> LocalDateTime {
    LocalDateTime::new(time.date(), LocalTime::midnight())
}

/// The last tick of the given wall clock’s day.
pub fn end_of_day(time: LocalDateTime) -> LocalDateTime {
    LocalDateTime::new(time.date(), LocalTime::last_of_day())
}

/// The first tick of the week the given wall clock falls in, with the week
/// starting on `first_day`.
pub fn start_of_week(time: LocalDateTime, first_day: Weekday) -> LocalDateTime {
    let back = time.weekday().days_from(first_day);
    let date = (start_of_day(time) - Duration::of_days(back as i64)).date();
    LocalDateTime::new(date, LocalTime::midnight())
}

/// The last tick of the week the given wall clock falls in: six days after
/// the start, at the day’s final tick.
pub fn end_of_week(time: LocalDateTime, first_day: Weekday) -> LocalDateTime {
    let start = start_of_week(time, first_day);
    LocalDateTime::new((start + Duration::of_days(6)).date(), LocalTime::last_of_day())
}

/// The first tick of the given wall clock’s month.
pub fn start_of_month(time: LocalDateTime) -> LocalDateTime {
    LocalDateTime::new(time.date().first_of_month(), LocalTime::midnight())
}

/// The last tick of the given wall clock’s month.
pub fn end_of_month(time: LocalDateTime) -> LocalDateTime {
    LocalDateTime::new(time.date().last_of_month(), LocalTime::last_of_day())
}

/// The first tick of the given wall clock’s quarter: the first day of
/// January, April, July, or October.
pub fn start_of_quarter(time: LocalDateTime) -> LocalDateTime {
    let quarter = time.month().quarter();

    // 3q−2 is always the number of a month.
    let month = Month::from_one(3 * quarter - 2).unwrap();
    let date = LocalDate::ymd(time.year(), month, 1).unwrap();

    LocalDateTime::new(date, LocalTime::midnight())
}

/// The last tick of the given wall clock’s quarter: the end of March,
/// June, September, or December.
pub fn end_of_quarter(time: LocalDateTime) -> LocalDateTime {
    let quarter = time.month().quarter();

    // 3q is always the number of a month.
    let month = Month::from_one(3 * quarter).unwrap();
    let date = LocalDate::ymd(time.year(), month, 1).unwrap();

    LocalDateTime::new(date.last_of_month(), LocalTime::last_of_day())
}

/// The first tick of the given wall clock’s year.
pub fn start_of_year(time: LocalDateTime) -> LocalDateTime {
    // The 1st of January exists in every year.
    let date = LocalDate::ymd(time.year(), Month::January, 1).unwrap();
    LocalDateTime::new(date, LocalTime::midnight())
}

/// The last tick of the given wall clock’s year.
pub fn end_of_year(time: LocalDateTime) -> LocalDateTime {
    // The 31st of December exists in every year.
    let date = LocalDate::ymd(time.year(), Month::December, 31).unwrap();
    LocalDateTime::new(date, LocalTime::last_of_day())
}


// --- zone-aware boundaries ---
//
// Each of these reads the instant’s wall clock in the target zone, takes
// the zone-naive boundary of those fields, and resolves that wall clock
// back to an instant through the zone. A boundary that lands next to a
// daylight-saving transition can come out an hour off, which the
// hour-based nudge below pushes back onto the expected side of midnight.

/// The first tick of the day the given instant falls in, read in `zone`.
pub fn start_of_day_in(time: &ZonedDateTime, zone: &TimeZone) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_start(start_of_day(wall), zone)
}

/// The last tick of the day the given instant falls in, read in `zone`.
pub fn end_of_day_in(time: &ZonedDateTime, zone: &TimeZone) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_end(end_of_day(wall), zone)
}

/// The first tick of the week the given instant falls in, read in `zone`.
pub fn start_of_week_in(time: &ZonedDateTime, zone: &TimeZone, first_day: Weekday) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_start(start_of_week(wall, first_day), zone)
}

/// The last tick of the week the given instant falls in, read in `zone`.
pub fn end_of_week_in(time: &ZonedDateTime, zone: &TimeZone, first_day: Weekday) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_end(end_of_week(wall, first_day), zone)
}

/// The first tick of the month the given instant falls in, read in `zone`.
pub fn start_of_month_in(time: &ZonedDateTime, zone: &TimeZone) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_start(start_of_month(wall), zone)
}

/// The last tick of the month the given instant falls in, read in `zone`.
pub fn end_of_month_in(time: &ZonedDateTime, zone: &TimeZone) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_end(end_of_month(wall), zone)
}

/// The first tick of the quarter the given instant falls in, read in `zone`.
pub fn start_of_quarter_in(time: &ZonedDateTime, zone: &TimeZone) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_start(start_of_quarter(wall), zone)
}

/// The last tick of the quarter the given instant falls in, read in `zone`.
pub fn end_of_quarter_in(time: &ZonedDateTime, zone: &TimeZone) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_end(end_of_quarter(wall), zone)
}

/// The first tick of the year the given instant falls in, read in `zone`.
pub fn start_of_year_in(time: &ZonedDateTime, zone: &TimeZone) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_start(start_of_year(wall), zone)
}

/// The last tick of the year the given instant falls in, read in `zone`.
pub fn end_of_year_in(time: &ZonedDateTime, zone: &TimeZone) -> ZonedDateTime {
    let wall = zone.to_zoned(time.to_utc_datetime());
    resolve_end(end_of_year(wall), zone)
}

fn resolve_start(boundary: LocalDateTime, zone: &TimeZone) -> ZonedDateTime {
    let utc = zone.resolve_local(boundary);
    nudge_start(ZonedDateTime::from_utc(utc, zone.clone()))
}

fn resolve_end(boundary: LocalDateTime, zone: &TimeZone) -> ZonedDateTime {
    let utc = zone.resolve_local(boundary);
    nudge_end(ZonedDateTime::from_utc(utc, zone.clone()))
}

// The nudges key off the displayed hour alone rather than the zone’s
// actual transition instants. A start boundary is expected at hour 0: an
// hour of 23 or 1 means a transition at midnight pushed it a shift-width
// off. End boundaries are expected at hour 23, with 22 and 0 as the
// off-by-a-shift hours.

fn nudge_start(time: ZonedDateTime) -> ZonedDateTime {
    match time.hour() {
        23 => time.shift_wall(Duration::of_hours(1)),
        1  => time.shift_wall(Duration::zero() - Duration::of_hours(1)),
        _  => time,
    }
}

fn nudge_end(time: ZonedDateTime) -> ZonedDateTime {
    match time.hour() {
        22 => time.shift_wall(Duration::of_hours(1)),
        0  => time.shift_wall(Duration::zero() - Duration::of_hours(1)),
        _  => time,
    }
}
