//! Date-times anchored to a UTC offset, or to a named time zone.

use std::cmp::Ordering;
use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Sub};

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Error as DateTimeError};
use cal::iso::{self, IsoWeek};
use cal::math;
use cal::offset::{Offset, Error as OffsetError};
use cal::rfc2822;
use cal::zone::TimeZone;
use duration::Duration;
use instant::Instant;
use system;


/// How a `ZonedDateTime` relates its wall clock to UTC.
///
/// A bare offset is a different state from a named zone: the former is all
/// there is to know, while the latter carries a transition table that makes
/// the offset vary over the timeline. Keeping the two apart as variants
/// means “offset-only” values are an explicit, testable state instead of a
/// null check.
#[derive(Debug, Clone)]
pub enum ZoneRule {

    /// A fixed offset from UTC, with no daylight-saving behaviour.
    Fixed(Offset),

    /// A named time zone whose offset at any instant comes out of its
    /// transition table.
    Named(TimeZone),
}


/// A **zoned date-time** is an exact instant on the timeline, paired with
/// the UTC offset it is displayed at, and the rule that offset came from.
///
/// The wall-clock fields (`year()`, `hour()`, and the rest) read in the
/// represented zone; the value compares by the absolute instant only, so
/// two values at the same instant are equal no matter which zone each one
/// is displayed in.
#[derive(Clone)]
pub struct ZonedDateTime {
    local: LocalDateTime,
    offset: Offset,
    rule: ZoneRule,
}

impl ZonedDateTime {

    /// Creates a new zoned date-time at the given number of seconds since
    /// the Unix epoch, in UTC.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_ms(seconds_since_1970_epoch, 0)
    }

    /// Creates a new zoned date-time at the given number of seconds and
    /// milliseconds since the Unix epoch, in UTC.
    pub fn at_ms(seconds_since_1970_epoch: i64, millisecond_of_second: i16) -> Self {
        Self::of(LocalDateTime::at_ms(seconds_since_1970_epoch, millisecond_of_second), Offset::utc())
    }

    /// Creates a new zoned date-time from an instant, in UTC.
    pub fn from_instant(instant: Instant) -> Self {
        Self::of(LocalDateTime::from_instant(instant), Offset::utc())
    }

    /// Creates a new zoned date-time set to the current time, in UTC.
    pub fn now() -> Self {
        Self::of(LocalDateTime::now(), Offset::utc())
    }

    /// Pairs a wall-clock time with the fixed offset it is displayed at.
    pub fn of(local: LocalDateTime, offset: Offset) -> Self {
        Self { local, offset, rule: ZoneRule::Fixed(offset) }
    }

    /// Creates a new zoned date-time from calendar fields displayed at the
    /// given fixed offset.
    pub fn from_fields(year: i64, month: Month, day: i8,
                       hour: i8, minute: i8, second: i8, millisecond: i16,
                       offset: Offset) -> Result<Self, Error> {
        let date = LocalDate::ymd(year, month, day).map_err(Error::Date)?;
        let time = LocalTime::hms_ms(hour, minute, second, millisecond).map_err(Error::Date)?;
        Ok(Self::of(LocalDateTime::new(date, time), offset))
    }

    /// Creates a new zoned date-time from calendar fields read as a wall
    /// clock in the given named zone, resolving any daylight-saving shift
    /// in effect at that wall-clock time.
    pub fn in_zone(year: i64, month: Month, day: i8,
                   hour: i8, minute: i8, second: i8, millisecond: i16,
                   zone: TimeZone) -> Result<Self, Error> {
        let date = LocalDate::ymd(year, month, day).map_err(Error::Date)?;
        let time = LocalTime::hms_ms(hour, minute, second, millisecond).map_err(Error::Date)?;

        let utc = zone.resolve_local(LocalDateTime::new(date, time));
        Ok(Self::from_utc(utc, zone))
    }

    /// Displays a UTC instant in the given named zone, deriving the offset
    /// from the zone’s transition table.
    pub fn from_utc(utc: LocalDateTime, zone: TimeZone) -> Self {
        let seconds = zone.offset(utc);
        Self {
            local: utc + Duration::of(seconds),
            offset: Offset::of_seconds_unchecked(seconds as i32),
            rule: ZoneRule::Named(zone),
        }
    }

    /// Assembles a zoned date-time from an already-resolved wall clock and
    /// offset, as produced by `TimeZone::convert_local`.
    pub(crate) fn from_parts(local: LocalDateTime, offset_seconds: i64, zone: TimeZone) -> Self {
        Self {
            local,
            offset: Offset::of_seconds_unchecked(offset_seconds as i32),
            rule: ZoneRule::Named(zone),
        }
    }

    /// Shifts the wall clock without re-deriving the offset. This is the
    /// daylight-saving boundary correction: the resolved offset is kept and
    /// the displayed hour moves by the correction amount.
    pub(crate) fn shift_wall(&self, forwards: Duration) -> Self {
        Self {
            local: self.local + forwards,
            offset: self.offset,
            rule: self.rule.clone(),
        }
    }

    /// The wall-clock fields of this value, in its own zone.
    pub fn local(&self) -> LocalDateTime {
        self.local
    }

    /// The date portion of the wall clock.
    pub fn date(&self) -> LocalDate {
        self.local.date()
    }

    /// The time portion of the wall clock.
    pub fn time(&self) -> LocalTime {
        self.local.time()
    }

    /// The offset from UTC this value is displayed at.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The rule the offset came from.
    pub fn rule(&self) -> &ZoneRule {
        &self.rule
    }

    /// The name of the zone this value is displayed in, for named zones.
    pub fn zone_name(&self) -> Option<&str> {
        match self.rule {
            ZoneRule::Fixed(_)        => None,
            ZoneRule::Named(ref zone) => zone.zone_name(),
        }
    }

    /// The wall clock this instant shows in UTC.
    pub fn to_utc_datetime(&self) -> LocalDateTime {
        self.local - Duration::of(self.offset.total_seconds())
    }

    /// The absolute instant, irrespective of zone.
    pub fn to_instant(&self) -> Instant {
        self.to_utc_datetime().to_instant()
    }

    /// This instant displayed at another fixed offset.
    pub fn to_offset(&self, offset: Offset) -> Self {
        Self::of(self.to_utc_datetime() + Duration::of(offset.total_seconds()), offset)
    }

    /// This instant displayed in universal time.
    pub fn to_universal_time(&self) -> Self {
        self.to_offset(Offset::utc())
    }

    /// This instant displayed in the given named zone.
    pub fn to_zone(&self, zone: &TimeZone) -> Self {
        Self::from_utc(self.to_utc_datetime(), zone.clone())
    }

    /// This instant displayed at the offset the system’s local time zone
    /// has right at this instant. The platform hands back an offset rather
    /// than a rule table, so the result carries a fixed rule.
    pub fn to_system_local(&self) -> Self {
        let seconds = system::sys_utc_offset(self.to_instant().seconds());
        self.to_offset(Offset::of_seconds_unchecked(seconds))
    }


    // --- timeline arithmetic ---

    /// This instant moved by the given duration, re-reading the offset from
    /// the rule afterwards so named zones stay consistent across
    /// transitions.
    pub fn add_duration(&self, duration: Duration) -> Self {
        self.rebase(self.to_utc_datetime() + duration)
    }

    pub fn add_milliseconds(&self, milliseconds: i64) -> Self {
        let seconds = milliseconds.div_euclid(1000);
        let leftover = milliseconds.rem_euclid(1000) as i16;
        self.add_duration(Duration::of_ms(seconds, leftover))
    }

    /// Identical to `add_milliseconds`: a tick is this library’s smallest
    /// unit of time, one millisecond.
    pub fn add_ticks(&self, ticks: i64) -> Self {
        self.add_milliseconds(ticks)
    }

    pub fn add_seconds(&self, seconds: i64) -> Self {
        self.add_duration(Duration::of(seconds))
    }

    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.add_duration(Duration::of_minutes(minutes))
    }

    pub fn add_hours(&self, hours: i64) -> Self {
        self.add_duration(Duration::of_hours(hours))
    }

    pub fn add_days(&self, days: i64) -> Self {
        self.add_duration(Duration::of_days(days))
    }

    /// Re-derives the wall clock and offset for a new UTC instant under
    /// this value’s rule.
    fn rebase(&self, utc: LocalDateTime) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(utc + Duration::of(offset.total_seconds()), offset),
            ZoneRule::Named(ref zone) => Self::from_utc(utc, zone.clone()),
        }
    }


    // --- calendar arithmetic ---

    /// This wall clock moved by the given number of calendar months, with
    /// the day clamped to the length of the month it lands in, then
    /// re-resolved under this value’s rule.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::{ZonedDateTime, Month, Offset, DatePiece};
    ///
    /// let end_of_jan = ZonedDateTime::from_fields(2024, Month::January, 31, 12, 0, 0, 0, Offset::utc()).unwrap();
    /// let shifted = end_of_jan.add_months(1);
    /// assert_eq!(shifted.month(), Month::February);
    /// assert_eq!(shifted.day(), 29);
    /// ```
    pub fn add_months(&self, months: i64) -> Self {
        let date = math::shift_months(self.date(), months);
        self.resolve_wall(LocalDateTime::new(date, self.time()))
    }

    /// This wall clock moved by the given number of calendar years, with
    /// the 29th of February clamped to the 28th in non-leap years.
    pub fn add_years(&self, years: i64) -> Self {
        self.add_months(years * 12)
    }

    /// Re-interprets a new wall clock under this value’s rule.
    fn resolve_wall(&self, wall: LocalDateTime) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(wall, offset),
            ZoneRule::Named(ref zone) => Self::from_utc(zone.resolve_local(wall), zone.clone()),
        }
    }


    // --- calendar queries ---

    /// The ISO-8601 week this date falls in. The week-year can differ from
    /// the calendar year for dates close to a year boundary.
    pub fn week_number(&self) -> IsoWeek {
        iso::week_of(self.date())
    }

    /// The number of days in this wall clock’s month.
    pub fn days_in_month(&self) -> i8 {
        math::days_in_month(self.year(), self.month())
    }

    /// Whether this wall clock’s year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        math::is_leap_year(self.year())
    }

    /// Whether this date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    /// Whether this date falls on a working day.
    pub fn is_weekday(&self) -> bool {
        self.weekday().is_weekday()
    }

    /// The English ordinal suffix for this day of the month: “st”, “nd”,
    /// “rd”, or “th”.
    pub fn day_suffix(&self) -> &'static str {
        math::day_suffix(self.day())
    }


    // --- period boundaries ---

    /// The first tick of this wall clock’s day.
    pub fn start_of_day(&self) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::start_of_day(self.local), offset),
            ZoneRule::Named(ref zone) => math::start_of_day_in(self, zone),
        }
    }

    /// The last tick of this wall clock’s day.
    pub fn end_of_day(&self) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::end_of_day(self.local), offset),
            ZoneRule::Named(ref zone) => math::end_of_day_in(self, zone),
        }
    }

    /// The first tick of this wall clock’s week, with Monday taken as the
    /// first day of the week.
    pub fn start_of_week(&self) -> Self {
        self.start_of_week_from(Weekday::Monday)
    }

    /// The first tick of this wall clock’s week, with the week starting on
    /// the given day.
    pub fn start_of_week_from(&self, first_day: Weekday) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::start_of_week(self.local, first_day), offset),
            ZoneRule::Named(ref zone) => math::start_of_week_in(self, zone, first_day),
        }
    }

    /// The last tick of this wall clock’s week, with Monday taken as the
    /// first day of the week.
    pub fn end_of_week(&self) -> Self {
        self.end_of_week_from(Weekday::Monday)
    }

    /// The last tick of this wall clock’s week, with the week starting on
    /// the given day.
    pub fn end_of_week_from(&self, first_day: Weekday) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::end_of_week(self.local, first_day), offset),
            ZoneRule::Named(ref zone) => math::end_of_week_in(self, zone, first_day),
        }
    }

    /// The first tick of this wall clock’s month.
    pub fn start_of_month(&self) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::start_of_month(self.local), offset),
            ZoneRule::Named(ref zone) => math::start_of_month_in(self, zone),
        }
    }

    /// The last tick of this wall clock’s month.
    pub fn end_of_month(&self) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::end_of_month(self.local), offset),
            ZoneRule::Named(ref zone) => math::end_of_month_in(self, zone),
        }
    }

    /// The first tick of this wall clock’s quarter.
    pub fn start_of_quarter(&self) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::start_of_quarter(self.local), offset),
            ZoneRule::Named(ref zone) => math::start_of_quarter_in(self, zone),
        }
    }

    /// The last tick of this wall clock’s quarter.
    pub fn end_of_quarter(&self) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::end_of_quarter(self.local), offset),
            ZoneRule::Named(ref zone) => math::end_of_quarter_in(self, zone),
        }
    }

    /// The first tick of this wall clock’s year.
    pub fn start_of_year(&self) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::start_of_year(self.local), offset),
            ZoneRule::Named(ref zone) => math::start_of_year_in(self, zone),
        }
    }

    /// The last tick of this wall clock’s year.
    pub fn end_of_year(&self) -> Self {
        match self.rule {
            ZoneRule::Fixed(offset)   => Self::of(math::end_of_year(self.local), offset),
            ZoneRule::Named(ref zone) => math::end_of_year_in(self, zone),
        }
    }


    // --- conversions to text ---

    /// This value in the extended ISO-8601 profile,
    /// `2001-02-03T04:05:06.000+07:00`.
    pub fn to_iso8601(&self) -> String {
        self.to_string()
    }

    /// This value in the RFC 2822 date syntax,
    /// `Sat, 03 Feb 2001 04:05:06 +0700`.
    pub fn to_rfc2822(&self) -> String {
        rfc2822::format(self)
    }

    /// This value in the RFC 822 date syntax, which this library writes
    /// identically to RFC 2822.
    pub fn to_rfc822(&self) -> String {
        rfc2822::format(self)
    }

    /// Parses an RFC 2822 date-time string.
    pub fn parse_rfc2822(input: &str) -> Result<Self, rfc2822::Error> {
        rfc2822::parse(input)
    }

    /// Parses an RFC 822 date-time string; the 822 grammar this library
    /// accepts is the same relaxed grammar as for RFC 2822.
    pub fn parse_rfc822(input: &str) -> Result<Self, rfc2822::Error> {
        rfc2822::parse(input)
    }


    // --- aggregates ---

    /// The earliest of the given times. An empty slice is an error.
    pub fn earliest(times: &[ZonedDateTime]) -> Result<ZonedDateTime, Error> {
        match times.iter().min() {
            Some(t) => Ok(t.clone()),
            None    => Err(Error::EmptySet),
        }
    }

    /// The latest of the given times. An empty slice is an error.
    pub fn latest(times: &[ZonedDateTime]) -> Result<ZonedDateTime, Error> {
        match times.iter().max() {
            Some(t) => Ok(t.clone()),
            None    => Err(Error::EmptySet),
        }
    }
}

impl DatePiece for ZonedDateTime {
    fn year(&self) -> i64 { self.local.year() }
    fn month(&self) -> Month { self.local.month() }
    fn day(&self) -> i8 { self.local.day() }
    fn yearday(&self) -> i16 { self.local.yearday() }
    fn weekday(&self) -> Weekday { self.local.weekday() }
}

impl TimePiece for ZonedDateTime {
    fn hour(&self) -> i8 { self.local.hour() }
    fn minute(&self) -> i8 { self.local.minute() }
    fn second(&self) -> i8 { self.local.second() }
    fn millisecond(&self) -> i16 { self.local.millisecond() }
}


// There is exactly one ordering contract: the absolute instant. Every
// relational operator and the equality test derive from this single `cmp`,
// so values never compare differently through different interfaces.

impl Ord for ZonedDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_utc_datetime().cmp(&other.to_utc_datetime())
    }
}

impl PartialOrd for ZonedDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ZonedDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ZonedDateTime {
}

impl Add<Duration> for ZonedDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        self.add_duration(duration)
    }
}

impl Sub<Duration> for ZonedDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self.add_duration(Duration::zero() - duration)
    }
}

impl<'a> Sub<&'a ZonedDateTime> for &'a ZonedDateTime {
    type Output = Duration;

    /// The length of time between two instants. The result is negative
    /// when the right-hand side is the later one.
    fn sub(self, rhs: &'a ZonedDateTime) -> Duration {
        let (a, b) = (self.to_instant(), rhs.to_instant());
        let mut seconds = a.seconds() - b.seconds();
        let mut milliseconds = a.milliseconds() - b.milliseconds();

        if milliseconds < 0 {
            milliseconds += 1000;
            seconds -= 1;
        }

        Duration::of_ms(seconds, milliseconds)
    }
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    Date(DateTimeError),
    Offset(OffsetError),
    EmptySet,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Date(_)    => write!(f, "datetime field out of range"),
            Error::Offset(_)  => write!(f, "offset out of range"),
            Error::EmptySet   => write!(f, "no times to aggregate over"),
        }
    }
}

impl ErrorTrait for Error {
    fn cause(&self) -> Option<&dyn ErrorTrait> {
        match *self {
            Error::Date(ref e)    => Some(e),
            Error::Offset(ref e)  => Some(e),
            Error::EmptySet       => None,
        }
    }
}
