//! Derived calendar periods: weeks, year-months, years, and arbitrary
//! ranges between two instants.
//!
//! Everything here is a thin composition over the boundary engine in
//! `cal::math` and the week numbering in `cal::iso`: a period remembers
//! which stretch of the calendar it is, plus the two boundary instants
//! that the engines computed for it.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Range, RangeFrom, RangeTo, RangeFull};
use std::slice::Iter as SliceIter;

use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Year, Error as DateTimeError};
use cal::iso::{self, IsoWeek};
use cal::offset::Offset;
use cal::zoned::ZonedDateTime;
use duration::Duration;

use cal::datetime::Month::*;


impl Year {

    /// Returns an iterator over a continuous span of months in this year,
    /// returning year-month pairs.
    ///
    /// This method takes one argument that can be of four different types,
    /// depending on the months you wish to iterate over:
    ///
    /// - The `RangeFull` type (such as `..`), which iterates over every
    ///   month;
    /// - The `RangeFrom` type (such as `April ..`), which iterates over
    ///   the months starting from the month given;
    /// - The `RangeTo` type (such as `.. June`), which iterates over the
    ///   months stopping at *but not including* the month given;
    /// - The `Range` type (such as `April .. June`), which iterates over
    ///   the months starting from the left one and stopping at *but not
    ///   including* the right one.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::Year;
    /// use caltime::Month::{April, June};
    ///
    /// let year = Year(1999);
    /// assert_eq!(year.months(..).count(), 12);
    /// assert_eq!(year.months(April ..).count(), 9);
    /// assert_eq!(year.months(April .. June).count(), 2);
    /// assert_eq!(year.months(.. June).count(), 5);
    /// ```
    pub fn months<S: MonthSpan>(self, span: S) -> YearMonths {
        YearMonths {
            year: self,
            iter: span.get_slice().iter(),
        }
    }

    /// Returns a year-month, pairing this year with the given month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::{Year, Month};
    ///
    /// let expiry_date = Year(2017).month(Month::February);
    /// assert_eq!(*expiry_date.year, 2017);
    /// assert_eq!(expiry_date.month, Month::February);
    /// ```
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth {
            year: self,
            month,
        }
    }

    /// The first tick of this year: midnight on the 1st of January.
    pub fn start(self) -> LocalDateTime {
        // The 1st of January exists in every year.
        let date = LocalDate::ymd(self.0, January, 1).unwrap();
        LocalDateTime::new(date, LocalTime::midnight())
    }

    /// The last tick of this year: the end of the 31st of December.
    pub fn end(self) -> LocalDateTime {
        // The 31st of December exists in every year.
        let date = LocalDate::ymd(self.0, December, 31).unwrap();
        LocalDateTime::new(date, LocalTime::last_of_day())
    }
}


/// A span of months, which gets used to construct a `YearMonths` iterator.
///
/// See the `months` method of `Year` for more information.
pub trait MonthSpan {

    /// Returns a static slice of `Month` values contained by this span.
    fn get_slice(&self) -> &'static [Month];
}

static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

impl MonthSpan for RangeFull {
    fn get_slice(&self) -> &'static [Month] {
        MONTHS
    }
}

impl MonthSpan for RangeFrom<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[self.start.months_from_january() ..]
    }
}

impl MonthSpan for RangeTo<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[.. self.end.months_from_january()]
    }
}

impl MonthSpan for Range<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[self.start.months_from_january() .. self.end.months_from_january()]
    }
}


/// An iterator over a continuous span of months in a year.
///
/// Use the `months` method on `Year` to create instances of this iterator.
pub struct YearMonths {
    year: Year,
    iter: SliceIter<'static, Month>,
}

impl Iterator for YearMonths {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        self.iter.next().map(|m| YearMonth {
            year: self.year,
            month: *m,
        })
    }
}

impl DoubleEndedIterator for YearMonths {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|m| YearMonth {
            year: self.year,
            month: *m,
        })
    }
}

impl fmt::Debug for YearMonths {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "YearMonths({}, {:?})", self.year.0, self.iter.as_slice())
    }
}


/// A month-year pair.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::Year;
    /// use caltime::Month::February;
    ///
    /// assert_eq!(Year(2000).month(February).day_count(), 29);
    /// assert_eq!(Year(1900).month(February).day_count(), 28);
    /// ```
    pub fn day_count(&self) -> i8 {
        self.month.days_in_month(self.year.is_leap_year())
    }

    /// Returns an iterator over a continuous span of days in this month,
    /// returning `LocalDate` values.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::Year;
    /// use caltime::Month::September;
    ///
    /// let ym = Year(1999).month(September);
    /// assert_eq!(ym.days(..).count(), 30);
    /// assert_eq!(ym.days(10 ..).count(), 21);
    /// assert_eq!(ym.days(10 .. 20).count(), 10);
    /// assert_eq!(ym.days(.. 20).count(), 19);
    /// ```
    pub fn days<S: DaySpan>(&self, span: S) -> MonthDays {
        MonthDays {
            ym: *self,
            range: span.get_range(self)
        }
    }

    /// Returns a `LocalDate` based on the day of this month.
    ///
    /// This is just a short-cut for the `LocalDate::ymd` constructor.
    pub fn day(&self, day: i8) -> Result<LocalDate, DateTimeError> {
        LocalDate::ymd(self.year.0, self.month, day)
    }

    /// The first tick of this month.
    pub fn start(&self) -> LocalDateTime {
        // Day 1 exists in every month.
        let date = LocalDate::ymd(self.year.0, self.month, 1).unwrap();
        LocalDateTime::new(date, LocalTime::midnight())
    }

    /// The last tick of this month.
    pub fn end(&self) -> LocalDateTime {
        // The day count of the month is a valid day of that month.
        let date = LocalDate::ymd(self.year.0, self.month, self.day_count()).unwrap();
        LocalDateTime::new(date, LocalTime::last_of_day())
    }

    /// The month before this one, stepping over year boundaries.
    pub fn previous(&self) -> YearMonth {
        match self.month {
            January => Year(self.year.0 - 1).month(December),
            other   => self.year.month(Month::from_zero(other.months_from_january() as i8 - 1).unwrap()),
        }
    }

    /// The month after this one, stepping over year boundaries.
    pub fn next(&self) -> YearMonth {
        match self.month {
            December => Year(self.year.0 + 1).month(January),
            other    => self.year.month(Month::from_zero(other.months_from_january() as i8 + 1).unwrap()),
        }
    }
}


/// A span of days, which gets used to construct a `MonthDays` iterator.
pub trait DaySpan {

    /// Returns a `Range` of the day numbers specified for the given year-month pair.
    fn get_range(&self, ym: &YearMonth) -> Range<i8>;
}

impl DaySpan for RangeFull {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        1 .. ym.day_count() + 1
    }
}

impl DaySpan for RangeFrom<i8> {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        self.start .. ym.day_count() + 1
    }
}

impl DaySpan for RangeTo<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        1 .. self.end
    }
}

impl DaySpan for Range<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        self.clone()
    }
}


/// An iterator over a continuous span of days in a month.
///
/// Use the `days` method on `YearMonth` to create instances of this iterator.
#[derive(PartialEq, Debug)]
pub struct MonthDays {
    ym: YearMonth,
    range: Range<i8>,
}

impl Iterator for MonthDays {
    type Item = LocalDate;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().and_then(|d| LocalDate::ymd(self.ym.year.0, self.ym.month, d).ok())
    }
}

impl DoubleEndedIterator for MonthDays {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().and_then(|d| LocalDate::ymd(self.ym.year.0, self.ym.month, d).ok())
    }
}


/// An ISO week together with its two boundary instants, both inclusive:
/// the first tick of its Monday and the last tick of its Sunday, read in
/// the zone of the instant the week was derived from.
#[derive(PartialEq, Debug, Clone)]
pub struct Week {
    iso: IsoWeek,
    start: ZonedDateTime,
    end: ZonedDateTime,
}

impl Week {

    /// The week with the given ISO year and week number, bounded in
    /// universal time.
    pub fn from_iso(year: i64, week: i64) -> Result<Week, DateTimeError> {
        let monday = iso::from_week_number(year, week)?;
        let start = ZonedDateTime::of(LocalDateTime::new(monday, LocalTime::midnight()), Offset::utc());
        Ok(Week::containing(&start))
    }

    /// The week the given instant falls in.
    pub fn containing(time: &ZonedDateTime) -> Week {
        let start = time.start_of_week();
        let end = time.end_of_week();

        Week {
            iso: iso::week_of(start.date()),
            start,
            end,
        }
    }

    /// The ISO week-year this week belongs to, which can differ from the
    /// calendar year of some of its days.
    pub fn year(&self) -> i64 {
        self.iso.year
    }

    /// The ISO week number, from 1 to 53.
    pub fn number(&self) -> i64 {
        self.iso.week
    }

    /// The first tick of this week’s Monday.
    pub fn start(&self) -> &ZonedDateTime {
        &self.start
    }

    /// The last tick of this week’s Sunday.
    pub fn end(&self) -> &ZonedDateTime {
        &self.end
    }

    /// Whether the given instant falls inside this week’s bounds.
    pub fn contains(&self, time: &ZonedDateTime) -> bool {
        *time >= self.start && *time <= self.end
    }

    /// The week before this one.
    pub fn previous(&self) -> Week {
        Week::containing(&self.start.add_days(-1))
    }

    /// The week after this one.
    pub fn next(&self) -> Week {
        Week::containing(&self.end.add_days(1))
    }
}


/// A stretch of the timeline between two instants, either of which may be
/// absent to leave that side open-ended.
///
/// This is the one period type whose bounds are caller-supplied rather
/// than computed, so construction checks them for order.
#[derive(PartialEq, Debug, Clone)]
pub struct Period {
    start: Option<ZonedDateTime>,
    end: Option<ZonedDateTime>,
}

impl Period {

    /// A period between the two given bounds, where `None` leaves that
    /// side open. Bounds out of order are an error.
    pub fn new(start: Option<ZonedDateTime>, end: Option<ZonedDateTime>) -> Result<Period, Error> {
        if let (&Some(ref s), &Some(ref e)) = (&start, &end) {
            if s > e {
                return Err(Error::Inverted);
            }
        }

        Ok(Period { start, end })
    }

    pub fn start(&self) -> Option<&ZonedDateTime> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&ZonedDateTime> {
        self.end.as_ref()
    }

    /// Whether the given instant falls inside this period. An open side
    /// admits everything beyond it.
    pub fn contains(&self, time: &ZonedDateTime) -> bool {
        self.start.as_ref().map_or(true, |s| time >= s)
            && self.end.as_ref().map_or(true, |e| time <= e)
    }

    /// The length of this period, if neither side is open.
    pub fn duration(&self) -> Option<Duration> {
        match (&self.start, &self.end) {
            (&Some(ref s), &Some(ref e)) => Some(e - s),
            _                            => None,
        }
    }
}


/// A calendar date known only down to some granularity: a year, a month
/// of a year, or a full date.
///
/// Which fields are present is part of the type, so “year only” is an
/// explicit state rather than a row of zeroed-out day and month fields.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum PartialDate {
    Year(i64),
    YearMonth(i64, Month),
    YearMonthDay(LocalDate),
}

impl PartialDate {

    /// The first tick of the span of time this partial date covers.
    pub fn start(&self) -> LocalDateTime {
        match *self {
            PartialDate::Year(y)            => Year(y).start(),
            PartialDate::YearMonth(y, m)    => Year(y).month(m).start(),
            PartialDate::YearMonthDay(d)    => LocalDateTime::new(d, LocalTime::midnight()),
        }
    }

    /// The last tick of the span of time this partial date covers.
    pub fn end(&self) -> LocalDateTime {
        match *self {
            PartialDate::Year(y)            => Year(y).end(),
            PartialDate::YearMonth(y, m)    => Year(y).month(m).end(),
            PartialDate::YearMonthDay(d)    => LocalDateTime::new(d, LocalTime::last_of_day()),
        }
    }
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// The period’s start is later than its end.
    Inverted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "period bounds out of order")
    }
}

impl ErrorTrait for Error {
}


#[cfg(test)]
mod test {
    use super::{Week, Period, PartialDate};
    use cal::datetime::{LocalDateTime, Month};
    use cal::zoned::ZonedDateTime;
    use cal::{DatePiece, TimePiece};

    #[test]
    fn a_week_knows_its_bounds() {
        // 2015-09-11 was a Friday in ISO week 37.
        let time = ZonedDateTime::at(1441976400);
        let week = Week::containing(&time);

        assert_eq!(week.year(), 2015);
        assert_eq!(week.number(), 37);
        assert_eq!(week.start().day(), 7);
        assert_eq!(week.end().day(), 13);
        assert_eq!(week.end().hour(), 23);
        assert!(week.contains(&time));
    }

    #[test]
    fn week_navigation() {
        let time = ZonedDateTime::at(1441976400);
        let week = Week::containing(&time);

        assert_eq!(week.previous().number(), 36);
        assert_eq!(week.next().number(), 38);
        assert!(!week.next().contains(&time));
    }

    #[test]
    fn periods_check_their_bounds() {
        let early = ZonedDateTime::at(1000);
        let late = ZonedDateTime::at(2000);

        assert!(Period::new(Some(late.clone()), Some(early.clone())).is_err());

        let period = Period::new(Some(early), None).unwrap();
        assert!(period.contains(&late));
        assert_eq!(period.duration(), None);
    }

    #[test]
    fn partial_dates_cover_their_spans() {
        let year = PartialDate::Year(2024);
        assert_eq!(year.start().month(), Month::January);
        assert_eq!(year.end().month(), Month::December);
        assert_eq!(year.end().day(), 31);

        let month = PartialDate::YearMonth(2024, Month::February);
        assert_eq!(month.end().day(), 29);

        let dt = LocalDateTime::at(0);
        let day = PartialDate::YearMonthDay(dt.date());
        assert_eq!(day.start().hour(), 0);
        assert_eq!(day.end().hour(), 23);
    }
}
