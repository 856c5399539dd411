//! ISO-8601 week numbering.
//!
//! ISO weeks run Monday to Sunday, and week 1 of a year is the week
//! containing that year’s first Thursday. A date near a year boundary can
//! therefore belong to a different *week-year* than its calendar year: the
//! last days of December sometimes land in week 1 of the next year, and
//! the first days of January in week 52 or 53 of the previous one.

use cal::DatePiece;
use cal::datetime::{LocalDate, LocalDateTime, LocalTime, Weekday, Error};
use duration::Duration;


/// An ISO-8601 week: a week number from 1 to 53, and the week-year it
/// belongs to.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct IsoWeek {

    /// The ISO week-year, which is not always the calendar year of the
    /// dates in the week.
    pub year: i64,

    /// The week number, from 1 to 53.
    pub week: i64,
}

/// The ISO week the given date falls in.
///
/// The date is first shifted to the Thursday of its Monday-first week;
/// that Thursday’s year and position then decide both numbers. Going
/// through the Thursday is what pushes late-December dates into week 1 of
/// the next year and early-January dates back into the previous year.
///
/// ### Examples
///
/// ```
/// use caltime::{LocalDate, Month};
/// use caltime::iso::{week_of, IsoWeek};
///
/// let new_year = LocalDate::ymd(2023, Month::January, 1).unwrap();
/// assert_eq!(week_of(new_year), IsoWeek { year: 2022, week: 52 });
/// ```
pub fn week_of(date: LocalDate) -> IsoWeek {
    let iso_day = date.weekday().days_from_monday_as_one() as i64;

    let midnight = LocalDateTime::new(date, LocalTime::midnight());
    let thursday = shift_days(midnight, 4 - iso_day).date();

    IsoWeek {
        year: thursday.year(),
        week: (thursday.yearday() as i64 - 1) / 7 + 1,
    }
}

/// The Monday a given ISO week starts on.
///
/// Weeks out of the 1 to 53 range are rejected; week 53 of a 52-week year
/// resolves into the next week-year rather than being rejected, the same
/// way any other overflowing calendar field would.
pub fn from_week_number(year: i64, week: i64) -> Result<LocalDate, Error> {
    from_week(year, week, Weekday::Monday)
}

/// The date of the given weekday inside an ISO week.
pub fn from_week(year: i64, week: i64, weekday: Weekday) -> Result<LocalDate, Error> {
    if week < 1 || week > 53 {
        return Err(Error::OutOfRange);
    }

    LocalDate::ywd(year, week, weekday)
}

fn shift_days(time: LocalDateTime, days: i64) -> LocalDateTime {
    if days < 0 {
        time - Duration::of_days(-days)
    }
    else {
        time + Duration::of_days(days)
    }
}


#[cfg(test)]
mod test {
    use super::{week_of, from_week_number, IsoWeek};
    use cal::datetime::{LocalDate, Month};

    #[test]
    fn thursday_anchoring() {
        // 2020 had 53 ISO weeks; the first of January 2021 still belongs
        // to the old year.
        let date = LocalDate::ymd(2021, Month::January, 1).unwrap();
        assert_eq!(week_of(date), IsoWeek { year: 2020, week: 53 });

        // while the end of December 2019 already belongs to 2020.
        let date = LocalDate::ymd(2019, Month::December, 31).unwrap();
        assert_eq!(week_of(date), IsoWeek { year: 2020, week: 1 });
    }

    #[test]
    fn mid_year_weeks() {
        let date = LocalDate::ymd(2015, Month::September, 11).unwrap();
        assert_eq!(week_of(date), IsoWeek { year: 2015, week: 37 });
    }

    #[test]
    fn back_to_dates() {
        let monday = from_week_number(2015, 37).unwrap();
        assert_eq!(monday, LocalDate::ymd(2015, Month::September, 7).unwrap());

        assert!(from_week_number(2015, 0).is_err());
        assert!(from_week_number(2015, 54).is_err());
    }
}
