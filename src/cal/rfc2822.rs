//! RFC 2822 date-time formatting and parsing, covering the RFC 822
//! grammar it grew out of.
//!
//! Formatting always writes the canonical shape,
//! `Sat, 03 Feb 2001 04:05:06 +0700`, with English names and a numeric
//! offset without a colon. Parsing is more forgiving: the day of the month
//! may be one digit, the numeric offset may carry a colon, and the zone
//! may be one of the alphabetic designators from RFC 822 §5 — the named
//! North American abbreviations, or the single-letter military zones —
//! which general-purpose date parsers don’t recognise.

use std::error::Error as ErrorTrait;
use std::fmt;

use regex::Regex;

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Error as DateTimeError};
use cal::offset::{Offset, Error as OffsetError};
use cal::zoned::ZonedDateTime;


static SHORT_DAYS: &[&str; 7] =
    &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

static SHORT_MONTHS: &[&str; 12] =
    &["Jan", "Feb", "Mar", "Apr", "May", "Jun",
      "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];


/// Formats a zoned date-time in the RFC 2822 date syntax.
///
/// ### Examples
///
/// ```
/// use caltime::{ZonedDateTime, Month, Offset};
/// use caltime::rfc2822;
///
/// let time = ZonedDateTime::from_fields(2024, Month::January, 1, 0, 0, 0, 0, Offset::utc()).unwrap();
/// assert_eq!(rfc2822::format(&time), "Mon, 01 Jan 2024 00:00:00 +0000");
/// ```
pub fn format(time: &ZonedDateTime) -> String {
    let offset = time.offset();
    let sign = if offset.is_negative() { '-' } else { '+' };

    format!("{}, {:02} {} {:04} {:02}:{:02}:{:02} {}{:02}{:02}",
        SHORT_DAYS[time.weekday() as usize],
        time.day(),
        SHORT_MONTHS[time.month().months_from_january()],
        time.year(),
        time.hour(), time.minute(), time.second(),
        sign,
        offset.hours().abs(),
        offset.minutes().abs())
}

lazy_static! {
    static ref GRAMMAR: Regex = Regex::new(
        r"^\s*(?P<day>[A-Za-z]{3}),\s+(?P<date>\d{1,2})\s+(?P<month>[A-Za-z]{3})\s+(?P<year>\d{4})\s+(?P<hour>\d{2}):(?P<minute>\d{2}):(?P<second>\d{2})\s+(?P<zone>[A-Za-z]{1,3}|[+-]\d{2}:?\d{2})\s*$"
    ).unwrap();
}

/// Parses an RFC 822 or RFC 2822 date-time string.
///
/// Blank input is rejected up front as `Error::EmptyInput`; input that
/// doesn’t fit the grammar at all is `Error::MismatchedFormat`; input that
/// fits the grammar but names an invalid date surfaces the underlying
/// range error.
pub fn parse(input: &str) -> Result<ZonedDateTime, Error> {
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let fields = match GRAMMAR.captures(input) {
        Some(fields) => fields,
        None         => return Err(Error::MismatchedFormat),
    };

    // The sub-patterns only match digit runs that fit these types.
    let day: i8 = fields["date"].parse().unwrap();
    let year: i64 = fields["year"].parse().unwrap();
    let hour: i8 = fields["hour"].parse().unwrap();
    let minute: i8 = fields["minute"].parse().unwrap();
    let second: i8 = fields["second"].parse().unwrap();

    let month = month_from_name(&fields["month"])?;
    let date = LocalDate::ymd(year, month, day).map_err(Error::Date)?;

    // The weekday name has to agree with the date it claims to name.
    if !fields["day"].eq_ignore_ascii_case(SHORT_DAYS[date.weekday() as usize]) {
        return Err(Error::MismatchedFormat);
    }

    let time = LocalTime::hms(hour, minute, second).map_err(Error::Date)?;
    let offset = zone_to_offset(&fields["zone"])?;

    Ok(ZonedDateTime::of(LocalDateTime::new(date, time), offset))
}

fn month_from_name(name: &str) -> Result<Month, Error> {
    match SHORT_MONTHS.iter().position(|m| m.eq_ignore_ascii_case(name)) {
        Some(index) => Month::from_zero(index as i8).map_err(Error::Date),
        None        => Err(Error::MismatchedFormat),
    }
}

fn zone_to_offset(zone: &str) -> Result<Offset, Error> {
    let numeric = if zone.starts_with('+') || zone.starts_with('-') {
        zone.replace(":", "")
    }
    else {
        match legacy_zone(&zone.to_ascii_uppercase()) {
            Some(resolved) => resolved.to_string(),
            None           => return Err(Error::MismatchedFormat),
        }
    };

    // By now the string is known to be a sign and four digits.
    let negative = numeric.starts_with('-');
    let hours: i8 = numeric[1..3].parse().unwrap();
    let minutes: i8 = numeric[3..].parse().unwrap();

    let (hours, minutes) = if negative { (-hours, -minutes) } else { (hours, minutes) };
    Offset::of_hours_and_minutes(hours, minutes).map_err(Error::Offset)
}

/// The alphabetic zone designators of RFC 822 §5, resolved to numeric
/// offsets: `UT`, `GMT` and friends, the named North American zones, and
/// the military single letters, where `A` through `M` (skipping `J`) run
/// west from `-0100` to `-1200` and `N` through `Y` run east from `+0100`
/// to `+1200`.
fn legacy_zone(name: &str) -> Option<&'static str> {
    Some(match name {
        "UT" | "UTC" | "Z" | "GMT" => "+0000",

        "A" => "-0100",  "B" => "-0200",  "C" => "-0300",  "D" => "-0400",
        "E" => "-0500",  "F" => "-0600",  "G" => "-0700",  "H" => "-0800",
        "I" => "-0900",  "K" => "-1000",  "L" => "-1100",  "M" => "-1200",

        "N" => "+0100",  "O" => "+0200",  "P" => "+0300",  "Q" => "+0400",
        "R" => "+0500",  "S" => "+0600",  "T" => "+0700",  "U" => "+0800",
        "V" => "+0900",  "W" => "+1000",  "X" => "+1100",  "Y" => "+1200",

        "EDT"         => "-0400",
        "EST" | "CDT" => "-0500",
        "CST" | "MDT" => "-0600",
        "MST" | "PDT" => "-0700",
        "PST"         => "-0800",

        _ => return None,
    })
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// The input was empty, or nothing but whitespace.
    EmptyInput,

    /// The input doesn’t fit the RFC 2822 date grammar.
    MismatchedFormat,

    /// The input fits the grammar, but its fields don’t name a real date
    /// or time.
    Date(DateTimeError),

    /// The input fits the grammar, but its zone offset is out of range.
    Offset(OffsetError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EmptyInput        => write!(f, "empty input"),
            Error::MismatchedFormat  => write!(f, "not an RFC 2822 date-time"),
            Error::Date(_)           => write!(f, "datetime field out of range"),
            Error::Offset(_)         => write!(f, "offset out of range"),
        }
    }
}

impl ErrorTrait for Error {
    fn cause(&self) -> Option<&dyn ErrorTrait> {
        match *self {
            Error::Date(ref e)    => Some(e),
            Error::Offset(ref e)  => Some(e),
            _                     => None,
        }
    }
}


#[cfg(test)]
mod test {
    use super::{format, parse, Error};
    use cal::datetime::Month;
    use cal::offset::Offset;
    use cal::zoned::ZonedDateTime;

    fn utc_midnight() -> ZonedDateTime {
        ZonedDateTime::from_fields(2024, Month::January, 1, 0, 0, 0, 0, Offset::utc()).unwrap()
    }

    #[test]
    fn canonical_output() {
        assert_eq!(format(&utc_midnight()), "Mon, 01 Jan 2024 00:00:00 +0000");
    }

    #[test]
    fn negative_offset_output() {
        let offset = Offset::of_hours_and_minutes(-5, -30).unwrap();
        let time = ZonedDateTime::from_fields(2009, Month::February, 13, 23, 31, 30, 0, offset).unwrap();
        assert_eq!(format(&time), "Fri, 13 Feb 2009 23:31:30 -0530");
    }

    #[test]
    fn round_trip() {
        let time = utc_midnight();
        assert_eq!(parse(&format(&time)).unwrap(), time);
    }

    #[test]
    fn single_digit_day() {
        assert_eq!(parse("Mon, 1 Jan 2024 00:00:00 +0000").unwrap(), utc_midnight());
    }

    #[test]
    fn colon_in_offset() {
        assert_eq!(parse("Mon, 01 Jan 2024 00:00:00 +00:00").unwrap(), utc_midnight());
    }

    #[test]
    fn empty() {
        assert_eq!(parse(""), Err(Error::EmptyInput));
        assert_eq!(parse("   "), Err(Error::EmptyInput));
    }

    #[test]
    fn word_salad() {
        assert_eq!(parse("first of january"), Err(Error::MismatchedFormat));
    }

    #[test]
    fn wrong_weekday_name() {
        assert_eq!(parse("Tue, 01 Jan 2024 00:00:00 +0000"), Err(Error::MismatchedFormat));
    }

    #[test]
    fn out_of_range_date() {
        assert!(parse("Fri, 30 Feb 2024 00:00:00 +0000").is_err());
    }

    mod zones {
        use super::*;

        macro_rules! test {
            ($name: ident: $zone: expr => $offset: expr) => {
                #[test]
                fn $name() {
                    let named   = parse(&format!("Mon, 01 Jan 2024 00:00:00 {}", $zone)).unwrap();
                    let numeric = parse(&format!("Mon, 01 Jan 2024 00:00:00 {}", $offset)).unwrap();
                    assert_eq!(named, numeric);
                    assert_eq!(named.offset(), numeric.offset());
                }
            };
        }

        test!(greenwich: "GMT" => "+0000");
        test!(universal: "UT"  => "+0000");
        test!(zulu:      "Z"   => "+0000");
        test!(eastern:   "EST" => "-0500");
        test!(east_dst:  "EDT" => "-0400");
        test!(central:   "CST" => "-0600");
        test!(mountain:  "MST" => "-0700");
        test!(pacific:   "PST" => "-0800");
        test!(pacif_dst: "PDT" => "-0700");
        test!(mil_alpha: "A"   => "-0100");
        test!(mil_mike:  "M"   => "-1200");
        test!(mil_nov:   "N"   => "+0100");
        test!(mil_yank:  "Y"   => "+1200");

        #[test]
        fn juliet_is_not_a_zone() {
            assert_eq!(parse("Mon, 01 Jan 2024 00:00:00 J"), Err(Error::MismatchedFormat));
        }

        #[test]
        fn lowercase_names_resolve() {
            assert_eq!(
                parse("Mon, 01 Jan 2024 00:00:00 gmt").unwrap(),
                parse("Mon, 01 Jan 2024 00:00:00 +0000").unwrap());
        }
    }
}
