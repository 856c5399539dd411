//! ISO-8601 textual representations of dates, times, and offsets.

use std::fmt;

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDate, LocalTime, LocalDateTime};
use cal::offset::Offset;
use cal::zoned::ZonedDateTime;
use util::RangeExt;

#[cfg(feature="format")] pub mod custom;


/// Types that render themselves in their ISO-8601 form.
///
/// The `iso` method hands back a lightweight adapter implementing
/// `Display`, so the ISO text can be written straight into a formatter
/// without going through an intermediate `String`.
pub trait ISO: Sized {
    fn iso(&self) -> Iso<Self> {
        Iso(self)
    }
}

/// The `Display` adapter returned by the `ISO` trait.
pub struct Iso<'a, T: 'a>(&'a T);

impl<'a, T> fmt::Debug for Iso<'a, T> where Iso<'a, T>: fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ISO for LocalDate {
}

impl ISO for LocalTime {
}

impl ISO for LocalDateTime {
}

impl ISO for Offset {
}

impl ISO for ZonedDateTime {
}


impl<'a> fmt::Display for Iso<'a, LocalDate> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.0.year();
        if year.is_within(0 .. 9999) {
            write!(f, "{:04}-{:02}-{:02}", year, self.0.month() as usize, self.0.day())
        }
        else {
            // Dates outside the usual four digits carry an explicit sign.
            write!(f, "{:+05}-{:02}-{:02}", year, self.0.month() as usize, self.0.day())
        }
    }
}

impl<'a> fmt::Display for Iso<'a, LocalTime> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:03}", self.0.hour(), self.0.minute(), self.0.second(), self.0.millisecond())
    }
}

impl<'a> fmt::Display for Iso<'a, LocalDateTime> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.0.date().iso(), self.0.time().iso())
    }
}

impl<'a> fmt::Display for Iso<'a, Offset> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_utc() {
            write!(f, "Z")
        }
        else {
            let sign = if self.0.is_negative() { '-' } else { '+' };
            write!(f, "{}{:02}", sign, self.0.hours().abs())?;

            // Trailing zero fields are left off, shortest-form style.
            if self.0.minutes() != 0 || self.0.seconds() != 0 {
                write!(f, ":{:02}", self.0.minutes().abs())?;
            }

            if self.0.seconds() != 0 {
                write!(f, ":{:02}", self.0.seconds().abs())?;
            }

            Ok(())
        }
    }
}

impl<'a> fmt::Display for Iso<'a, ZonedDateTime> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.0.local().iso(), self.0.offset().iso())
    }
}


// The default textual form of a zoned date-time is its ISO-8601 form.
impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iso())
    }
}


impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self.iso())
    }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self.iso())
    }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self.iso())
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset({})", self.iso())
    }
}

impl fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZonedDateTime({})", self.iso())
    }
}
