//! Fixed offsets from UTC.

use std::error::Error as ErrorTrait;
use std::fmt;

use util::RangeExt;


/// A fixed, signed offset from UTC.
///
/// The UTC designator (“Z”) is a separate state from an offset of zero
/// seconds: both describe the same point on the timeline, but they render
/// differently, and only the former means “this value is in universal
/// time” rather than “this value happens to be zero hours east”.
#[derive(PartialEq, Copy, Clone)]
pub struct Offset {
    offset_seconds: Option<i32>,
}

impl Offset {

    /// The UTC designator.
    pub fn utc() -> Self {
        Self { offset_seconds: None }
    }

    /// An offset of the given number of seconds east (positive) or west
    /// (negative) of UTC. Offsets further than a day out are rejected.
    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if seconds.is_within(-86400..86401) {
            Ok(Self { offset_seconds: Some(seconds) })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// An offset of the given hours and minutes, which must carry the
    /// same sign.
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::SignMismatch)
        }
        else if hours <= -24 || hours >= 24 || minutes <= -60 || minutes >= 60 {
            Err(Error::OutOfRange)
        }
        else {
            let hours = hours as i32;
            let minutes = minutes as i32;
            Self::of_seconds(hours * (60 * 60) + minutes * 60)
        }
    }

    /// Builds an offset that is already known to be within range, such as
    /// one taken out of a zone’s transition table.
    pub(crate) fn of_seconds_unchecked(seconds: i32) -> Self {
        Self { offset_seconds: Some(seconds) }
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds.is_none()
    }

    pub fn is_negative(self) -> bool {
        self.hours().is_negative() || self.minutes().is_negative() || self.seconds().is_negative()
    }

    /// The total offset in seconds; zero for the UTC designator.
    pub fn total_seconds(self) -> i64 {
        self.offset_seconds.unwrap_or(0) as i64
    }

    pub fn hours(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s / 60 / 60) as i8,
            None => 0,
        }
    }

    pub fn minutes(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s / 60 % 60) as i8,
            None => 0,
        }
    }

    pub fn seconds(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s % 60) as i8,
            None => 0,
        }
    }
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
    SignMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange    => write!(f, "offset field out of range"),
            Error::SignMismatch  => write!(f, "sign mismatch"),
        }
    }
}

impl ErrorTrait for Error {
}
