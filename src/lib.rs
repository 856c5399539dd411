#![crate_name = "caltime"]
#![crate_type = "rlib"]
#![crate_type = "dylib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [ calendar arithmetic ](https://crates.io/crates/caltime):
//! time-zone-aware period boundaries, ISO-8601 week numbering, and
//! RFC 822/2822 conversion.
//!
//! # Examples
//!
//! ```
//! use caltime::{ZonedDateTime, Month, Offset, DatePiece};
//!
//! let time = ZonedDateTime::from_fields(2024, Month::May, 13, 9, 30, 0, 0, Offset::utc()).unwrap();
//! assert_eq!(time.year(), 2024);
//! assert_eq!(time.quarter(), 2);
//! assert_eq!(time.start_of_quarter().day(), 1);
//! assert_eq!(time.start_of_quarter().month(), Month::April);
//! ```

extern crate libc;
extern crate regex;

#[macro_use]
extern crate lazy_static;

#[cfg(feature="format")] extern crate locale;
#[cfg(feature="format")] extern crate num_traits;
#[cfg(feature="format")] extern crate pad;
#[cfg(feature="parse")] extern crate iso8601;
#[cfg(windows)] extern crate winapi;

pub mod cal;
pub mod duration;
pub mod instant;
mod system;
mod util;

pub use cal::{DatePiece, TimePiece};
pub use cal::convenience;
#[cfg(feature="format")] pub use cal::fmt::custom as format;
pub use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year};
pub use cal::fmt::{ISO, Iso};
pub use cal::iso;
pub use cal::iso::IsoWeek;
pub use cal::math;
pub use cal::offset::Offset;
pub use cal::period::{Week, YearMonth, Period, PartialDate};
pub use cal::rfc2822;
pub use cal::zone;
pub use cal::zone::TimeZone;
pub use cal::zoned::{ZonedDateTime, ZoneRule};
pub use duration::Duration;
pub use instant::Instant;
