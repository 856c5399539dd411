//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! # use caltime::LocalDate;
//! # use caltime::DatePiece;
//! use caltime::convenience::Today;
//! let today: LocalDate = LocalDate::today();
//! ```

use cal::datetime::{LocalDate, LocalDateTime};

/// Adds `LocalDate::today() -> LocalDate`
pub trait Today {
    fn today() -> Self;
}

impl Today for LocalDate {
    fn today() -> LocalDate {
        LocalDateTime::now().date()
    }
}
