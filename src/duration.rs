//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul};


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with millisecond precision.
///
/// A millisecond is the smallest unit of time this library deals in — one
/// “tick” — so a duration is stored as a whole number of seconds plus the
/// milliseconds left over.
#[derive(Clone, PartialEq, Eq, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    milliseconds: i16,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Duration {
        Duration { seconds: 0, milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Duration {
        Duration { seconds, milliseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// milliseconds long.
    pub fn of_ms(seconds: i64, milliseconds: i16) -> Duration {
        assert!(milliseconds >= 0 && milliseconds <= 999);
        Duration { seconds, milliseconds }
    }

    /// Create a new duration spanning the given number of minutes.
    pub fn of_minutes(minutes: i64) -> Duration {
        Duration::of(minutes * 60)
    }

    /// Create a new duration spanning the given number of hours.
    pub fn of_hours(hours: i64) -> Duration {
        Duration::of(hours * 60 * 60)
    }

    /// Create a new duration spanning the given number of days, where a day
    /// is exactly 86 400 seconds (leap seconds are ignored throughout this
    /// library).
    pub fn of_days(days: i64) -> Duration {
        Duration::of(days * 86_400)
    }

    /// The shortest representable duration: one millisecond. Period ends
    /// sit one tick before the next period’s start.
    pub fn tick() -> Duration {
        Duration { seconds: 0, milliseconds: 1 }
    }

    /// Return the seconds and milliseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i16) {
        (self.seconds, self.milliseconds)
    }

    // There are deliberately no separate seconds() and milliseconds()
    // functions, so nobody mistakes milliseconds() for the *total* length
    // in milliseconds rather than just the sub-second portion.
}

impl Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        let ms = self.milliseconds + rhs.milliseconds;
        if ms >= 1000 {
            Duration::of_ms(self.seconds + rhs.seconds + 1, ms - 1000)
        }
        else {
            Duration::of_ms(self.seconds + rhs.seconds, ms)
        }
    }
}

impl Sub<Duration> for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        let ms = self.milliseconds - rhs.milliseconds;
        if ms < 0 {
            Duration::of_ms(self.seconds - rhs.seconds - 1, ms + 1000)
        }
        else {
            Duration::of_ms(self.seconds - rhs.seconds, ms)
        }
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, amount: i64) -> Duration {
        let ms = self.milliseconds as i64 * amount;
        Duration::of_ms(self.seconds * amount + ms / 1000, (ms % 1000) as i16)
    }
}

#[cfg(test)]
mod test {
    pub use super::Duration;

    mod addition {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(10), Duration::of(2) + Duration::of(8))
        }

        #[test]
        fn milliseconds() {
            assert_eq!(Duration::of_ms(0, 500), Duration::of_ms(0, 167) + Duration::of_ms(0, 333))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Duration::of_ms(1, 500), Duration::of_ms(0, 750) + Duration::of_ms(0, 750))
        }

        #[test]
        fn wrapping_exact() {
            assert_eq!(Duration::of(1), Duration::of_ms(0, 500) + Duration::of_ms(0, 500))
        }
    }

    mod subtraction {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(13), Duration::of(28) - Duration::of(15))
        }

        #[test]
        fn milliseconds() {
            assert_eq!(Duration::of_ms(0, 300), Duration::of_ms(0, 950) - Duration::of_ms(0, 650))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Duration::of_ms(0, 750), Duration::of_ms(1, 500) - Duration::of_ms(0, 750))
        }

        #[test]
        fn a_tick_before() {
            assert_eq!(Duration::of_ms(86_399, 999), Duration::of_days(1) - Duration::tick())
        }
    }

    mod multiplication {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(16), Duration::of(8) * 2)
        }

        #[test]
        fn units() {
            assert_eq!(Duration::of_hours(2), Duration::of_minutes(60) * 2)
        }
    }
}
