//! Named time zones, their transition tables, and daylight-saving
//! calculations.

use std::borrow::Cow;
use std::sync::Arc;

use cal::datetime::LocalDateTime;
use cal::zoned::ZonedDateTime;
use duration::Duration;
use system;
use util::RangeExt;


/// A **time zone**, which here is a list of timespans, each containing a
/// fixed offset for the current location’s time from UTC.
#[derive(Debug, Clone)]
pub struct TimeZone(pub TimeZoneSource<'static>);

#[derive(Debug, Clone)]
pub enum TimeZoneSource<'a> {
    Static(&'a StaticTimeZone<'a>),
    Runtime(Arc<runtime::OwnedTimeZone>),
}

#[derive(PartialEq, Debug)]
pub struct StaticTimeZone<'a> {

    /// This zone’s name in the zoneinfo database, such as “America/New_York”.
    pub name: &'a str,

    /// The set of timespans used in this time zone.
    pub fixed_timespans: FixedTimespanSet<'a>,
}

impl TimeZone {

    pub fn zone_name(&self) -> Option<&str> {
        match self.0 {
            TimeZoneSource::Static(ref tz)   => Some(tz.name),
            TimeZoneSource::Runtime(ref arc) => arc.name.as_ref().map(|x| &**x),
        }
    }

    /// Returns the total offset from UTC, in seconds, that this time zone
    /// has at the given UTC instant.
    pub fn offset(&self, utc: LocalDateTime) -> i64 {
        match self.0 {
            TimeZoneSource::Static(ref tz)   => tz.fixed_timespans.offset(utc),
            TimeZoneSource::Runtime(ref arc) => arc.fixed_timespans.borrow().offset(utc),
        }
    }

    /// Returns whether a daylight-saving offset is in effect in this time
    /// zone at the given UTC instant.
    pub fn is_dst(&self, utc: LocalDateTime) -> bool {
        match self.0 {
            TimeZoneSource::Static(ref tz)   => tz.fixed_timespans.is_dst(utc),
            TimeZoneSource::Runtime(ref arc) => arc.fixed_timespans.borrow().is_dst(utc),
        }
    }

    /// Returns the zone’s *standard* offset from UTC, in seconds, at the
    /// given UTC instant: the offset with any daylight-saving shift taken
    /// back out.
    pub fn standard_offset(&self, utc: LocalDateTime) -> i64 {
        match self.0 {
            TimeZoneSource::Static(ref tz)   => tz.fixed_timespans.standard_offset(utc),
            TimeZoneSource::Runtime(ref arc) => arc.fixed_timespans.borrow().standard_offset(utc),
        }
    }

    /// Returns the time zone abbreviation that this time zone has at the
    /// given instant. As always, abbreviations are notoriously vague, and
    /// should only be used when referring to a known timezone.
    pub fn name(&self, utc: LocalDateTime) -> String {
        match self.0 {
            TimeZoneSource::Static(ref tz)   => tz.fixed_timespans.name(utc),
            TimeZoneSource::Runtime(ref arc) => arc.fixed_timespans.borrow().name(utc),
        }
    }

    /// Whether this time zone is “fixed”: a fixed time zone has no
    /// transitions, meaning it will always be at the same offset from UTC.
    ///
    /// There are relatively few of these, namely the European timezones
    /// WET, CET, MET, and EET, and the North American timezones EST5EDT,
    /// CST6CDT, MST7MDT, and PST8PDT, none of which actually corresponds to
    /// a geographical location.
    pub fn is_fixed(&self) -> bool {
        match self.0 {
            TimeZoneSource::Static(ref tz)   => tz.fixed_timespans.is_fixed(),
            TimeZoneSource::Runtime(ref arc) => arc.fixed_timespans.borrow().is_fixed(),
        }
    }

    /// Converts a UTC instant into the wall-clock time shown in this time
    /// zone at that instant.
    pub fn to_zoned(&self, utc: LocalDateTime) -> LocalDateTime {
        utc + Duration::of(self.offset(utc))
    }

    /// Interprets a wall-clock time that is *already* informally in this
    /// time zone, producing the UTC instant it names.
    ///
    /// The wall clock is first read with the zone’s standard offset. If a
    /// daylight-saving shift turns out to be in effect at the instant that
    /// produces, the surplus over the standard offset is subtracted again.
    /// Reading the fields with the full daylight offset up front would
    /// count the shift twice for times constructed from calendar fields;
    /// this two-step resolution matches the wall clock for all plain times
    /// and for the ordinary transition-adjacent hours.
    pub fn resolve_local(&self, wall: LocalDateTime) -> LocalDateTime {
        let standard = self.standard_offset(wall);
        let guess = wall - Duration::of(standard);

        if self.is_dst(guess) {
            let surplus = self.offset(guess) - self.standard_offset(guess);
            guess - Duration::of(surplus)
        }
        else {
            guess
        }
    }

    /// Converts a local datetime that is *already* informally in this time
    /// zone into a zoned datetime that actually uses this time zone.
    ///
    /// This method can return 0, 1, or 2 values, depending on whether the
    /// datetime passed in falls between two timespans (an impossible time)
    /// or overlaps two separate timespans (an ambiguous time). The result
    /// will *almost* always be precise, but there are edge cases you need
    /// to watch out for.
    pub fn convert_local(&self, local: LocalDateTime) -> LocalTimes {
        match self.0 {
            TimeZoneSource::Static(ref tz)   => tz.fixed_timespans.convert_local(local, self),
            TimeZoneSource::Runtime(ref arc) => arc.fixed_timespans.borrow().convert_local(local, self),
        }
    }
}


/// The name of the zone the system is currently configured with, if it can
/// be determined; on most Unixes this comes out of the `/etc/localtime`
/// symlink.
pub fn system_zone_name() -> Option<String> {
    system::sys_timezone()
}


/// A set of timespans, separated by the instances at which the timespans
/// change over. There will always be one more timespan than transitions.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedTimespanSet<'a> {

    /// The first timespan, which is assumed to have been in effect up until
    /// the initial transition instant (if any). Each set has to have at
    /// least one timespan.
    pub first: FixedTimespan<'a>,

    /// The rest of the timespans, as a slice of tuples, each containing:
    ///
    /// 1. A transition instant at which the previous timespan ends and the
    ///    next one begins, stored as a Unix timestamp;
    /// 2. The actual timespan to transition into.
    pub rest: &'a [ (i64, FixedTimespan<'a>) ],
}

/// An individual timespan with a fixed offset.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedTimespan<'a> {

    /// The *total* offset in effect during this timespan, in seconds. This
    /// is the sum of the standard offset from UTC (the zone’s standard
    /// time), and any extra daylight-saving offset.
    pub offset: i64,

    /// Whether there was any daylight-saving offset in effect during this
    /// timespan.
    pub is_dst: bool,

    /// The abbreviation in use during this timespan, such as “GMT” or
    /// “PDT”. Abbreviations are notoriously vague, and should only be used
    /// for referring to a known timezone.
    pub name: Cow<'a, str>,
}

impl<'a> FixedTimespanSet<'a> {
    fn find(&self, time: i64) -> &FixedTimespan {
        match self.rest.iter().take_while(|t| t.0 < time).last() {
            None     => &self.first,
            Some(zd) => &zd.1,
        }
    }

    fn offset(&self, datetime: LocalDateTime) -> i64 {
        let unix_timestamp = datetime.to_instant().seconds();
        self.find(unix_timestamp).offset
    }

    fn is_dst(&self, datetime: LocalDateTime) -> bool {
        let unix_timestamp = datetime.to_instant().seconds();
        self.find(unix_timestamp).is_dst
    }

    fn standard_offset(&self, datetime: LocalDateTime) -> i64 {
        let unix_timestamp = datetime.to_instant().seconds();

        // The most recent non-DST timespan at or before the given time
        // holds the zone’s standard offset. A zone that has only ever been
        // observed in DST has no standard offset to speak of, so scan the
        // remaining timespans for one before giving up.
        let mut standard = if self.first.is_dst { None } else { Some(self.first.offset) };

        for rest in self.rest.iter().take_while(|t| t.0 < unix_timestamp) {
            if !rest.1.is_dst {
                standard = Some(rest.1.offset);
            }
        }

        standard
            .or_else(|| self.rest.iter().find(|t| !t.1.is_dst).map(|t| t.1.offset))
            .unwrap_or(self.first.offset)
    }

    fn name(&self, datetime: LocalDateTime) -> String {
        let unix_timestamp = datetime.to_instant().seconds();
        self.find(unix_timestamp).name.to_string()
    }

    fn is_fixed(&self) -> bool {
        self.rest.is_empty()
    }

    fn convert_local(&self, local: LocalDateTime, zone: &TimeZone) -> LocalTimes {
        let unix_timestamp = local.to_instant().seconds();

        let zonify = |offset| ZonedDateTime::from_parts(local, offset, zone.clone());

        let timespans = self.find_with_surroundings(unix_timestamp);

        if let Some((previous_zone, previous_transition_time)) = timespans.previous {

            // Test whether this timestamp is in the *overlap* after the
            // current timespan starts but before the previous one ends.
            if previous_zone.offset > timespans.current.offset
            && (unix_timestamp - previous_transition_time).is_within(timespans.current.offset .. previous_zone.offset) {
                return LocalTimes::Ambiguous {
                    earlier:  zonify(previous_zone.offset),
                    later:    zonify(timespans.current.offset),
                };
            }

            // Test whether this timestamp is in the *space* after the
            // previous timespan ends but before the current one starts.
            if previous_zone.offset < timespans.current.offset
            && (unix_timestamp - previous_transition_time).is_within(previous_zone.offset .. timespans.current.offset) {
                return LocalTimes::Impossible;
            }
        }

        if let Some(&(next_transition_time, ref next_zone)) = timespans.next {

            // Test whether this timestamp is in the *overlap* after the
            // next timespan starts but before the current one ends.
            if timespans.current.offset > next_zone.offset
            && (unix_timestamp - next_transition_time).is_within(next_zone.offset .. timespans.current.offset) {
                return LocalTimes::Ambiguous {
                    earlier:  zonify(timespans.current.offset),
                    later:    zonify(next_zone.offset),
                };
            }

            // Test whether this timestamp is in the *space* after the
            // current timespan ends but before the next one starts.
            if timespans.current.offset < next_zone.offset
            && (unix_timestamp - next_transition_time).is_within(timespans.current.offset .. next_zone.offset) {
                return LocalTimes::Impossible;
            }
        }

        LocalTimes::Precise(zonify(timespans.current.offset))
    }

    fn find_with_surroundings(&self, time: i64) -> Surroundings {
        if let Some((position, _)) = self.rest.iter().enumerate().take_while(|&(_, t)| t.0 < time).last() {
            // There’s a matching time in the ‘rest’ list, so return that
            // time along with the two sets of details around it.

            let previous_details = if position == 0 {
                &self.first
            }
            else {
                &self.rest[position - 1].1
            };

            Surroundings {
                previous:  Some((previous_details, self.rest[position].0)),
                current:   &self.rest[position].1,
                next:      self.rest.get(position + 1),
            }
        }
        else {
            // If there’s no matching time in the ‘rest’ list, it must be
            // the ‘first’ one.
            Surroundings {
                previous: None,
                current:  &self.first,
                next:     self.rest.get(0),
            }
        }
    }
}


#[derive(PartialEq, Debug)]
struct Surroundings<'a> {
    previous:  Option<(&'a FixedTimespan<'a>, i64)>,
    current:   &'a FixedTimespan<'a>,
    next:      Option<&'a (i64, FixedTimespan<'a>)>,
}


/// The result of converting a *local* time to a *zoned* time with the same
/// time components. See `TimeZone::convert_local` for more information.
#[derive(Debug)]
pub enum LocalTimes {

    /// This local time is impossible (when a time occurs between two
    /// timespans, which should never be shown on a wall clock).
    Impossible,

    /// This local time can be defined unambiguously.
    Precise(ZonedDateTime),

    /// This local time is ambiguous (when a time overlaps two timespans,
    /// which happens twice on a wall clock rather than once).
    Ambiguous { earlier: ZonedDateTime, later: ZonedDateTime },
}

impl LocalTimes {

    /// Extracts the *precise* zoned date time, if present; **panics otherwise**.
    ///
    /// It is almost always preferable to use pattern matching on a
    /// `LocalTimes` value and handle the impossible/ambiguous cases
    /// explicitly, rather than risking a panic.
    pub fn unwrap_precise(self) -> ZonedDateTime {
        match self {
            LocalTimes::Precise(p)        => p,
            LocalTimes::Impossible        => panic!("called `LocalTimes::unwrap()` on an `Impossible` value"),
            LocalTimes::Ambiguous { .. }  => panic!("called `LocalTimes::unwrap()` on an `Ambiguous` value: {:?}", self),
        }
    }

    /// Returns whether this local times result is impossible (when a time
    /// occurs between two timespans, which should never be shown on a wall
    /// clock).
    pub fn is_impossible(&self) -> bool {
        match *self {
            LocalTimes::Impossible => true,
            _                      => false,
        }
    }

    /// Returns whether this local times result is ambiguous (when a time
    /// overlaps two timespans, which happens twice on a wall clock rather
    /// than once).
    pub fn is_ambiguous(&self) -> bool {
        match *self {
            LocalTimes::Ambiguous { .. } => true,
            _                            => false,
        }
    }
}


pub mod runtime {
    use super::{FixedTimespan, FixedTimespanSet};

    #[derive(PartialEq, Debug)]
    pub struct OwnedTimeZone {
        pub name: Option<String>,
        pub fixed_timespans: OwnedFixedTimespanSet,
    }

    #[derive(PartialEq, Debug)]
    pub struct OwnedFixedTimespanSet {
        pub first: FixedTimespan<'static>,
        pub rest: Vec<(i64, FixedTimespan<'static>)>,
    }

    impl OwnedFixedTimespanSet {
        pub fn borrow(&self) -> FixedTimespanSet {
            FixedTimespanSet {
                first: self.first.clone(),
                rest: &*self.rest,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::borrow::Cow;

    const NONE: FixedTimespanSet<'static> = FixedTimespanSet {
        first: FixedTimespan {
            offset: 0,
            is_dst: false,
            name: Cow::Borrowed("ZONE_A"),
        },
        rest: &[],
    };

    #[test]
    fn empty() {
        assert_eq!(NONE.find_with_surroundings(1184000000), Surroundings {
            previous: None,
            current: &FixedTimespan {
                offset: 0,
                is_dst: false,
                name: Cow::Borrowed("ZONE_A"),
            },
            next: None,
        })
    }

    const ONE: FixedTimespanSet<'static> = FixedTimespanSet {
        first: FixedTimespan {
            offset: 0,
            is_dst: false,
            name: Cow::Borrowed("ZONE_A"),
        },
        rest: &[
            (1174784400, FixedTimespan {
                offset: 3600,
                is_dst: false,
                name: Cow::Borrowed("ZONE_B"),
            }),
        ],
    };

    #[test]
    fn just_one_first() {
        assert_eq!(ONE.find_with_surroundings(1184000000), Surroundings {
            previous: Some((
                &FixedTimespan {
                    offset: 0,
                    is_dst: false,
                    name: Cow::Borrowed("ZONE_A"),
                },
                1174784400,
            )),
            current: &FixedTimespan {
                offset: 3600,
                is_dst: false,
                name: Cow::Borrowed("ZONE_B"),
            },
            next: None,
        });
    }

    #[test]
    fn just_one_other() {
        assert_eq!(ONE.find_with_surroundings(1174000000), Surroundings {
            previous: None,
            current: &FixedTimespan {
                offset: 0,
                is_dst: false,
                name: Cow::Borrowed("ZONE_A"),
            },
            next: Some(&(
                1174784400,
                FixedTimespan {
                    offset: 3600,
                    is_dst: false,
                    name: Cow::Borrowed("ZONE_B"),
                },
            )),
        })
    }

    const MANY: FixedTimespanSet<'static> = FixedTimespanSet {
        first: FixedTimespan {
            offset: 0,
            is_dst: false,
            name: Cow::Borrowed("ZONE_A"),
        },
        rest: &[
            (1174784400, FixedTimespan {
                offset: 3600,
                is_dst: true,
                name: Cow::Borrowed("ZONE_B"),
            }),
            (1193533200, FixedTimespan {
                offset: 0,
                is_dst: false,
                name: Cow::Borrowed("ZONE_C"),
            }),
        ],
    };

    #[test]
    fn multiple_second() {
        assert_eq!(MANY.find_with_surroundings(1184000000), Surroundings {
            previous: Some((
                &FixedTimespan {
                    offset: 0,
                    is_dst: false,
                    name: Cow::Borrowed("ZONE_A"),
                },
                1174784400,
            )),
            current: &FixedTimespan {
                offset: 3600,
                is_dst: true,
                name: Cow::Borrowed("ZONE_B"),
            },
            next: Some(&(
                1193533200,
                FixedTimespan {
                    offset: 0,
                    is_dst: false,
                    name: Cow::Borrowed("ZONE_C"),
                }
            )),
        });
    }

    #[test]
    fn multiple_last() {
        assert_eq!(MANY.find_with_surroundings(1200000000), Surroundings {
            previous: Some((
                &FixedTimespan {
                    offset: 3600,
                    is_dst: true,
                    name: Cow::Borrowed("ZONE_B"),
                },
                1193533200,
            )),
            current: &FixedTimespan {
                offset: 0,
                is_dst: false,
                name: Cow::Borrowed("ZONE_C"),
            },
            next: None,
        });
    }

    #[test]
    fn standard_offset_skips_dst_spans() {
        use cal::datetime::LocalDateTime;

        // midsummer 2007, inside the DST span of MANY
        let when = LocalDateTime::at(1184000000);
        assert_eq!(MANY.offset(when), 3600);
        assert!(MANY.is_dst(when));
        assert_eq!(MANY.standard_offset(when), 0);
    }
}
