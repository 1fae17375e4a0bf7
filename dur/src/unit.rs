use std::fmt;

const NANOS_PER_YEAR: i64 = 31_536_000_000_000_000; // 365 days
const NANOS_PER_MONTH: i64 = 2_592_000_000_000_000; // 30 days
const NANOS_PER_DAY: i64 = 86_400_000_000_000;
const NANOS_PER_HOUR: i64 = 3_600_000_000_000;
const NANOS_PER_MINUTE: i64 = 60_000_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_MICRO: i64 = 1_000;

/// The canonical time units a duration string can be written in.
///
/// Year and month are fixed-length approximations (365 and 30 days), not
/// calendar units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Unit {
    Year = 0,
    Month = 1,
    Day = 2,
    Hour = 3,
    Minute = 4,
    Second = 5,
    Millisecond = 6,
    Microsecond = 7,
    Nanosecond = 8,
}

/// Number of canonical units, sizing the per-parse seen-set.
pub(crate) const COUNT: usize = 9;

impl Unit {
    /// Duration of one count of this unit, in nanoseconds.
    pub const fn nanos(self) -> i64 {
        match self {
            Unit::Year => NANOS_PER_YEAR,
            Unit::Month => NANOS_PER_MONTH,
            Unit::Day => NANOS_PER_DAY,
            Unit::Hour => NANOS_PER_HOUR,
            Unit::Minute => NANOS_PER_MINUTE,
            Unit::Second => NANOS_PER_SECOND,
            Unit::Millisecond => NANOS_PER_MILLI,
            Unit::Microsecond => NANOS_PER_MICRO,
            Unit::Nanosecond => 1,
        }
    }

    /// Canonical long name, e.g. `"hour"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
            Unit::Nanosecond => "nanosecond",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a lowercased ASCII unit spelling to its canonical unit.
///
/// Matching is exact: a spelling either matches or the token is
/// unrecognized. The scanner guarantees `token` is 1..=12 bytes.
pub(crate) fn lookup(token: &[u8]) -> Option<Unit> {
    let unit = match token {
        b"y" | b"yr" | b"yrs" | b"year" | b"years" => Unit::Year,
        b"mon" | b"mons" | b"month" | b"months" => Unit::Month,
        b"d" | b"dy" | b"day" | b"dys" | b"days" => Unit::Day,
        b"h" | b"hr" | b"hrs" | b"hour" | b"hours" => Unit::Hour,
        b"m" | b"min" | b"mins" | b"minute" | b"minutes" => Unit::Minute,
        b"s" | b"sec" | b"secs" | b"second" | b"seconds" => Unit::Second,
        b"ms" | b"milli" | b"millis" | b"millisecond" | b"milliseconds" => {
            Unit::Millisecond
        }
        b"us" | b"micro" | b"micros" | b"microsecond" | b"microseconds" => {
            Unit::Microsecond
        }
        b"ns" | b"nano" | b"nanos" | b"nanosecond" | b"nanoseconds" => {
            Unit::Nanosecond
        }
        _ => return None,
    };
    Some(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_spellings_resolve() {
        let test_cases: [(&[&str], Unit); 9] = [
            (&["y", "yr", "yrs", "year", "years"], Unit::Year),
            (&["mon", "mons", "month", "months"], Unit::Month),
            (&["d", "dy", "day", "dys", "days"], Unit::Day),
            (&["h", "hr", "hrs", "hour", "hours"], Unit::Hour),
            (&["m", "min", "mins", "minute", "minutes"], Unit::Minute),
            (&["s", "sec", "secs", "second", "seconds"], Unit::Second),
            (
                &["ms", "milli", "millis", "millisecond", "milliseconds"],
                Unit::Millisecond,
            ),
            (
                &["us", "micro", "micros", "microsecond", "microseconds"],
                Unit::Microsecond,
            ),
            (
                &["ns", "nano", "nanos", "nanosecond", "nanoseconds"],
                Unit::Nanosecond,
            ),
        ];
        for (spellings, unit) in test_cases {
            for spelling in spellings {
                assert_eq!(
                    lookup(spelling.as_bytes()),
                    Some(unit),
                    "{spelling} should resolve to {unit}"
                );
            }
        }
    }

    #[test]
    fn test_unrecognized_spellings() {
        for token in ["", "x", "mo", "mi", "hh", "minu", "weeks", "fortnight"] {
            assert_eq!(lookup(token.as_bytes()), None, "{token:?} should not resolve");
        }
    }

    #[test]
    fn test_magnitude_ratios() {
        assert_eq!(Unit::Year.nanos(), 365 * Unit::Day.nanos());
        assert_eq!(Unit::Month.nanos(), 30 * Unit::Day.nanos());
        assert_eq!(Unit::Day.nanos(), 24 * Unit::Hour.nanos());
        assert_eq!(Unit::Hour.nanos(), 60 * Unit::Minute.nanos());
        assert_eq!(Unit::Minute.nanos(), 60 * Unit::Second.nanos());
        assert_eq!(Unit::Second.nanos(), 1_000 * Unit::Millisecond.nanos());
        assert_eq!(Unit::Millisecond.nanos(), 1_000 * Unit::Microsecond.nanos());
        assert_eq!(Unit::Microsecond.nanos(), 1_000 * Unit::Nanosecond.nanos());
    }
}
