//! Parser for loose, human-written duration strings.
//!
//! Durations are written as one or more signed-number/unit tokens, in any
//! order, with optional whitespace between them: `"2y 3mon 5d"`,
//! `"90m"`, `"1h -30m +5s"`, `"100ms 200us 300ns"`. Unit spellings are
//! case-insensitive and range from one-letter abbreviations (`h`) to full
//! words (`hours`); each canonical unit may appear at most once per string.
//!
//! Year and month are fixed-length approximations (365 and 30 days). There
//! is no calendar arithmetic, no localization and no fractional numbers.
//!
//! ```
//! use dur::SignedDuration;
//!
//! let dur: SignedDuration = "1h -30m +5s".parse()?;
//! assert_eq!(dur.as_nanos(), 1_805_000_000_000);
//! # Ok::<(), dur::ParseError>(())
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

mod scan;
mod unit;

pub use scan::parse;
pub use unit::Unit;

/// Error returned when a duration string cannot be parsed.
///
/// The first invalid token aborts the whole parse; no partial value is
/// reported alongside the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("expected a digit or sign")]
    MissingNumber,
    #[error("number is missing a unit")]
    MissingUnit,
    /// The unit token was empty or longer than any recognized spelling.
    #[error("malformed unit token")]
    MalformedUnit,
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
    #[error("duplicate unit `{0}`")]
    DuplicateUnit(Unit),
}

/// A signed span of time, counted in nanoseconds.
///
/// [`std::time::Duration`] cannot represent negative spans, so parse
/// results are carried in this newtype instead. Obtain one with [`parse`]
/// or [`str::parse`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedDuration(i64);

impl SignedDuration {
    pub const ZERO: Self = Self(0);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Converts to a [`std::time::Duration`], or `None` if negative.
    pub fn to_std(self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_nanos)
    }
}

impl From<SignedDuration> for i64 {
    fn from(dur: SignedDuration) -> i64 {
        dur.0
    }
}

impl FromStr for SignedDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Renders the span in mixed units, largest first: `"2d 3h 4m"`, `"250ms"`,
/// `"0s"`. Each component of a negative span carries its own `-`
/// (`"-1h -30m"`), because the parser signs tokens individually. Year and
/// month are never emitted; days are the largest output unit. The rendering
/// parses back to the same value.
impl fmt::Display for SignedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0s");
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        let mut rem = self.0.unsigned_abs();
        let mut first = true;
        let components = [
            ("d", Unit::Day.nanos() as u64),
            ("h", Unit::Hour.nanos() as u64),
            ("m", Unit::Minute.nanos() as u64),
            ("s", Unit::Second.nanos() as u64),
            ("ms", Unit::Millisecond.nanos() as u64),
            ("us", Unit::Microsecond.nanos() as u64),
        ];
        for (suffix, nanos) in components {
            let count = rem / nanos;
            rem %= nanos;
            if count > 0 {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{sign}{count}{suffix}")?;
                first = false;
            }
        }
        if rem > 0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{sign}{rem}ns")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SignedDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SignedDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = SignedDuration;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a human duration string like \"1h 30m\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
