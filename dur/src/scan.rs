use std::iter::Peekable;
use std::str::CharIndices;

use tracing::trace;

use crate::{unit, ParseError, SignedDuration};

/// Unit spellings longer than this can never match and fail early.
const MAX_UNIT_LEN: usize = 12;

/// Parses a loose human-written duration string into a [`SignedDuration`].
///
/// See the crate docs for the accepted grammar. The scan is a single
/// forward pass; the first invalid token aborts the whole parse and no
/// partial total is returned.
///
/// Magnitude and accumulation arithmetic deliberately wraps on `i64`
/// overflow rather than reporting an error.
pub fn parse(input: &str) -> Result<SignedDuration, ParseError> {
    trace!(input, "parsing duration string");
    Scanner::new(input).run()
}

/// Per-call parse state: cursor, seen-units set and running total.
struct Scanner<'a> {
    input: &'a str,
    iter: Peekable<CharIndices<'a>>,
    seen: [bool; unit::COUNT],
    total: i64,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            iter: input.char_indices().peekable(),
            seen: [false; unit::COUNT],
            total: 0,
        }
    }

    fn run(mut self) -> Result<SignedDuration, ParseError> {
        self.skip_whitespace();
        if self.iter.peek().is_none() {
            return Err(ParseError::Empty);
        }
        while self.iter.peek().is_some() {
            self.token()?;
            self.skip_whitespace();
        }
        Ok(SignedDuration::from_nanos(self.total))
    }

    /// Consumes one `sign? digits whitespace* unit` token and folds it into
    /// the running total.
    fn token(&mut self) -> Result<(), ParseError> {
        let mut sign: i64 = 1;
        match self.iter.peek() {
            Some(&(_, '-')) => {
                sign = -1;
                self.iter.next();
            }
            Some(&(_, '+')) => {
                self.iter.next();
            }
            Some(&(_, c)) if c.is_ascii_digit() => {}
            _ => return Err(ParseError::MissingNumber),
        }

        let mut magnitude: i64 = 0;
        while let Some(&(_, c)) = self.iter.peek() {
            let Some(digit) = c.to_digit(10) else {
                break;
            };
            magnitude = magnitude.wrapping_mul(10).wrapping_add(i64::from(digit));
            self.iter.next();
        }

        self.skip_whitespace();
        if self.iter.peek().is_none() {
            return Err(ParseError::MissingUnit);
        }

        let unit = self.unit_token()?;
        if self.seen[unit.index()] {
            return Err(ParseError::DuplicateUnit(unit));
        }
        self.seen[unit.index()] = true;

        self.total = self
            .total
            .wrapping_add(magnitude.wrapping_mul(sign).wrapping_mul(unit.nanos()));
        Ok(())
    }

    /// Consumes consecutive letters and resolves them to a canonical unit.
    fn unit_token(&mut self) -> Result<unit::Unit, ParseError> {
        let start = self.pos();
        let mut buf = [0u8; MAX_UNIT_LEN];
        let mut len = 0usize;
        let mut ascii = true;
        while let Some(&(_, c)) = self.iter.peek() {
            if !c.is_alphabetic() {
                break;
            }
            if len < MAX_UNIT_LEN {
                if c.is_ascii() {
                    buf[len] = (c as u8).to_ascii_lowercase();
                } else {
                    // Non-ASCII letters can never match a spelling; keep
                    // consuming so the token is reported whole.
                    ascii = false;
                }
            }
            len += 1;
            self.iter.next();
        }
        if len == 0 || len > MAX_UNIT_LEN {
            return Err(ParseError::MalformedUnit);
        }

        let resolved = if ascii { unit::lookup(&buf[..len]) } else { None };
        resolved.ok_or_else(|| {
            let end = self.pos();
            ParseError::UnknownUnit(self.input[start..end].to_string())
        })
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.iter.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.iter.next();
        }
    }

    /// Byte offset of the next unconsumed character.
    fn pos(&mut self) -> usize {
        match self.iter.peek() {
            Some(&(i, _)) => i,
            None => self.input.len(),
        }
    }
}
