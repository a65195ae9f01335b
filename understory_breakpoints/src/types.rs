// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration keys, thresholds, and handler values.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::RegistrationError;

/// A breakpoint threshold in pixels.
pub type Threshold = u32;

/// The threshold used for the `"default"` entry.
///
/// It is always eligible during [`resolve`](crate::BreakpointTable::resolve), so a
/// table that registers it never resolves to `None`.
pub const DEFAULT_THRESHOLD: Threshold = 0;

/// The literal key that names the default breakpoint.
pub const DEFAULT_KEY: &str = "default";

/// A normalized registration key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BreakpointKey {
    /// The catch-all entry, stored at [`DEFAULT_THRESHOLD`].
    Default,
    /// A minimum viewport width in pixels.
    Width(Threshold),
}

impl BreakpointKey {
    /// Parse a textual key.
    ///
    /// Accepts `"default"` or a decimal number that denotes a non-negative
    /// integer fitting in a [`Threshold`]. Fractions and exponents are allowed
    /// as long as the value is integral (`"1e3"`, `"768.0"`). Surrounding
    /// whitespace is ignored.
    ///
    /// ```
    /// use understory_breakpoints::BreakpointKey;
    ///
    /// assert_eq!(BreakpointKey::parse("default"), Ok(BreakpointKey::Default));
    /// assert_eq!(BreakpointKey::parse(" 768 "), Ok(BreakpointKey::Width(768)));
    /// assert_eq!(BreakpointKey::parse("1e3"), Ok(BreakpointKey::Width(1000)));
    /// assert!(BreakpointKey::parse("wide").is_err());
    /// assert!(BreakpointKey::parse("1.5").is_err());
    /// ```
    pub fn parse(key: &str) -> Result<Self, RegistrationError> {
        let trimmed = key.trim();
        if trimmed == DEFAULT_KEY {
            return Ok(Self::Default);
        }
        parse_width(trimmed)
            .map(Self::from)
            .ok_or_else(|| RegistrationError::InvalidKey {
                key: key.to_string(),
            })
    }

    /// The threshold this key is stored under.
    pub const fn threshold(self) -> Threshold {
        match self {
            Self::Default => DEFAULT_THRESHOLD,
            Self::Width(w) => w,
        }
    }
}

/// Parse `[+]digits[.digits][(e|E)[+|-]digits]` into an integral width.
///
/// Returns `None` for malformed text, fractional values, and values that
/// overflow a [`Threshold`].
fn parse_width(text: &str) -> Option<Threshold> {
    let text = text.strip_prefix('+').unwrap_or(text);
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty()) || !all_digits(int) || !all_digits(frac) {
        return None;
    }
    let exponent: i64 = match exponent {
        Some(e) => {
            let unsigned = e.strip_prefix(['+', '-']).unwrap_or(e);
            if unsigned.is_empty() || !all_digits(unsigned) {
                return None;
            }
            e.parse().ok()?
        }
        None => 0,
    };

    // Significant digits, with the decimal point moved `shift` places right.
    let digits = [int, frac].concat();
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(0);
    }
    let shift = exponent.checked_sub(i64::try_from(frac.len()).ok()?)?;
    if shift >= 0 {
        let mut value = digits.parse::<Threshold>().ok()?;
        for _ in 0..shift {
            value = value.checked_mul(10)?;
        }
        Some(value)
    } else {
        let dropped = usize::try_from(shift.unsigned_abs()).ok()?;
        // Every digit shifted past the point must be zero.
        let kept = digits.len().checked_sub(dropped)?;
        let (whole, rest) = digits.split_at(kept);
        if !rest.bytes().all(|b| b == b'0') {
            return None;
        }
        whole.parse().ok()
    }
}

impl FromStr for BreakpointKey {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Threshold> for BreakpointKey {
    fn from(w: Threshold) -> Self {
        if w == DEFAULT_THRESHOLD {
            Self::Default
        } else {
            Self::Width(w)
        }
    }
}

impl fmt::Display for BreakpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str(DEFAULT_KEY),
            Self::Width(w) => write!(f, "{w}"),
        }
    }
}

/// A registration value.
///
/// Inputs that come from loosely typed sources (configuration, scripting,
/// host bindings) may name a breakpoint without supplying something callable.
/// Those arrive as [`Handler::NotCallable`] and are rejected during
/// [`register`](crate::BreakpointTable::register).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Handler<C> {
    /// An invocable callback.
    Callable(C),
    /// A value that cannot be invoked, rendered for diagnostics.
    NotCallable(String),
}

impl<C> Handler<C> {
    /// Wrap a callback.
    pub const fn callable(c: C) -> Self {
        Self::Callable(c)
    }

    /// Describe a non-invocable value.
    pub fn not_callable(value: impl fmt::Display) -> Self {
        Self::NotCallable(value.to_string())
    }

    /// Return the callback if this is [`Handler::Callable`].
    pub fn into_callable(self) -> Option<C> {
        match self {
            Self::Callable(c) => Some(c),
            Self::NotCallable(_) => None,
        }
    }
}
