//! Type-safe wrapper for signal strength values.
//!
//! This module provides a newtype that enforces the `0..=15` range of a hex
//! signal at construction time, preventing out-of-range nibbles from leaking
//! into the packed function encoding.

use std::fmt;

/// A signal strength: one of the 16 discrete states `0..=15`.
///
/// Signal strengths form both the domain and the range of every
/// [`HexFunction`][crate::function::HexFunction].
///
/// # Invariants
///
/// - The wrapped value is always in `0..=15` (it fits in one nibble)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ss(u8);

impl Ss {
    /// The lowest signal strength.
    pub const ZERO: Self = Ss(0);
    /// The highest signal strength.
    pub const MAX: Self = Ss(15);

    /// Creates a new signal strength.
    ///
    /// # Panics
    ///
    /// Panics if `value > 15`.
    pub fn new(value: u8) -> Self {
        assert!(value <= 15, "Signal strength must be in 0..=15");
        Ss(value)
    }

    /// Returns the raw value as a `u8`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterates over all 16 signal strengths in ascending order.
    pub fn all() -> impl Iterator<Item = Ss> {
        (0..16).map(Ss)
    }
}

impl fmt::Display for Ss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Ss> for u8 {
    fn from(ss: Ss) -> Self {
        ss.0
    }
}

impl From<Ss> for usize {
    fn from(ss: Ss) -> Self {
        ss.0 as usize
    }
}
