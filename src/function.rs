//! Packed encoding of total functions over the 16 signal strengths.
//!
//! A [`HexFunction`] packs the 16 nibble-sized outputs of a total function
//! `f: Ss -> Ss` into a single `u64`: the output for input `i` occupies bits
//! `[4i, 4i+3]`. The encoding is total and deterministic, so two functions
//! are equal exactly when their packed values are equal.
//!
//! # Example
//!
//! ```
//! use hlp_rs::function::HexFunction;
//! use hlp_rs::types::Ss;
//!
//! let id = HexFunction::IDENTITY;
//! assert_eq!(id.get(Ss::new(7)), Ss::new(7));
//! assert_eq!(id.unique_output_count(), 16);
//!
//! // Composition with the identity is a no-op.
//! let f = HexFunction::from_bits(0x123456789abcdef0);
//! assert_eq!(id.compose(f), f);
//! assert_eq!(f.compose(id), f);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::types::Ss;

/// A total function from signal strengths to signal strengths, packed into
/// one `u64` (one nibble of output per input).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct HexFunction(u64);

impl HexFunction {
    /// The constant-zero function. Every input maps to signal strength 0.
    pub const ZERO: Self = HexFunction(0);

    /// The identity function: every input maps to itself.
    pub const IDENTITY: Self = HexFunction(0xFEDC_BA98_7654_3210);

    /// Wraps a raw packed encoding.
    ///
    /// Every `u64` is a well-formed encoding (each nibble is an output in
    /// `0..=15` by construction), so this cannot fail.
    pub const fn from_bits(bits: u64) -> Self {
        HexFunction(bits)
    }

    /// Returns the raw packed encoding.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns the output for the given input.
    pub fn get(self, input: Ss) -> Ss {
        Ss::new(((self.0 >> (4 * input.get())) & 0xF) as u8)
    }

    /// Expands the packed encoding into 16 explicit outputs, indexed by input.
    pub fn decode(self) -> [u8; 16] {
        let mut outputs = [0u8; 16];
        for (ss, out) in outputs.iter_mut().enumerate() {
            *out = ((self.0 >> (4 * ss)) & 0xF) as u8;
        }
        outputs
    }

    /// Packs 16 explicit outputs into the encoded form. Inverse of [`decode`][Self::decode].
    ///
    /// Each output must already be in `0..=15`; this is a caller contract,
    /// checked only by a debug assertion.
    pub fn encode(outputs: [u8; 16]) -> Self {
        let mut bits = 0u64;
        for (ss, &out) in outputs.iter().enumerate() {
            debug_assert!(out <= 15, "Output nibble out of range");
            bits |= (out as u64) << (4 * ss);
        }
        HexFunction(bits)
    }

    /// Counts how many of the 16 possible outputs actually appear.
    ///
    /// The identity has 16 unique outputs; the constant-zero function has 1.
    pub fn unique_output_count(self) -> u32 {
        let mut seen = 0u16;
        let mut bits = self.0;
        for _ in 0..16 {
            seen |= 1 << (bits & 0xF);
            bits >>= 4;
        }
        seen.count_ones()
    }

    /// Composes two functions: apply `self` first, then `then`.
    ///
    /// Works directly on the packed encodings; no intermediate arrays.
    pub fn compose(self, then: Self) -> Self {
        let mut bits = 0u64;
        for b in (0..64).step_by(4) {
            let mid = (self.0 >> b) & 0xF;
            bits |= ((then.0 >> (4 * mid)) & 0xF) << b;
        }
        HexFunction(bits)
    }

    /// Checks whether `desired` is still reachable from `self` by appending
    /// further layers.
    ///
    /// Composition can only coarsen the partition of inputs by
    /// output-equivalence: once two inputs map to the same signal, no later
    /// layer can tell them apart again. So if `self` has merged a pair of
    /// inputs that `desired` keeps distinct, no continuation can succeed.
    /// Every unordered pair is compared once.
    ///
    /// This is a sound cut, not a heuristic: a `false` here means the whole
    /// subtree is dead.
    pub fn can_reach(self, desired: Self) -> bool {
        for x in (0..64).step_by(4) {
            for y in (x..64).step_by(4) {
                if (self.0 >> x) & 0xF == (self.0 >> y) & 0xF
                    && (desired.0 >> x) & 0xF != (desired.0 >> y) & 0xF
                {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for HexFunction {
    /// Lowercase hex, no leading `0x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::LowerHex for HexFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Error returned when parsing a [`HexFunction`] from a hex string fails.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseFunctionError(std::num::ParseIntError);

impl fmt::Display for ParseFunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex function: {}", self.0)
    }
}

impl std::error::Error for ParseFunctionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for HexFunction {
    type Err = ParseFunctionError;

    /// Parses up to 16 hex digits, with an optional `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        u64::from_str_radix(digits, 16).map(HexFunction).map_err(ParseFunctionError)
    }
}
