//! One-layer functions built from two comparators.
//!
//! A layer is one physical unit of the signal chain: a back comparator fed
//! the layer input on its side, and a side comparator fed the layer input on
//! its back, combined by taking the larger output. A [`Layer`] keeps both
//! its packed function and the four construction parameters it was built
//! from.

use std::fmt;

use crate::comparator::{comparator, ComparatorMode};
use crate::function::HexFunction;
use crate::types::Ss;

/// A one-layer function, tagged with its comparator setup.
///
/// Structurally a layer is just a [`HexFunction`]; it is only ever produced
/// by [`Layer::new`], never assembled by hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Layer {
    function: HexFunction,
    side_ss: Ss,
    back_ss: Ss,
    side_mode: ComparatorMode,
    back_mode: ComparatorMode,
}

impl Layer {
    /// Builds the one-layer function for the given comparator setup.
    ///
    /// For every input `ss`, the layer output is
    /// `max(comparator(back_ss, ss, back_mode), comparator(ss, side_ss, side_mode))`:
    /// the back comparator holds the constant `back_ss` and receives the
    /// input on its side, the side comparator receives the input on its back
    /// and holds the constant `side_ss`.
    pub fn new(side_ss: Ss, back_ss: Ss, side_mode: ComparatorMode, back_mode: ComparatorMode) -> Self {
        let mut outputs = [0u8; 16];
        for ss in Ss::all() {
            let back_out = comparator(back_ss, ss, back_mode);
            let side_out = comparator(ss, side_ss, side_mode);
            outputs[usize::from(ss)] = back_out.max(side_out).get();
        }
        Layer {
            function: HexFunction::encode(outputs),
            side_ss,
            back_ss,
            side_mode,
            back_mode,
        }
    }

    /// The packed function this layer computes.
    pub fn function(self) -> HexFunction {
        self.function
    }

    /// Constant signal on the side comparator.
    pub fn side_ss(self) -> Ss {
        self.side_ss
    }

    /// Constant signal on the back comparator.
    pub fn back_ss(self) -> Ss {
        self.back_ss
    }

    /// Mode of the side comparator.
    pub fn side_mode(self) -> ComparatorMode {
        self.side_mode
    }

    /// Mode of the back comparator.
    pub fn back_mode(self) -> ComparatorMode {
        self.back_mode
    }

    /// How many unique outputs this layer removes: `16 - unique_output_count`.
    ///
    /// A score of 0 means the layer is a bijection.
    pub fn score(self) -> usize {
        16 - self.function.unique_output_count() as usize
    }
}

impl fmt::Display for Layer {
    /// Lowercase hex of the packed function, no leading `0x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.function, f)
    }
}
