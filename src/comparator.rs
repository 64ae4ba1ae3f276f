//! The comparator primitive.
//!
//! A comparator takes a back signal and a side signal and emits a signal
//! depending on its mode. Two comparators combined by `max` make up one
//! [`Layer`][crate::layer::Layer].

use crate::types::Ss;

/// Operating mode of a comparator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ComparatorMode {
    /// Pass the back signal through unchanged (unless overpowered).
    Compare,
    /// Subtract the side signal from the back signal.
    Subtract,
}

impl ComparatorMode {
    /// Both modes, in enumeration order.
    pub const BOTH: [ComparatorMode; 2] = [ComparatorMode::Compare, ComparatorMode::Subtract];
}

/// Computes a single comparator operation.
///
/// Returns zero when the side signal overpowers the back signal. Otherwise
/// the back signal passes through, reduced by the side signal in
/// [`Subtract`][ComparatorMode::Subtract] mode.
pub fn comparator(back: Ss, side: Ss, mode: ComparatorMode) -> Ss {
    if side > back {
        return Ss::ZERO;
    }
    match mode {
        ComparatorMode::Compare => back,
        ComparatorMode::Subtract => Ss::new(back.get() - side.get()),
    }
}
