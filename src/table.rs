//! The layer table: every distinct one-layer function, bucketed by score.
//!
//! The table is built once per search by enumerating all 1024 comparator
//! setups (16 side constants x 16 back constants x 2 x 2 modes), discarding
//! the constant-zero and identity functions, and deduplicating by packed
//! encoding. Buckets are indexed by the unique-outputs-removed score and
//! keep their layers in enumeration order, so a search over the same table
//! is reproducible.

use std::collections::HashSet;

use log::debug;

use crate::comparator::ComparatorMode;
use crate::function::HexFunction;
use crate::layer::Layer;
use crate::types::Ss;

/// Number of score buckets (scores `0..=15`).
pub const NUM_SCORES: usize = 16;

/// All distinct non-trivial one-layer functions, grouped by score.
///
/// Read-only after construction. Owned by one search invocation at a time.
pub struct LayerTable {
    buckets: [Vec<Layer>; NUM_SCORES],
}

impl LayerTable {
    /// Enumerates all comparator setups and buckets the resulting layers.
    ///
    /// Enumeration order: side constant outermost, then back constant, then
    /// side mode, then back mode. The first setup producing a given packed
    /// function wins; later duplicates are skipped. A score-equal duplicate
    /// necessarily lands in the same bucket, so one set over packed
    /// encodings is enough for the per-bucket distinctness guarantee.
    pub fn generate() -> Self {
        let mut buckets: [Vec<Layer>; NUM_SCORES] = Default::default();
        let mut seen: HashSet<u64> = HashSet::new();

        for side_ss in Ss::all() {
            for back_ss in Ss::all() {
                for side_mode in ComparatorMode::BOTH {
                    for back_mode in ComparatorMode::BOTH {
                        let layer = Layer::new(side_ss, back_ss, side_mode, back_mode);
                        let function = layer.function();
                        if function == HexFunction::ZERO || function == HexFunction::IDENTITY {
                            continue;
                        }
                        if seen.insert(function.bits()) {
                            buckets[layer.score()].push(layer);
                        }
                    }
                }
            }
        }

        debug!(
            "Generated layer table with {} distinct layers",
            buckets.iter().map(Vec::len).sum::<usize>()
        );
        for (score, bucket) in buckets.iter().enumerate() {
            debug!("  score {}: {} layers", score, bucket.len());
        }

        LayerTable { buckets }
    }

    /// Layers removing exactly `score` unique outputs, in enumeration order.
    ///
    /// # Panics
    ///
    /// Panics if `score >= 16`.
    pub fn bucket(&self, score: usize) -> &[Layer] {
        &self.buckets[score]
    }

    /// Total number of distinct layers across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether the table holds no layers at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Iterates over all layers, bucket by bucket in score order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.buckets.iter().flatten()
    }
}
