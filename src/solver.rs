//! Depth-bounded depth-first search for a layer chain.
//!
//! The solver starts from the identity function and tries to reach a target
//! function by composing one layer at a time, backtracking on failure. Two
//! cuts keep the search tractable:
//!
//! - the merge-based reachability test of
//!   [`HexFunction::can_reach`][crate::function::HexFunction::can_reach],
//!   applied at every node, and
//! - a unique-output margin: the target can afford to lose at most
//!   `16 - unique_output_count(target)` unique outputs in total, so bucket
//!   scores are spent against that budget, cheapest first.
//!
//! The first chain found wins; it is not necessarily the shortest. Absence
//! of a chain within the depth bound is a normal outcome, not an error.
//!
//! # Example
//!
//! ```
//! use hlp_rs::function::HexFunction;
//! use hlp_rs::solver::{solve, SearchResult};
//!
//! // The identity is realized by the empty chain.
//! match solve(HexFunction::IDENTITY, 1) {
//!     SearchResult::Found(chain) => assert!(chain.is_empty()),
//!     SearchResult::NotFound { .. } => unreachable!(),
//! }
//! ```

use std::fmt;

use log::debug;

use crate::function::HexFunction;
use crate::layer::Layer;
use crate::table::LayerTable;

/// Outcome of a chain search.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SearchResult {
    /// A chain realizing the target, first layer applied first.
    Found(Vec<Layer>),
    /// No chain of at most `max_depth` layers realizes the target.
    NotFound {
        /// The depth bound the search was given.
        max_depth: usize,
    },
}

impl SearchResult {
    /// Whether a chain was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    /// The chain, if one was found.
    pub fn chain(&self) -> Option<&[Layer]> {
        match self {
            SearchResult::Found(chain) => Some(chain),
            SearchResult::NotFound { .. } => None,
        }
    }
}

impl fmt::Display for SearchResult {
    /// One layer per line in lowercase hex, in application order; or the
    /// no-solution message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Found(chain) => {
                for layer in chain {
                    writeln!(f, "{}", layer)?;
                }
                Ok(())
            }
            SearchResult::NotFound { max_depth } => {
                write!(f, "No solution found in depth {}. Sorry!", max_depth)
            }
        }
    }
}

/// Searches for a chain of at most `max_depth` layers realizing `target`.
///
/// Builds a fresh [`LayerTable`] for this invocation; use
/// [`solve_with`] to share a table across searches.
pub fn solve(target: HexFunction, max_depth: usize) -> SearchResult {
    let table = LayerTable::generate();
    solve_with(&table, target, max_depth)
}

/// Searches for a chain using an already generated layer table.
///
/// The search is single-threaded, purely synchronous, and keeps no state
/// across invocations; the depth bound is the sole safety valve against
/// runaway search.
pub fn solve_with(table: &LayerTable, target: HexFunction, max_depth: usize) -> SearchResult {
    let margin = (16 - target.unique_output_count()) as usize;
    debug!("Solving for {} with max_depth {} (margin {})", target, max_depth, margin);

    let mut ctx = SearchContext {
        table,
        target,
        stack: Vec::with_capacity(max_depth),
    };

    if ctx.dfs(HexFunction::IDENTITY, margin, 0, max_depth) {
        debug!("Found a chain of {} layers", ctx.stack.len());
        SearchResult::Found(ctx.stack)
    } else {
        debug!("No chain of at most {} layers", max_depth);
        SearchResult::NotFound { max_depth }
    }
}

/// Mutable state of one search invocation.
struct SearchContext<'a> {
    table: &'a LayerTable,
    target: HexFunction,
    stack: Vec<Layer>,
}

impl SearchContext<'_> {
    /// Returns `true` when a chain was found; the chain is then in `stack`.
    ///
    /// `depth` is the number of layers applied so far, `margin` the
    /// remaining unique-output budget.
    fn dfs(&mut self, current: HexFunction, margin: usize, depth: usize, max_depth: usize) -> bool {
        if current == self.target {
            return true;
        }
        if depth == max_depth {
            return false;
        }
        if !current.can_reach(self.target) {
            return false;
        }

        for score in 0..=margin {
            for &layer in self.table.bucket(score) {
                let next = current.compose(layer.function());
                self.stack.push(layer);
                if self.dfs(next, margin - score, depth + 1, max_depth) {
                    return true;
                }
                self.stack.pop();
            }
        }
        false
    }
}
