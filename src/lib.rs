//! # hlp-rs: Hex Layered Program synthesis in Rust
//!
//! **`hlp-rs`** searches for a chain of comparator layers whose composition
//! realizes a target function over the 16 hex signal strengths.
//! It models a layered signal-processing contraption: each layer is one
//! physical unit built from two comparators, and a solution says how many
//! units, in which configuration, reproduce a desired transformation.
//!
//! ## What is a hex layered program?
//!
//! A total function from the 16 signal strengths to the 16 signal strengths,
//! packed into a single `u64` (one output nibble per input). A **layer** is
//! the special case produced by wiring two comparators together and taking
//! the larger output. Chaining layers composes their functions, so program
//! synthesis becomes a search through compositions.
//!
//! ## Key Features
//!
//! - **Compact encoding**: [`HexFunction`][crate::function::HexFunction] packs
//!   a whole function into one `u64`; composition and analysis run on the
//!   packed form with shifts and masks.
//! - **Exhaustive layer generation**: [`LayerTable`][crate::table::LayerTable]
//!   enumerates all 1024 comparator setups, deduplicates them, and buckets
//!   them by how many unique outputs they remove.
//! - **Sound pruning**: composition only coarsens the partition of inputs by
//!   output-equivalence, so merged-but-distinct pairs cut whole subtrees.
//! - **Bounded search**: a classic recursive DFS with backtracking, bounded
//!   solely by the caller's depth limit. First solution wins.
//!
//! ## Basic Usage
//!
//! ```rust
//! use hlp_rs::function::HexFunction;
//! use hlp_rs::solver::{solve, SearchResult};
//!
//! // A target function: 16 hex digits, output for input 0 in the lowest nibble.
//! let target: HexFunction = "fedcba9876543210".parse().unwrap();
//!
//! match solve(target, 3) {
//!     SearchResult::Found(chain) => {
//!         // The identity needs no layers at all.
//!         assert!(chain.is_empty());
//!     }
//!     SearchResult::NotFound { max_depth } => {
//!         println!("No solution found in depth {}. Sorry!", max_depth);
//!     }
//! }
//! ```
//!
//! ## Core Components
//!
//! - **[`function`]**: the packed function encoding, composition, and the
//!   reachability test.
//! - **[`table`]**: generation of all distinct one-layer functions.
//! - **[`solver`]**: the depth-bounded DFS over layer chains.

pub mod comparator;
pub mod function;
pub mod layer;
pub mod solver;
pub mod table;
pub mod types;
