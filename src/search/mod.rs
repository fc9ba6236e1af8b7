//! Move search: depth-limited minimax with alpha-beta pruning.
//!
//! The search is a pure CPU-bound recursion over immutable [`Game`]
//! snapshots; it performs no I/O and mutates nothing. Hosts that need it off
//! the interactive thread run it behind their own execution boundary: since
//! snapshots are only read, an in-flight search can be abandoned (worker or
//! thread teardown) without corrupting engine state, and a new request for
//! the same move should supersede, not queue behind, a stale one.
//!
//! [`Game`]: crate::board::Game

pub mod config;
pub mod rng;
pub mod score;
pub mod minimax;

pub use config::SearchConfig;
pub use minimax::{MoveSearch, SuggestedMove};
pub use rng::SearchRng;
pub use score::evaluate;
