//! Deliberation domain
//!
//! The proposal under debate ([`DebateContext`]) and the statements agents
//! make about it ([`DebateEntry`]).
//!
//! ```text
//! Idle ──▶ Debating(round 1..N) ──▶ Voting ──▶ Resolved{approved|rejected|deadlocked}
//!               ▲                                     │
//!               └──────────── deadlocked ─────────────┘  (caller policy)
//! ```

pub mod context;
pub mod entry;

pub use context::{ActionType, DebateContext};
pub use entry::{DebateEntry, SimulationResult};
