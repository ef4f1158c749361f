//! Turn rules.
//!
//! [`TurnEngine`] is the only code that moves tokens. It contains no
//! randomness: rolls are handed in, so every turn is reproducible from the
//! roll sequence alone.

pub mod engine;

pub use engine::{TurnEngine, TurnOutcome, TurnProgress, TurnResult};
