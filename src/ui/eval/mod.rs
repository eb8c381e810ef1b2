//! State machine for one evaluation round trip.
//!
//! The display occupies exactly one of four states at any time; every
//! submission ends in exactly one of {validation error, success, error}.

mod intent;
mod reducer;
mod state;

pub use intent::EvalIntent;
pub use reducer::EvalReducer;
pub use state::{EvalDisplayState, EMPTY_INPUT_MESSAGE};
