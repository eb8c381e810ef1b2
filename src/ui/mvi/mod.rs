//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for unidirectional data flow in the UI layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State transitions only happen inside reducers, which keeps the display
//! model a single checkable value rather than a collection of ad-hoc
//! widget contents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
