pub mod app;
pub mod eval;
pub mod events;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod placeholder;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
