//! Chat-facing command layer: parsing, dispatch, duel consent bookkeeping,
//! and the local console front-end.

pub mod commands;
pub mod console;
pub mod dispatch;
pub mod duels;

pub use commands::Command;
pub use dispatch::{CommandRequest, Dispatcher};
