//! Balance-refresh domain logic: the token catalog, chain tracking,
//! display formatting, and the concurrent refresh engine.
//!
//! Everything here is DOM-free and natively testable; the browser layer in
//! `balances-wasm` is a thin rendering shell around this crate.

pub mod catalog;
pub mod chains;
pub mod format;
pub mod refresh;
pub mod token;
