//! Output formatting
//!
//! The text format in [`text`] is the only interface to the downstream
//! clustering kernel.

pub mod text;
