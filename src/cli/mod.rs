//! Command-line interface.
//!
//! Argument definitions and command handlers for the `pagesmith` binary.

pub mod args;
pub mod commands;
