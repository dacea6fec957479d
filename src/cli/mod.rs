//! Command-line interface: command implementations and output rendering

pub mod commands;
pub mod output;
