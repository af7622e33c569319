// crates/dec-cli/src/commands/mod.rs
//
// Command module declarations for the `dec` CLI.

pub mod args;
pub mod check;
pub mod map;
pub mod vocab;
