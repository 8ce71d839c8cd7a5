// Command handlers module
// This module contains all CLI command implementations

pub mod add;
pub mod check;
pub mod common;
pub mod completion;
pub mod delete;
pub mod goto;
pub mod list;
pub mod shell_init;
pub mod update;
