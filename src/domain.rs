//! Domain entities

pub mod shortcut;
