// Export modules for testing
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod service;
pub mod storage;

// Command modules
pub mod commands;

// Domain modules
pub mod domain;
