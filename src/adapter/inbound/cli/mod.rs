//! CLI module graph.

pub mod command;
pub mod config;
pub mod network;
pub mod operator;
pub mod output;
pub mod paths;
pub mod quote;
pub mod swap;
pub mod wallet;
