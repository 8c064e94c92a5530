// Library exports for the Run Coach CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod storage;
