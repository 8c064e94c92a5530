// Library exports for the Run Coach decision engine

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::CoachError;
