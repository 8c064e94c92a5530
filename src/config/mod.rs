// Runtime configuration

pub mod app;

pub use app::AppConfig;
