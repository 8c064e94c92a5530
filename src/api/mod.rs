// HTTP routes and handlers

pub mod coaching;
pub mod health;
pub mod routes;
