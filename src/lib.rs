// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod corpus;
pub mod generator;
pub mod menu;
pub mod metrics;
pub mod prompt;
pub mod runtime;
pub mod screen;
pub mod session;
pub mod summary;
pub mod theme;
pub mod typing;
