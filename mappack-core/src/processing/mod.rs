//! Export orchestration.

pub mod export;

pub use export::run_export;
