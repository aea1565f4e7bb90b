//! Demo orchestration and process-wide setup.

pub mod demos;
pub mod telemetry;

pub use demos::*;
pub use telemetry::*;
