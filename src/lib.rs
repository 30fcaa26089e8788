pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod inputs;
pub mod model;
pub mod presets;
pub mod projections;
pub mod query;
// cmd and reports are binary modules, declared in main.rs.

pub use engine::Calculator;
pub use error::{CalcError, CalcResult};
pub use inputs::{InputKey, InputSet};
pub use presets::KnownPreset;
