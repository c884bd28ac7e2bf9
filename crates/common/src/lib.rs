pub mod api;
pub mod config;
pub mod error;
pub mod ids;
pub mod types;

pub use error::{ArgusError, Result};
pub use ids::AnalysisId;
