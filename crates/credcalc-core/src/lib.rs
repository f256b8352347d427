pub mod catalog;
pub mod clamp;
pub mod config;
pub mod consumption;
pub mod error;
pub mod session;
pub mod summary;
pub mod types;

pub use catalog::Catalog;
pub use clamp::{clamp, clamp_value};
pub use consumption::{compute, ConsumptionResult};
pub use error::{CatalogError, Result};
pub use session::Session;
pub use summary::Summary;
pub use types::*;
