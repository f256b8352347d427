use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown plan: {0}")]
    NotFound(String),

    #[error("catalog has no plans")]
    Empty,

    #[error("duplicate plan id: {0}")]
    DuplicateId(String),

    #[error("plan {0} must have a positive credit allotment")]
    ZeroCredits(String),

    #[error("plan {0} has a credit allotment above {max}", max = crate::catalog::MAX_PLAN_CREDITS)]
    CreditsTooLarge(String),

    #[error("default plan {0} is not in the catalog")]
    UnknownDefault(String),

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
