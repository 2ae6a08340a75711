use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open listings file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read listings header: {0}")]
    Header(#[from] csv::Error),

    #[error("listings file is missing required column '{0}'")]
    MissingColumn(&'static str),
}
