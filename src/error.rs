use crate::input::InputError;
use crate::pipeline::PipelineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write summary {path}: {source}")]
    Summary {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("summary serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
