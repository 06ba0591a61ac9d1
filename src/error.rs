use thiserror::Error;

/// Errors raised while loading maps and configuration or writing output.
///
/// Route search itself never fails: a missing identifier or a disconnected map is a
/// regular `RouteOutcome`.
#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("location `{0}` is defined more than once")]
    DuplicateLocation(String),

    #[error("unknown location `{0}`")]
    UnknownLocation(String),

    #[error("unknown search strategy `{0}`")]
    UnknownStrategy(String),

    #[error("rendering failed: {0}")]
    Render(String),
}
