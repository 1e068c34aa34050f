/// Simplified error system for the chart application.
///
/// The store, reducers and transition engines are infallible; errors only
/// appear at the edges (data loading, configuration, DOM handles).
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    DataError(String),
    ValidationError(String),
    RenderingError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DataError(msg) => write!(f, "Data Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DataError(err.to_string())
    }
}

pub type DataResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
