use base::TensorError;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    Shape(String),
    ModelLoad(String),
    /// Failure reported by the engine for a single inference call.
    Engine(String),
    /// A timed benchmark run aborted. `iteration` is the zero-based index
    /// of the engine call that failed; the original failure is kept as
    /// `cause` so callers can still see what went wrong.
    Benchmark {
        iteration: usize,
        cause: Box<InferError>,
    },
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Engine(msg) => write!(f, "engine error: {msg}"),
            InferError::Benchmark { iteration, cause } => {
                write!(f, "benchmark failed at call {iteration}: {cause}")
            }
        }
    }
}

impl std::error::Error for InferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InferError::Benchmark { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<TensorError> for InferError {
    fn from(err: TensorError) -> Self {
        InferError::Shape(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InferError>;
