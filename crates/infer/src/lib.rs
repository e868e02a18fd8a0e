pub mod backend;
pub mod backends;
pub mod benchmark;
pub mod device;
pub mod error;
pub mod modelsource;
pub mod provision;
pub mod session;
pub mod stats;
pub mod warmup;

pub use backend::Backend;
pub use backends::{OnnxBackend, OnnxSession};
pub use benchmark::{BenchmarkResult, DEFAULT_ITERATIONS};
pub use device::Device;
pub use error::{InferError, Result};
pub use modelsource::ModelSource;
pub use provision::ensure_session;
pub use session::{Outputs, Session};
pub use warmup::warmup;
