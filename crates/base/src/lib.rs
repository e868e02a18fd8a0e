pub mod logging;
pub use logging::*;

mod tensor;
pub use tensor::*;
