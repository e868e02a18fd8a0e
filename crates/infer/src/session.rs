use crate::InferError;
use base::Tensor;

/// Named output tensors in the engine's declared output order. Kept as a
/// sequence rather than a map so "first output" is well defined.
pub type Outputs = Vec<(String, Tensor<f32>)>;

/// A loaded model bound to one execution backend.
///
/// `run` is one inference call: inputs are positional and are matched to
/// the model's declared input names in order. Calls suspend the caller
/// until the engine settles; the `&mut` receiver makes sequential use a
/// compile-time property.
#[allow(async_fn_in_trait)]
pub trait Session {
    async fn run(&mut self, inputs: &[Tensor<f32>]) -> Result<Outputs, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}
