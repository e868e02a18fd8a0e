use crate::{Backend, Device, InferError, ModelSource, Outputs, Session};
use base::Tensor;
use ndarray::ArrayD;
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use std::sync::OnceLock;

static ORT_INIT: OnceLock<()> = OnceLock::new();

fn ensure_ort_init() {
    ORT_INIT.get_or_init(|| {
        let _ = ort::init().commit();
    });
}

/// ONNX Runtime backend. CPU by default; the CUDA execution provider is
/// available behind the `cuda` cargo feature.
pub struct OnnxBackend;

impl Backend for OnnxBackend {
    type Session = OnnxSession;

    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(&self, model: ModelSource, device: Device) -> Result<OnnxSession, InferError> {
        ensure_ort_init();
        let builder = OrtSession::builder().map_err(|e| {
            InferError::ModelLoad(format!("failed to create session builder: {}", e))
        })?;

        let mut builder = match &device {
            Device::Cpu => builder
                .with_execution_providers([
                    ort::execution_providers::CPUExecutionProvider::default().build(),
                ])
                .map_err(|e| {
                    InferError::ModelLoad(format!("failed to configure CPU provider: {}", e))
                })?,
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => builder
                .with_execution_providers([
                    ort::execution_providers::CUDAExecutionProvider::default()
                        .with_device_id(*device_id)
                        .build(),
                    ort::execution_providers::CPUExecutionProvider::default().build(),
                ])
                .map_err(|e| {
                    InferError::ModelLoad(format!("failed to configure CUDA provider: {}", e))
                })?,
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::ModelLoad("CUDA feature not enabled".to_string()));
            }
        };

        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(&path).map_err(|e| {
                InferError::ModelLoad(format!(
                    "failed to load model from {}: {}",
                    path.display(),
                    e
                ))
            })?,
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from memory: {}", e))
            })?,
        };

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();

        log::info!(
            "loaded onnx model on {} (inputs: {:?}, outputs: {:?})",
            device,
            input_names,
            output_names
        );

        Ok(OnnxSession {
            session,
            input_names,
            output_names,
        })
    }
}

pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Session for OnnxSession {
    async fn run(&mut self, inputs: &[Tensor<f32>]) -> Result<Outputs, InferError> {
        if inputs.len() != self.input_names.len() {
            return Err(InferError::Shape(format!(
                "model expects {} inputs, got {}",
                self.input_names.len(),
                inputs.len()
            )));
        }

        // The blocking ort call runs inline on the current task so that
        // per-call timings measure the call itself, not a task handoff.
        let outputs = match inputs {
            [input] => {
                let array = tensor_to_ndarray(input.clone())?;
                let tensor_ref = TensorRef::from_array_view(array.view()).map_err(|e| {
                    InferError::Engine(format!("failed to create tensor ref: {}", e))
                })?;
                let name = self.input_names[0].as_str();
                self.session
                    .run(inputs![name => tensor_ref])
                    .map_err(|e| InferError::Engine(format!("inference failed: {}", e)))?
            }
            [first, second] => {
                let array1 = tensor_to_ndarray(first.clone())?;
                let array2 = tensor_to_ndarray(second.clone())?;
                let tensor_ref1 = TensorRef::from_array_view(array1.view()).map_err(|e| {
                    InferError::Engine(format!("failed to create tensor ref 1: {}", e))
                })?;
                let tensor_ref2 = TensorRef::from_array_view(array2.view()).map_err(|e| {
                    InferError::Engine(format!("failed to create tensor ref 2: {}", e))
                })?;
                let name1 = self.input_names[0].as_str();
                let name2 = self.input_names[1].as_str();
                self.session
                    .run(inputs![name1 => tensor_ref1, name2 => tensor_ref2])
                    .map_err(|e| InferError::Engine(format!("inference failed: {}", e)))?
            }
            _ => {
                return Err(InferError::Engine(
                    "only 1-2 inputs supported currently".to_string(),
                ));
            }
        };

        // Outputs come back in the model's declared order.
        let mut result = Outputs::with_capacity(self.output_names.len());
        for output_name in &self.output_names {
            let value = &outputs[output_name.as_str()];
            let array = value.try_extract_array::<f32>().map_err(|e| {
                InferError::Engine(format!("output '{}' is not f32: {}", output_name, e))
            })?;
            result.push((output_name.clone(), ndarray_to_tensor(array)?));
        }

        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data)
        .map_err(|e| InferError::Engine(format!("failed to create ndarray from tensor: {}", e)))
}

fn ndarray_to_tensor(
    array: ndarray::ArrayView<'_, f32, ndarray::IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Tensor::new(shape, data).map_err(InferError::from)
}
