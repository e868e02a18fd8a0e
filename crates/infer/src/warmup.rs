use crate::Session;
use base::{Tensor, element_count};
use rand::Rng;

/// Prime the engine with one synthetic inference call.
///
/// The input is a tensor of shape `dims` filled with values drawn
/// uniformly from [-1.0, 1.0); its output is discarded. Warm-up is best
/// effort: engine failures are logged and swallowed, so this never fails
/// outward even when the shape does not match what the model expects.
pub async fn warmup<S: Session>(session: &mut S, dims: &[usize]) {
    let size = match element_count(dims) {
        Ok(size) => size,
        Err(err) => {
            log::warn!("skipping warm-up: bad input shape {:?}: {}", dims, err);
            return;
        }
    };
    if dims.is_empty() || size == 0 {
        log::warn!("skipping warm-up: degenerate input shape {:?}", dims);
        return;
    }

    let mut rng = rand::thread_rng();
    let input = Tensor {
        shape: dims.to_vec(),
        data: (0..size).map(|_| rng.gen_range(-1.0f32..1.0)).collect(),
    };

    if let Err(err) = session.run(std::slice::from_ref(&input)).await {
        log::error!("warm-up call failed (ignored): {}", err);
    }
}
