use crate::{InferError, Outputs, Session, stats};
use base::Tensor;
use std::time::Instant;

pub const DEFAULT_ITERATIONS: usize = 200;

/// What a timed run hands back: the first output tensor of the final
/// inference call and that call's elapsed time in milliseconds.
#[derive(Debug)]
pub struct BenchmarkResult {
    pub output: Tensor<f32>,
    pub elapsed_ms: f64,
}

/// Benchmark one session with a fixed input.
///
/// Runs `iterations + 1` timed inference calls, strictly sequential. The
/// first sample is discarded as residual first-call overhead, and the mean
/// and sample standard deviation of the remaining `iterations` samples are
/// logged. One more call is then made; its first output and duration are
/// returned. All timing uses the monotonic clock.
///
/// `iterations` should be at least 2; below that the logged standard
/// deviation is NaN (see `stats::std_dev`).
///
/// Any engine failure aborts the run and reaches the caller as
/// `InferError::Benchmark` wrapping the original failure; no partial
/// statistics are produced. There are no retries and no per-call timeout.
pub async fn run<S: Session>(
    session: &mut S,
    input: &Tensor<f32>,
    iterations: usize,
) -> Result<BenchmarkResult, InferError> {
    let total = iterations + 1;
    let inputs = std::slice::from_ref(input);
    let mut samples = Vec::with_capacity(total);

    for i in 0..total {
        let start = Instant::now();
        timed_call(session, inputs, i).await?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        samples.push(elapsed_ms);
        log::info!("iteration {}/{}: {:.2} ms", i + 1, total, elapsed_ms);
    }

    // The call at index 0 absorbs any first-call overhead the separate
    // warm-up pass did not catch.
    let samples = &samples[1..];
    log::info!(
        "inference time: {:.2} +/- {:.2} ms over {} samples",
        stats::mean(samples),
        stats::std_dev(samples),
        samples.len()
    );

    let start = Instant::now();
    let outputs = timed_call(session, inputs, total).await?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let (name, output) = outputs
        .into_iter()
        .next()
        .ok_or_else(|| InferError::Engine("engine returned no outputs".to_string()))?;
    log::debug!("returning output '{}' with shape {:?}", name, output.shape);

    Ok(BenchmarkResult { output, elapsed_ms })
}

/// `run` with the default iteration count of 200.
pub async fn run_default<S: Session>(
    session: &mut S,
    input: &Tensor<f32>,
) -> Result<BenchmarkResult, InferError> {
    run(session, input, DEFAULT_ITERATIONS).await
}

async fn timed_call<S: Session>(
    session: &mut S,
    inputs: &[Tensor<f32>],
    call: usize,
) -> Result<Outputs, InferError> {
    match session.run(inputs).await {
        Ok(outputs) => Ok(outputs),
        Err(cause) => {
            log::error!("benchmark call {} failed: {}", call, cause);
            Err(InferError::Benchmark {
                iteration: call,
                cause: Box::new(cause),
            })
        }
    }
}
