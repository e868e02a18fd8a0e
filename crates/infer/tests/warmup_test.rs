use base::Tensor;
use infer::{InferError, Outputs, Session, benchmark, warmup};
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

static LOGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LOGS.lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

fn init_capture() {
    static LOGGER: CaptureLogger = CaptureLogger;
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

fn logged(needle: &str) -> bool {
    LOGS.lock().unwrap().iter().any(|line| line.contains(needle))
}

/// Engine stub that records every input shape it sees and optionally
/// rejects every call.
struct RecordingSession {
    calls: usize,
    seen: Vec<Tensor<f32>>,
    always_fail: bool,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl RecordingSession {
    fn new(always_fail: bool) -> Self {
        Self {
            calls: 0,
            seen: Vec::new(),
            always_fail,
            input_names: vec!["input".to_string()],
            output_names: vec!["output".to_string()],
        }
    }
}

impl Session for RecordingSession {
    async fn run(&mut self, inputs: &[Tensor<f32>]) -> Result<Outputs, InferError> {
        self.calls += 1;
        self.seen.extend(inputs.iter().cloned());
        if self.always_fail {
            return Err(InferError::Engine("engine not ready".to_string()));
        }
        Ok(vec![("output".to_string(), inputs[0].clone())])
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

#[tokio::test]
async fn test_warmup_sends_one_randomized_tensor() {
    init_capture();
    let mut session = RecordingSession::new(false);

    warmup(&mut session, &[2, 3]).await;

    assert_eq!(session.calls, 1);
    let sent = &session.seen[0];
    assert_eq!(sent.shape, vec![2, 3]);
    assert_eq!(sent.len(), 6);
    for &value in &sent.data {
        assert!((-1.0..1.0).contains(&value), "value {value} out of range");
    }
}

#[tokio::test]
async fn test_warmup_swallows_engine_failure() {
    init_capture();
    let mut session = RecordingSession::new(true);

    // Must resolve normally even though every engine call rejects.
    warmup(&mut session, &[1, 4]).await;

    assert_eq!(session.calls, 1);
    assert!(logged("warm-up call failed"), "failure must be logged");
}

#[tokio::test]
async fn test_warmup_skips_degenerate_shapes() {
    init_capture();
    let mut session = RecordingSession::new(false);

    warmup(&mut session, &[]).await;
    warmup(&mut session, &[2, 0, 3]).await;

    assert_eq!(session.calls, 0, "degenerate shapes never reach the engine");
    assert!(logged("skipping warm-up"));
}

#[tokio::test]
async fn test_benchmark_emits_progress_and_summary_observations() {
    init_capture();
    let mut session = RecordingSession::new(false);
    let input = Tensor::new(vec![1], vec![0.5]).unwrap();

    benchmark::run(&mut session, &input, 3).await.unwrap();

    // 3 + 1 timed iterations, summarized over 3 samples after the first
    // is discarded.
    assert!(logged("iteration 4/4"));
    assert!(logged("over 3 samples"));
}
