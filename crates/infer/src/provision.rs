use crate::{Backend, Device, InferError, ModelSource};

/// Ensure a session exists, creating one only when `existing` is `None`.
///
/// Returns the session together with a flag indicating whether this call
/// created it. An existing session is handed back untouched and its device
/// is not checked against `device`; keeping the two consistent is the
/// caller's responsibility. Load failures propagate unchanged.
pub fn ensure_session<B: Backend>(
    backend: &B,
    existing: Option<B::Session>,
    model: ModelSource,
    device: Device,
) -> Result<(B::Session, bool), InferError> {
    if let Some(session) = existing {
        return Ok((session, false));
    }
    let session = backend.load_model(model, device.clone())?;
    log::info!("created {} session on {}", backend.name(), device);
    Ok((session, true))
}
