use crate::{Device, InferError, ModelSource, Session};

/// An inference engine that can load models into sessions.
pub trait Backend {
    type Session: Session;

    fn name(&self) -> &str;

    fn load_model(
        &self,
        model: ModelSource,
        device: Device,
    ) -> Result<Self::Session, InferError>;
}
