//! # Runtime Errors
//!
//! Errors raised by the runtime itself, as opposed to the resource's own error type,
//! which travels boxed inside [`FrameworkError::ResourceError`].

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Actor failed to start: {0}")]
    StartupFailed(String),
    #[error("Resource error: {0}")]
    ResourceError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the resource's typed error, if that is what this is.
    ///
    /// Returns the original error unchanged when it is a runtime failure or a resource
    /// error of some other type.
    pub fn downcast_resource<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::ResourceError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::ResourceError(other)),
            },
            other => Err(other),
        }
    }
}
