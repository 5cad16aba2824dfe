//! # Framework Errors
//!
//! Failures of the actor plumbing itself, plus a boxed slot that carries an
//! entity's own error back to the caller.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity error for transport through the framework.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the concrete entity error, handing back anything else unchanged.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(concrete) => Ok(*concrete),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of beans")]
    struct OutOfBeans;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn entity_error_round_trips_through_the_box() {
        let err = FrameworkError::entity(OutOfBeans);
        assert_eq!(err.to_string(), "Entity error: out of beans");
        assert_eq!(err.into_entity_error::<OutOfBeans>().unwrap(), OutOfBeans);
    }

    #[test]
    fn wrong_type_is_handed_back() {
        let err = FrameworkError::entity(Other);
        let back = err.into_entity_error::<OutOfBeans>().unwrap_err();
        assert!(matches!(back, FrameworkError::EntityError(_)));

        let closed = FrameworkError::ActorClosed.into_entity_error::<OutOfBeans>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
