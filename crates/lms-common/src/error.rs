use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CoreError {
    pub fn learner_not_found(id: i64) -> Self {
        CoreError::NotFound {
            entity: "learner",
            id,
        }
    }

    pub fn course_not_found(id: i64) -> Self {
        CoreError::NotFound {
            entity: "course",
            id,
        }
    }
}
