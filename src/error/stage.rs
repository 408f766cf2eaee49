//! External build stage errors

use super::ProfileError;

/// Creates a stage failed error
pub fn failed(stage: impl Into<String>, reason: impl Into<String>) -> ProfileError {
    ProfileError::StageFailed {
        stage: stage.into(),
        reason: reason.into(),
    }
}
