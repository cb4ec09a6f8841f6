use thiserror::Error;

use crate::ai::AiError;
use crate::config::ConfigError;
use crate::errors::domain::DomainError;

/// Top-level error returned to the host application.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("AI error: {0}")]
    Ai(#[from] AiError),
    #[error("No active session")]
    NoActiveSession,
}

impl EngineError {
    /// Stable machine-readable code for host-side logging and telemetry.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Config(_) => "CONFIG_INVALID",
            EngineError::Domain(DomainError::Rejected(_)) => "OPERATION_REJECTED",
            EngineError::Domain(DomainError::Validation(_)) => "VALIDATION",
            EngineError::Domain(DomainError::Corrupted(_)) => "SESSION_CORRUPTED",
            EngineError::Ai(_) => "AI_FAILURE",
            EngineError::NoActiveSession => "NO_ACTIVE_SESSION",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::Domain(DomainError::Corrupted(_)))
    }
}
