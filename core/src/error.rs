use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Slot count must be at least 1, got {0}")]
    InvalidSlotCount(u32),

    #[error("Paycheck amount must be non-negative, got {0}")]
    NegativePaycheck(f64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
