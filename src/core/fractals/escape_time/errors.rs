use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum EscapeTimeError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}
