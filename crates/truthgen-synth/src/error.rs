use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("identifier is empty or whitespace-only")]
    InvalidIdentifier,
}
