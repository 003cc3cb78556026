use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid frame format")]
    InvalidFormat,

    #[error("three rolls only allowed in final frame")]
    FrameLimitExceeded,

    #[error("frame score must not exceed 10 pins")]
    PinCountExceeded,

    #[error("final frame strike or spare needs bonus rolls")]
    MissingBonusRolls,

    #[error("game is already complete")]
    GameComplete,

    #[error("frame limit must be between {min} and {max}, got {actual}")]
    InvalidFrameLimit { min: usize, max: usize, actual: usize },
}

impl Error {
    /// Whether resubmitting a corrected notation for the same frame can succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat
                | Self::FrameLimitExceeded
                | Self::PinCountExceeded
                | Self::MissingBonusRolls
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
