use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    #[strum(serialize = "OPEN")]
    Open,
    #[strum(serialize = "SPARE")]
    Spare,
    #[strum(serialize = "STRIKE")]
    Strike,
    /// Final frame with bonus rolls
    #[strum(serialize = "FILL")]
    Fill,
}

impl FrameKind {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Whether a frame of this kind waits on later rolls before it is scored
    pub fn awaits_bonus(&self) -> bool {
        matches!(self, Self::Strike | Self::Spare)
    }
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
