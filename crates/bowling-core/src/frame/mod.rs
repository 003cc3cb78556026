//! Frame notation and parsed frames.
//!
//! - `Mark` - a single notation token
//! - `Frame` - a validated frame with every roll resolved to a pin count
//! - `FrameKind` - display/serialization label for a frame

mod kind;
mod notation;

pub use kind::*;
pub use notation::*;

use std::str::FromStr;

use crate::config::pins::RACK_SIZE;
use crate::error::{Error, Result};

/// A validated frame.
///
/// Parsing is position independent: whether a `Fill` is allowed, or whether a
/// bare strike is acceptable, depends on the frame index and is decided by
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Strike,
    Spare { first: u8 },
    Open { first: u8, second: u8 },
    /// Three-roll final frame. Pins are listed chronologically.
    Fill { rolls: [u8; 3] },
}

impl Frame {
    /// Parse one frame of notation.
    ///
    /// Accepted shapes:
    /// - `x`, `n,/`, `n,m` (n + m <= 10)
    /// - `x,n,m`, `x,n,/`, `x,x,n`, `x,x,x`, `n,/,m`, `n,/,x`
    pub fn parse(notation: &str) -> Result<Self> {
        use Mark::{Pins, Spare, Strike};

        let marks = tokenize(notation)?;
        match marks.as_slice() {
            [Strike] => Ok(Self::Strike),
            [Pins(first), Spare] => Ok(Self::Spare { first: *first }),
            [Pins(first), Pins(second)] => {
                if first + second > RACK_SIZE {
                    return Err(Error::PinCountExceeded);
                }
                Ok(Self::Open {
                    first: *first,
                    second: *second,
                })
            }
            [Strike, Strike, Strike] => Ok(Self::fill(RACK_SIZE, RACK_SIZE, RACK_SIZE)),
            [Strike, Strike, Pins(third)] => Ok(Self::fill(RACK_SIZE, RACK_SIZE, *third)),
            // Bonus rolls after a strike are taken independently, no sum cap
            [Strike, Pins(second), Pins(third)] => Ok(Self::fill(RACK_SIZE, *second, *third)),
            [Strike, Pins(second), Spare] => {
                Ok(Self::fill(RACK_SIZE, *second, RACK_SIZE - second))
            }
            [Pins(first), Spare, Strike] => Ok(Self::fill(*first, RACK_SIZE - first, RACK_SIZE)),
            [Pins(first), Spare, Pins(third)] => {
                Ok(Self::fill(*first, RACK_SIZE - first, *third))
            }
            _ => Err(Error::InvalidFormat),
        }
    }

    fn fill(first: u8, second: u8, third: u8) -> Self {
        Self::Fill {
            rolls: [first, second, third],
        }
    }

    /// Pins of every roll in this frame, in the order they were bowled
    pub fn rolls(&self) -> Vec<u8> {
        match *self {
            Self::Strike => vec![RACK_SIZE],
            Self::Spare { first } => vec![first, RACK_SIZE - first],
            Self::Open { first, second } => vec![first, second],
            Self::Fill { rolls } => rolls.to_vec(),
        }
    }

    /// Total pins knocked down in this frame
    pub fn pins(&self) -> u32 {
        self.rolls().into_iter().map(u32::from).sum()
    }

    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Strike => FrameKind::Strike,
            Self::Spare { .. } => FrameKind::Spare,
            Self::Open { .. } => FrameKind::Open,
            Self::Fill { .. } => FrameKind::Fill,
        }
    }
}

impl FromStr for Frame {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Strike => write!(f, "X"),
            Self::Spare { first } => write!(f, "{},/", first),
            Self::Open { first, second } => write!(f, "{},{}", first, second),
            Self::Fill {
                rolls: [first, second, third],
            } => {
                if first == RACK_SIZE {
                    let third_mark = if second < RACK_SIZE && second + third == RACK_SIZE {
                        "/".to_string()
                    } else {
                        roll_mark(third)
                    };
                    write!(f, "X,{},{}", roll_mark(second), third_mark)
                } else {
                    write!(f, "{},/,{}", first, roll_mark(third))
                }
            }
        }
    }
}

fn roll_mark(pins: u8) -> String {
    if pins == RACK_SIZE {
        "X".to_string()
    } else {
        pins.to_string()
    }
}
