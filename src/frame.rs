use crate::consts::{BASE_SCORE, PINS};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Knocked-down pin count of a single roll, always in `0..=PINS`.
/// Range enforcement lives at the input boundary (`loader`, the play
/// prompt); the scoring pipeline trusts recorded rolls.
pub type PinCount = u8;

/// Frame discriminant used for filtering and tallying in reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Normal,
    Spare,
    Strike,
    Tenth,
}

/// One scoring unit of a game.
///
/// Frames are derived read-only values: the segmenter rebuilds them from the
/// raw roll sequence on every pass, and they never reference rolls outside
/// themselves. Bonus lookahead is the calculator's job, keyed to the raw
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    /// Two rolls leaving pins standing: `first + second < PINS`.
    Normal { first: PinCount, second: PinCount },
    /// All pins in two rolls: `first + second == PINS`, `first < PINS`.
    Spare { first: PinCount, second: PinCount },
    /// All pins on the first roll. The roll value is implicitly `PINS`.
    Strike,
    /// The final frame: up to three rolls, third present only after a
    /// strike or spare reopened the rack. Absent rolls stay absent and
    /// score zero.
    Tenth {
        first: PinCount,
        second: Option<PinCount>,
        third: Option<PinCount>,
    },
}

impl Frame {
    /// Classify a non-tenth frame from its available rolls.
    ///
    /// Precedence: strike before spare before normal. Returns `None` for a
    /// non-strike first roll whose second roll has not been thrown yet —
    /// an open frame mid-throw is not a frame, so segmentation ends there.
    pub fn classify(first: PinCount, second: Option<PinCount>) -> Option<Frame> {
        if first == PINS {
            return Some(Frame::Strike);
        }
        let second = second?;
        if first + second == PINS {
            Some(Frame::Spare { first, second })
        } else {
            Some(Frame::Normal { first, second })
        }
    }

    /// Build the tenth frame. Position wins over roll values: a tenth-frame
    /// strike must never become a plain `Strike`, its bonus rules differ.
    pub fn tenth(first: PinCount, second: Option<PinCount>, third: Option<PinCount>) -> Frame {
        Frame::Tenth {
            first,
            second,
            third,
        }
    }

    /// Frame score before any external bonus. Strikes and spares cap at
    /// `BASE_SCORE`; the tenth sums its own rolls and never receives an
    /// external bonus on top.
    pub fn base_score(&self) -> u32 {
        match self {
            Frame::Normal { first, second } => *first as u32 + *second as u32,
            Frame::Spare { .. } | Frame::Strike => BASE_SCORE,
            Frame::Tenth {
                first,
                second,
                third,
            } => *first as u32 + second.unwrap_or(0) as u32 + third.unwrap_or(0) as u32,
        }
    }

    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Normal { .. } => FrameKind::Normal,
            Frame::Spare { .. } => FrameKind::Spare,
            Frame::Strike => FrameKind::Strike,
            Frame::Tenth { .. } => FrameKind::Tenth,
        }
    }
}

/// Scoreboard label: "X", "5 /", "2 5"; tenth e.g. "2 / 6" or "X X X".
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Normal { first, second } => write!(f, "{} {}", first, second),
            Frame::Spare { first, .. } => write!(f, "{} /", first),
            Frame::Strike => write!(f, "X"),
            Frame::Tenth {
                first,
                second,
                third,
            } => {
                if *first == PINS {
                    write!(f, "X")?;
                } else {
                    write!(f, "{}", first)?;
                }
                if let Some(s) = second {
                    if *s == PINS {
                        write!(f, " X")?;
                    } else if *first < PINS && first + s == PINS {
                        write!(f, " /")?;
                    } else {
                        write!(f, " {}", s)?;
                    }
                    if let Some(t) = third {
                        if *t == PINS {
                            write!(f, " X")?;
                        } else if *first == PINS && *s < PINS && s + t == PINS {
                            // Rack was standing from the second roll, so a
                            // completing third roll is a spare mark.
                            write!(f, " /")?;
                        } else {
                            write!(f, " {}", t)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
