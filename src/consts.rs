/// Number of pins standing at the top of every frame.
pub const PINS: u8 = 10;

/// Number of frames in a regulation game.
pub const FRAMES: usize = 10;

/// Base score credited for a strike or spare before any bonus rolls.
pub const BASE_SCORE: u32 = 10;

/// Upper bound on rolls in one game: nine two-roll frames plus a
/// three-roll tenth.
pub const MAX_ROLLS: usize = 21;

/// Total of a perfect game (twelve consecutive strikes).
pub const PERFECT_SCORE: u32 = 300;
