use rand::Rng;

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Left is checked first, so it wins a tie at the limit
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Source of fair coin flips used to pick serve directions
pub trait SignSource {
    fn coin(&mut self) -> bool;

    /// `+1` on heads, `-1` on tails
    fn next_sign(&mut self) -> i32 {
        if self.coin() {
            1
        } else {
            -1
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl SignSource for GameRng {
    fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of flips, wrapping around when exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedSigns {
    flips: Vec<bool>,
    cursor: usize,
}

impl ScriptedSigns {
    pub fn new(flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl SignSource for ScriptedSigns {
    fn coin(&mut self) -> bool {
        if self.flips.is_empty() {
            return true;
        }
        let flip = self.flips[self.cursor % self.flips.len()];
        self.cursor += 1;
        flip
    }
}

/// Movement keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub w: bool,
    pub s: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
