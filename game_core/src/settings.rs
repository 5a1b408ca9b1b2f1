//! Per-match choices made on the menu

use crate::Side;

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayMode {
    /// Right paddle is driven by the AI
    #[default]
    Single,
    /// Right paddle is driven by a second player on the arrow keys
    Double,
}

impl PlayMode {
    pub fn toggled(self) -> Self {
        match self {
            PlayMode::Single => PlayMode::Double,
            PlayMode::Double => PlayMode::Single,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayMode::Single => "Single Player",
            PlayMode::Double => "Two Players",
        }
    }
}

/// Named colors a paddle or the ball can take
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaletteColor {
    #[default]
    White,
    Red,
    Blue,
    Green,
    Yellow,
}

impl PaletteColor {
    /// Menu order
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::White,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
    ];

    /// Palette lookup, wrapping out-of-range indices
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::White => "White",
            PaletteColor::Red => "Red",
            PaletteColor::Blue => "Blue",
            PaletteColor::Green => "Green",
            PaletteColor::Yellow => "Yellow",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PaletteColor::White => (255, 255, 255),
            PaletteColor::Red => (255, 0, 0),
            PaletteColor::Blue => (0, 0, 255),
            PaletteColor::Green => (0, 255, 0),
            PaletteColor::Yellow => (255, 255, 0),
        }
    }
}

/// Mode and colors for one match, read-only once play starts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSettings {
    pub mode: PlayMode,
    pub ball_color: PaletteColor,
    pub left_color: PaletteColor,
    pub right_color: PaletteColor,
}

impl MatchSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for the winning side; the AI takes credit in single mode
    pub fn winner_label(&self, winner: Side) -> &'static str {
        match (winner, self.mode) {
            (Side::Left, _) => "Left Player",
            (Side::Right, PlayMode::Single) => "AI",
            (Side::Right, PlayMode::Double) => "Right Player",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_is_two_state() {
        assert_eq!(PlayMode::Single.toggled(), PlayMode::Double);
        assert_eq!(PlayMode::Single.toggled().toggled(), PlayMode::Single);
    }

    #[test]
    fn test_palette_order_and_wrap() {
        assert_eq!(PaletteColor::from_index(0), PaletteColor::White);
        assert_eq!(PaletteColor::from_index(4), PaletteColor::Yellow);
        assert_eq!(PaletteColor::from_index(5), PaletteColor::White);
        assert_eq!(PaletteColor::Blue.rgb(), (0, 0, 255));
        assert_eq!(PaletteColor::Green.name(), "Green");
    }

    #[test]
    fn test_winner_labels() {
        let single = MatchSettings::new();
        assert_eq!(single.winner_label(Side::Right), "AI");
        assert_eq!(single.winner_label(Side::Left), "Left Player");

        let double = MatchSettings {
            mode: PlayMode::Double,
            ..MatchSettings::new()
        };
        assert_eq!(double.winner_label(Side::Right), "Right Player");
        assert_eq!(double.winner_label(Side::Left), "Left Player");
    }
}
