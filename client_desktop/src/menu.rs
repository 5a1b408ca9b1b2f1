//! Pre-match configuration menu

use game_core::{MatchSettings, PaletteColor, PlayMode};

/// Selectable rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Mode,
    BallColor,
    LeftColor,
    RightColor,
    Start,
}

impl MenuRow {
    pub const ALL: [MenuRow; 5] = [
        MenuRow::Mode,
        MenuRow::BallColor,
        MenuRow::LeftColor,
        MenuRow::RightColor,
        MenuRow::Start,
    ];
}

/// Discrete keys the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Stay,
    Commit(MatchSettings),
}

/// Focus and pending selections. Survives between matches, so the last
/// choices are still highlighted when a match ends.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    focus: usize,
    mode: PlayMode,
    ball_color: usize,
    left_color: usize,
    right_color: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> MenuRow {
        MenuRow::ALL[self.focus]
    }

    pub fn ball_color(&self) -> PaletteColor {
        PaletteColor::from_index(self.ball_color)
    }

    pub fn left_color(&self) -> PaletteColor {
        PaletteColor::from_index(self.left_color)
    }

    pub fn right_color(&self) -> PaletteColor {
        PaletteColor::from_index(self.right_color)
    }

    pub fn handle_key(&mut self, key: MenuKey) -> MenuOutcome {
        let rows = MenuRow::ALL.len();
        match key {
            MenuKey::Up => self.focus = (self.focus + rows - 1) % rows,
            MenuKey::Down => self.focus = (self.focus + 1) % rows,
            MenuKey::Left => self.adjust(-1),
            MenuKey::Right => self.adjust(1),
            MenuKey::Enter => return MenuOutcome::Commit(self.settings()),
        }
        MenuOutcome::Stay
    }

    /// Settings as they would be committed right now, whatever row has focus
    pub fn settings(&self) -> MatchSettings {
        MatchSettings {
            mode: self.mode,
            ball_color: self.ball_color(),
            left_color: self.left_color(),
            right_color: self.right_color(),
        }
    }

    /// Row labels in display order, paired with whether the row has focus
    pub fn rows(&self) -> [(String, bool); 5] {
        let focus = self.focus();
        MenuRow::ALL.map(|row| {
            let label = match row {
                MenuRow::Mode => format!("Mode: {}", self.mode.label()),
                MenuRow::BallColor => format!("Ball Color: {}", self.ball_color().name()),
                MenuRow::LeftColor => format!("Left Paddle Color: {}", self.left_color().name()),
                MenuRow::RightColor => {
                    format!("Right Paddle Color: {}", self.right_color().name())
                }
                MenuRow::Start => "Press Enter to Start".to_string(),
            };
            (label, row == focus)
        })
    }

    fn adjust(&mut self, delta: isize) {
        let colors = PaletteColor::ALL.len();
        let step = |index: usize| (index as isize + delta).rem_euclid(colors as isize) as usize;
        match self.focus() {
            // Two states, so either direction flips
            MenuRow::Mode => self.mode = self.mode.toggled(),
            MenuRow::BallColor => self.ball_color = step(self.ball_color),
            MenuRow::LeftColor => self.left_color = step(self.left_color),
            MenuRow::RightColor => self.right_color = step(self.right_color),
            MenuRow::Start => {}
        }
    }
}
