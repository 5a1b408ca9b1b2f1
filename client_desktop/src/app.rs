use game_core::{Config, GameRng};
use ggez::event::EventHandler;
use ggez::graphics::Canvas;
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameError, GameResult};
use tracing::{debug, info};

use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::input::{held_keys, menu_key};
use crate::menu::{Menu, MenuKey, MenuOutcome};
use crate::renderer;
use crate::simulation::LocalGame;

/// Top-level handler owning every piece of game state
pub struct PongApp {
    fsm: GameFsm,
    menu: Menu,
    game: LocalGame,
    backdrop: GameRng,
}

impl PongApp {
    pub fn new(config: Config) -> Self {
        Self {
            fsm: GameFsm::new(),
            menu: Menu::new(),
            game: LocalGame::new(config, GameRng::from_entropy()),
            backdrop: GameRng::from_entropy(),
        }
    }

    fn apply(&mut self, action: GameAction) {
        let result = self.fsm.transition(action);
        if result.success {
            info!(from = ?result.from_state, to = ?result.to_state, "state transition");
        } else {
            debug!(state = ?result.from_state, ?action, "transition rejected");
        }
    }

    /// Route a discrete key press for the current state
    fn handle_key(&mut self, key: MenuKey) {
        match self.fsm.state() {
            FsmState::Menu => {
                if let MenuOutcome::Commit(settings) = self.menu.handle_key(key) {
                    self.game.start(settings);
                    self.apply(GameAction::Commit);
                }
            }
            FsmState::Playing => {}
            FsmState::GameOver { .. } => {
                if key == MenuKey::Enter {
                    self.game.reset_score();
                    self.apply(GameAction::Dismiss);
                }
            }
        }
    }
}

impl EventHandler<GameError> for PongApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.game.config.tick_hz) {
            if !self.fsm.is_playing() {
                continue;
            }
            let keys = held_keys(ctx);
            if let Some(winner) = self.game.step(&keys) {
                info!(
                    ?winner,
                    left = self.game.score.left,
                    right = self.game.score.right,
                    "match over"
                );
                self.apply(GameAction::ScoreLimitReached(winner));
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, renderer::background());

        match self.fsm.state() {
            FsmState::Menu => {
                renderer::draw_menu(
                    ctx,
                    &mut canvas,
                    &self.game.map,
                    &self.menu,
                    &mut self.backdrop,
                )?;
            }
            FsmState::Playing => renderer::draw_match(ctx, &mut canvas, &self.game)?,
            FsmState::GameOver { winner } => {
                let label = self.game.settings.winner_label(winner);
                renderer::draw_game_over(&mut canvas, &self.game.map, label);
            }
        }

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        // One action per physical press; held keys are sampled in update
        if repeated {
            return Ok(());
        }
        let Some(keycode) = input.keycode else {
            return Ok(());
        };

        if let Some(key) = menu_key(keycode) {
            self.handle_key(key);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!(state = ?self.fsm.state(), "quit requested");
        Ok(false)
    }
}
