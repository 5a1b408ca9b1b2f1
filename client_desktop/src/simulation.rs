use game_core::{
    spawn_match, step, Ball, Config, Events, GameMap, GameRng, HeldKeys, MatchSettings, Paddle,
    Rect, Score, Side,
};
use hecs::World;
use tracing::info;

/// One local match: entities, score, and the settings it was started with
pub struct LocalGame {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub settings: MatchSettings,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
}

impl LocalGame {
    pub fn new(config: Config, rng: GameRng) -> Self {
        Self {
            world: World::new(),
            map: GameMap::new(&config),
            config,
            settings: MatchSettings::new(),
            score: Score::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Lay out fresh paddles and ball for a new match
    pub fn start(&mut self, settings: MatchSettings) {
        self.settings = settings;
        spawn_match(&mut self.world, &self.map, &self.config, &mut self.rng);
        info!(
            mode = ?settings.mode,
            ball = settings.ball_color.name(),
            left = settings.left_color.name(),
            right = settings.right_color.name(),
            "match started"
        );
    }

    /// Run one tick and report the winner once a score reaches the limit
    pub fn step(&mut self, keys: &HeldKeys) -> Option<Side> {
        step(
            &mut self.world,
            keys,
            self.settings.mode,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        self.score.has_winner(self.config.win_score)
    }

    /// Zero both scores when the game over screen is dismissed
    pub fn reset_score(&mut self) {
        self.score.reset();
    }

    pub fn paddle(&self, side: Side) -> Option<Rect> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.rect)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
    }
}
