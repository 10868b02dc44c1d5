//! Top-level game session.
//!
//! Owns the state, the rules, the scheduler and the external collaborators.
//! Player input goes through `handle` (or the per-command methods); time goes
//! through `advance`. Effects that are not timers queue up in an outbox the
//! host drains with `drain_effects`.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{BoardError, BoardGenerator, SerpentineGenerator};
use crate::content::{BuiltinLocalizer, ContentError, GameMode, Language, Localizer, TranslationBundle};
use crate::core::{Command, ConfigError, GameConfig, GamePhase, GameRng, GameState, TaskOutcome};
use crate::effects::{Effect, Message};
use crate::rules::{Rules, Transition};
use crate::schedule::{ScheduledJob, TickScheduler};
use crate::tasks::{load_tasks, StaticTaskProvider, TaskProvider};

/// Errors surfaced to the host.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("board generation failed: {0}")]
    Board(#[from] BoardError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// A running two-player match.
pub struct GameSession {
    rules: Rules,
    state: GameState,
    scheduler: TickScheduler,
    generator: Box<dyn BoardGenerator>,
    provider: Box<dyn TaskProvider>,
    localizer: Box<dyn Localizer>,
    bundle: TranslationBundle,
    board_rng: GameRng,
    outbox: Vec<Effect>,
}

impl GameSession {
    /// Create a session on the start screen. Generates the first board.
    pub fn new(
        config: GameConfig,
        mut generator: Box<dyn BoardGenerator>,
        provider: Box<dyn TaskProvider>,
        localizer: Box<dyn Localizer>,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut board_rng = rng.for_context("board");
        let board = generator.generate(&mut board_rng)?;

        let language = config.default_language.clone();
        let bundle = TranslationBundle::load_with_fallback(&*localizer, &language, &config.default_language);
        info!(seed = rng.seed(), cells = board.len(), %language, "session created");

        Ok(Self {
            state: GameState::new(board, language, rng),
            rules: Rules::new(config),
            scheduler: TickScheduler::new(),
            generator,
            provider,
            localizer,
            bundle,
            board_rng,
            outbox: Vec::new(),
        })
    }

    /// Session with the reference board, placeholder tasks and English text.
    pub fn with_defaults(config: GameConfig) -> Result<Self, GameError> {
        Self::new(
            config,
            Box::new(SerpentineGenerator::default()),
            Box::new(StaticTaskProvider::new()),
            Box::new(BuiltinLocalizer),
        )
    }

    // === Input ===

    /// Dispatch a player command.
    pub fn handle(&mut self, command: Command) -> Result<(), GameError> {
        debug!(?command, "command");
        match command {
            Command::StartGame(mode) => return self.start_game(mode),
            Command::Roll => self.roll(),
            Command::SubmitRoll(value) => self.submit_roll(value),
            Command::ReportTask(outcome) => self.report(outcome),
            Command::Restart => self.restart(),
            Command::SwitchLanguage(language) => self.set_language(language),
        }
        Ok(())
    }

    /// Start a game in `mode` on a freshly generated board.
    pub fn start_game(&mut self, mode: GameMode) -> Result<(), GameError> {
        if self.state.phase != GamePhase::Start {
            debug!(phase = ?self.state.phase, "start ignored");
            return Ok(());
        }

        let board = self.generator.generate(&mut self.board_rng)?;
        let texts = load_tasks(
            &*self.provider,
            &mode,
            &self.state.language,
            &self.rules.config().default_language,
        );
        let transition = self.rules.start_game(&self.state, mode, board, texts);
        self.apply(transition);
        Ok(())
    }

    /// Roll the die for the current player.
    pub fn roll(&mut self) {
        let transition = self.rules.request_roll(&self.state);
        self.apply(transition);
    }

    /// Roll with a physical die value.
    pub fn submit_roll(&mut self, value: u8) {
        let transition = self.rules.submit_roll(&self.state, value);
        self.apply(transition);
    }

    /// Report the active task's result.
    pub fn report(&mut self, outcome: TaskOutcome) {
        let transition = self.rules.apply_task_outcome(&self.state, outcome);
        self.apply(transition);
    }

    /// Cancel everything pending and return to the start screen.
    pub fn restart(&mut self) {
        self.scheduler.clear();
        let transition = self.rules.restart(&self.state);
        self.apply(transition);
    }

    /// Switch the display language. During a game the task queue is
    /// reloaded for the new language.
    pub fn set_language(&mut self, language: Language) {
        let default = &self.rules.config().default_language;
        self.bundle = TranslationBundle::load_with_fallback(&*self.localizer, &language, default);

        let texts = match &self.state.mode {
            Some(mode) if self.state.in_game() => {
                Some(load_tasks(&*self.provider, mode, &language, default))
            }
            _ => None,
        };
        let transition = self.rules.switch_language(&self.state, language, texts);
        self.apply(transition);
    }

    // === Time ===

    /// Move the clock forward by `ms`, firing every timer that comes due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now_ms().saturating_add(ms);
        while let Some(job) = self.scheduler.pop_due(until) {
            let transition = match job {
                ScheduledJob::AnimationTick => self.rules.advance_animation(&self.state),
                ScheduledJob::Deferred(deferred) => self.rules.fire(&self.state, deferred),
            };
            self.apply(transition);
        }
        self.scheduler.advance_to(until);
    }

    /// Fire timers until none are left. Returns the elapsed virtual time.
    pub fn run_until_idle(&mut self) -> u64 {
        let started = self.scheduler.now_ms();
        while let Some(due) = self.scheduler.next_due() {
            let delay = due.saturating_sub(self.scheduler.now_ms());
            self.advance(delay);
        }
        self.scheduler.now_ms() - started
    }

    fn apply(&mut self, transition: Transition) {
        let Transition { state, effects } = transition;
        self.state = state;

        for effect in effects {
            match effect {
                Effect::ScheduleTick { delay_ms } => {
                    self.scheduler.schedule(delay_ms, ScheduledJob::AnimationTick);
                }
                Effect::Schedule { delay_ms, deferred } => {
                    self.scheduler.schedule(delay_ms, ScheduledJob::Deferred(deferred));
                }
                effect => {
                    if let Effect::Announce(message) = &effect {
                        debug!(text = %self.bundle.render(message), "message");
                    }
                    self.outbox.push(effect);
                }
            }
        }
    }

    // === Observation ===

    /// Take all effects produced since the last call.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outbox)
    }

    /// Render a message in the active language.
    #[must_use]
    pub fn render(&self, message: &Message) -> String {
        self.bundle.render(message)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn bundle(&self) -> &TranslationBundle {
        &self.bundle
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Whether no timers are pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.state.phase)
            .field("now_ms", &self.scheduler.now_ms())
            .field("pending", &self.scheduler.len())
            .finish_non_exhaustive()
    }
}
