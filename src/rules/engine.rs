//! Pure state transitions.
//!
//! Each transition takes the current `GameState` and returns a new state
//! plus the effects it wants performed. Input that arrives at the wrong time
//! (rolling mid-animation, reporting with no task) returns the state
//! unchanged with no effects.

use tracing::{debug, info};

use crate::board::BoardPath;
use crate::content::{GameMode, Language};
use crate::core::{ActionKind, ActionRecord, GameConfig, GamePhase, GameState, PlayerColor, TaskOutcome};
use crate::effects::{Deferred, Effect, EffectBatch, Message};
use crate::events::{classify_landing, LandingEvent, TaskEvent};
use crate::movement::{AnimationJob, Completion, Trajectory};
use crate::outcome::{resolve_outcome, OutcomePlan};
use crate::tasks::{assign, CurrentTask, TaskQueue};

/// Result of a transition.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: GameState,
    pub effects: EffectBatch,
}

impl Transition {
    fn new(state: GameState, effects: EffectBatch) -> Self {
        Self { state, effects }
    }

    /// The state unchanged, no effects.
    fn ignored(state: &GameState) -> Self {
        Self::new(state.clone(), EffectBatch::new())
    }

    /// Whether the transition was rejected. Every accepted input produces
    /// at least one effect.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.effects.is_empty()
    }
}

/// The game rules, parameterized by configuration.
#[derive(Clone, Debug, Default)]
pub struct Rules {
    config: GameConfig,
}

impl Rules {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Game lifecycle ===

    /// Leave the start screen with a fresh board and a shuffled task queue.
    pub fn start_game(
        &self,
        state: &GameState,
        mode: GameMode,
        board: BoardPath,
        texts: Vec<String>,
    ) -> Transition {
        if state.phase != GamePhase::Start {
            debug!(phase = ?state.phase, "start ignored: game already running");
            return Transition::ignored(state);
        }

        let mut next = state.clone();
        next.replace_board(board);
        next.tasks = TaskQueue::shuffled(texts, &mut next.rng);
        next.mode = Some(mode.clone());
        next.phase = GamePhase::Playing;
        info!(%mode, cells = next.board.len(), tasks = next.tasks.len(), "game started");

        let first = next.current_player();
        let mut effects = EffectBatch::new();
        effects.announce(Message::GameStarted { mode });
        effects.push(Effect::TurnChanged(first));
        effects.announce(Message::TurnOf { player: first });
        Transition::new(next, effects)
    }

    /// Back to the start screen. Keeps the language and the RNG stream.
    pub fn restart(&self, state: &GameState) -> Transition {
        let board = BoardPath::clone(&state.board);
        let next = GameState::new(board, state.language.clone(), state.rng.clone());
        info!("game reset");

        let mut effects = EffectBatch::new();
        effects.push(Effect::GameReset);
        Transition::new(next, effects)
    }

    /// Switch language. During a game the task queue is rebuilt from
    /// `texts`; positions, turn and any active task are kept.
    pub fn switch_language(
        &self,
        state: &GameState,
        language: Language,
        texts: Option<Vec<String>>,
    ) -> Transition {
        let mut next = state.clone();
        next.language = language;
        if let Some(texts) = texts.filter(|_| next.in_game()) {
            next.tasks = TaskQueue::shuffled(texts, &mut next.rng);
        }
        debug!(language = %next.language, tasks = next.tasks.len(), "language switched");

        let mut effects = EffectBatch::new();
        effects.push(Effect::LanguageChanged(next.language.clone()));
        Transition::new(next, effects)
    }

    // === Rolling ===

    /// Roll the die for the current player. The value is revealed after
    /// the configured roll duration.
    pub fn request_roll(&self, state: &GameState) -> Transition {
        if !state.can_roll() {
            debug!(phase = ?state.phase, rolling = state.rolling, "roll ignored");
            return Transition::ignored(state);
        }
        let mut next = state.clone();
        let value = next.rng.roll_die(self.config.die_faces);
        self.begin_roll(next, value)
    }

    /// Roll with a value decided outside the session.
    pub fn submit_roll(&self, state: &GameState, value: u8) -> Transition {
        if !state.can_roll() || value == 0 {
            debug!(value, "submitted roll ignored");
            return Transition::ignored(state);
        }
        self.begin_roll(state.clone(), value)
    }

    fn begin_roll(&self, mut next: GameState, value: u8) -> Transition {
        let player = next.current_player();
        next.rolling = true;

        let mut effects = EffectBatch::new();
        effects.push(Effect::RollStarted { player });
        effects.push(Effect::Schedule {
            delay_ms: self.config.roll_duration_ms,
            deferred: Deferred::RevealRoll { player, value },
        });
        Transition::new(next, effects)
    }

    /// Move the current player `value` cells and start the walk.
    pub fn apply_roll(&self, state: &GameState, value: u8) -> Transition {
        if state.phase != GamePhase::Playing
            || state.animation.is_some()
            || state.current_task.is_some()
            || value == 0
        {
            debug!(phase = ?state.phase, value, "roll result ignored");
            return Transition::ignored(state);
        }

        let mut next = state.clone();
        let player = next.current_player();
        next.rolling = false;
        next.last_roll = Some(value);
        next.record(ActionRecord::new(player, ActionKind::Rolled(value), next.turn.number()));

        let trajectory = Trajectory::advance(next.position(player), value as usize, next.last_index());
        debug!(%player, value, from = trajectory.from(), to = trajectory.destination(), "rolled");

        let mut effects = EffectBatch::new();
        effects.announce(Message::Rolled { player, value });
        if trajectory.bounces() {
            effects.announce(Message::Bounced {
                player,
                steps: trajectory.backward(),
            });
        }

        next.phase = GamePhase::Moving;
        self.start_animation(next, effects, player, trajectory, Completion::Landing)
    }

    // === Animation ===

    fn start_animation(
        &self,
        mut next: GameState,
        mut effects: EffectBatch,
        player: PlayerColor,
        trajectory: Trajectory,
        completion: Completion,
    ) -> Transition {
        if trajectory.is_stationary() {
            return self.complete_animation(next, effects, player, completion);
        }

        effects.push(Effect::AnimationStarted {
            player,
            from: trajectory.from(),
            to: trajectory.destination(),
        });
        effects.push(Effect::ScheduleTick {
            delay_ms: self.config.tick_interval_ms,
        });
        next.animation = Some(AnimationJob::new(player, trajectory, completion));
        Transition::new(next, effects)
    }

    /// Step the active animation by one cell.
    pub fn advance_animation(&self, state: &GameState) -> Transition {
        let mut next = state.clone();
        let Some(mut job) = next.animation.take() else {
            return Transition::ignored(state);
        };

        let mut effects = EffectBatch::new();
        if let Some(position) = job.step() {
            next.positions.set(job.player, position);
            effects.push(Effect::PositionChanged {
                player: job.player,
                position: next.position(job.player),
            });
        }

        if job.is_finished() {
            self.complete_animation(next, effects, job.player, job.completion)
        } else {
            next.animation = Some(job);
            effects.push(Effect::ScheduleTick {
                delay_ms: self.config.tick_interval_ms,
            });
            Transition::new(next, effects)
        }
    }

    fn complete_animation(
        &self,
        next: GameState,
        effects: EffectBatch,
        player: PlayerColor,
        completion: Completion,
    ) -> Transition {
        match completion {
            Completion::Landing => self.landing(next, effects, player),
            Completion::Relocation => self.settle_relocation(next, effects, player),
        }
    }

    // === Landing ===

    /// Classify the current player's landing after a dice move.
    ///
    /// The engine does this itself when the walk ends; calling it again
    /// outside that moment is ignored.
    pub fn resolve_landing(&self, state: &GameState) -> Transition {
        if state.phase != GamePhase::Moving
            || state.animation.is_some()
            || state.current_task.is_some()
        {
            return Transition::ignored(state);
        }
        self.landing(state.clone(), EffectBatch::new(), state.current_player())
    }

    fn landing(&self, mut next: GameState, mut effects: EffectBatch, player: PlayerColor) -> Transition {
        let landing = next.position(player);
        let event = classify_landing(&next.board, landing, next.position(player.opponent()));
        debug!(%player, landing, ?event, "landed");

        let task_event = match event {
            LandingEvent::Win => {
                self.schedule(&mut effects, Deferred::DeclareWin(player));
                return Transition::new(next, effects);
            }
            LandingEvent::Plain => {
                next.phase = GamePhase::Playing;
                pass_turn(&mut next, &mut effects);
                return Transition::new(next, effects);
            }
            LandingEvent::Star => TaskEvent::Star,
            LandingEvent::Trap => TaskEvent::Trap,
            LandingEvent::Collision => TaskEvent::Collision,
        };

        let task = assign(&mut next.tasks, task_event, player);
        effects.announce(match task_event {
            TaskEvent::Star => Message::StarLanding { player, executor: task.executor },
            TaskEvent::Trap => Message::TrapLanding { player },
            TaskEvent::Collision => Message::Collision { player, executor: task.executor },
        });
        self.schedule(&mut effects, Deferred::EnterTask(task));
        Transition::new(next, effects)
    }

    /// Present an assigned task.
    pub fn enter_task(&self, state: &GameState, task: CurrentTask) -> Transition {
        if state.phase != GamePhase::Moving || state.animation.is_some() || state.current_task.is_some() {
            return Transition::ignored(state);
        }

        let mut next = state.clone();
        debug!(executor = %task.executor, event = ?task.event, "task assigned");
        next.phase = GamePhase::Task;
        next.current_task = Some(task.clone());

        let mut effects = EffectBatch::new();
        effects.push(Effect::TaskAssigned(task));
        Transition::new(next, effects)
    }

    // === Task outcomes ===

    /// Apply the players' report for the active task.
    pub fn apply_task_outcome(&self, state: &GameState, outcome: TaskOutcome) -> Transition {
        if !state.can_report() {
            debug!(phase = ?state.phase, ?outcome, "task report ignored");
            return Transition::ignored(state);
        }

        let mut next = state.clone();
        let Some(task) = next.current_task.take() else {
            return Transition::ignored(state);
        };
        next.record(ActionRecord::new(
            next.current_player(),
            ActionKind::Reported(outcome),
            next.turn.number(),
        ));

        let plan = resolve_outcome(&task, outcome, &next.positions, &self.config, &mut next.rng);
        debug!(?plan, "task resolved");

        let mut effects = EffectBatch::new();
        effects.announce(plan.message());

        match plan {
            OutcomePlan::SendToStart { player } => {
                next.positions.set(player, 0);
                effects.push(Effect::PositionChanged { player, position: 0 });
                next.phase = GamePhase::Playing;
                pass_turn(&mut next, &mut effects);
                Transition::new(next, effects)
            }
            OutcomePlan::Hold { .. } => {
                next.phase = GamePhase::Playing;
                pass_turn(&mut next, &mut effects);
                Transition::new(next, effects)
            }
            OutcomePlan::Advance { .. } | OutcomePlan::Stay { .. } | OutcomePlan::Retreat { .. } => {
                let player = plan.player();
                match plan.relocation() {
                    Some(trajectory) => {
                        next.phase = GamePhase::Moving;
                        self.schedule(&mut effects, Deferred::BeginRelocation { player, trajectory });
                        Transition::new(next, effects)
                    }
                    None => self.settle_relocation(next, effects, player),
                }
            }
        }
    }

    /// Start animating a reward or penalty. The walk must start on the
    /// player's cell and stay on the board.
    pub fn begin_relocation(&self, state: &GameState, player: PlayerColor, trajectory: Trajectory) -> Transition {
        if state.phase != GamePhase::Moving || state.animation.is_some() {
            return Transition::ignored(state);
        }
        if trajectory.from() != state.position(player)
            || trajectory.from().saturating_add(trajectory.forward()) > state.last_index()
        {
            debug!(%player, ?trajectory, position = state.position(player), "relocation ignored: stale walk");
            return Transition::ignored(state);
        }
        self.start_animation(
            state.clone(),
            EffectBatch::new(),
            player,
            trajectory,
            Completion::Relocation,
        )
    }

    fn settle_relocation(&self, mut next: GameState, mut effects: EffectBatch, player: PlayerColor) -> Transition {
        if next.positions.at_goal(player) {
            next.phase = GamePhase::Moving;
            self.schedule(&mut effects, Deferred::DeclareWin(player));
        } else {
            next.phase = GamePhase::Playing;
            pass_turn(&mut next, &mut effects);
        }
        Transition::new(next, effects)
    }

    /// End the game with `player` as winner.
    pub fn declare_win(&self, state: &GameState, player: PlayerColor) -> Transition {
        if state.phase != GamePhase::Moving || state.animation.is_some() {
            return Transition::ignored(state);
        }

        let mut next = state.clone();
        next.phase = GamePhase::Win;
        next.winner = Some(player);
        info!(%player, turn = next.turn.number(), "game won");

        let mut effects = EffectBatch::new();
        effects.push(Effect::GameWon(player));
        effects.announce(Message::Winner { player });
        Transition::new(next, effects)
    }

    /// Run a deferred transition.
    pub fn fire(&self, state: &GameState, deferred: Deferred) -> Transition {
        match deferred {
            Deferred::RevealRoll { player, value } => {
                if player != state.current_player() {
                    return Transition::ignored(state);
                }
                self.apply_roll(state, value)
            }
            Deferred::EnterTask(task) => self.enter_task(state, task),
            Deferred::BeginRelocation { player, trajectory } => self.begin_relocation(state, player, trajectory),
            Deferred::DeclareWin(player) => self.declare_win(state, player),
        }
    }

    fn schedule(&self, effects: &mut EffectBatch, deferred: Deferred) {
        effects.push(Effect::Schedule {
            delay_ms: self.config.transition_delay_ms,
            deferred,
        });
    }
}

fn pass_turn(next: &mut GameState, effects: &mut EffectBatch) {
    let player = next.turn.advance();
    effects.push(Effect::TurnChanged(player));
    effects.announce(Message::TurnOf { player });
}
