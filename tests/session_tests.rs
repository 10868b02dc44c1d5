//! End-to-end session tests.
//!
//! These drive a `GameSession` through commands and the virtual clock and
//! check the observable state and effects.

use path_duel::board::{BoardPath, CellKind, FixedBoard, SerpentineGenerator};
use path_duel::content::{BuiltinLocalizer, GameMode, Language};
use path_duel::core::{Command, GameConfig, GamePhase, PlayerColor, TaskOutcome};
use path_duel::effects::{Effect, Message};
use path_duel::events::TaskEvent;
use path_duel::session::GameSession;
use path_duel::tasks::{StaticTaskProvider, PLACEHOLDER_TASKS};

fn party() -> GameMode {
    GameMode::new("party")
}

fn provider() -> StaticTaskProvider {
    StaticTaskProvider::new()
        .with_tasks(party(), Language::new("en"), ["hop on one foot", "hum a tune"])
        .with_tasks(party(), Language::new("es"), ["salta", "canta", "baila"])
}

/// A 10-cell board with the given interior specials.
fn board(specials: &[(usize, CellKind)]) -> BoardPath {
    let mut kinds: Vec<CellKind> = BoardPath::plain(10)
        .unwrap()
        .cells()
        .iter()
        .map(|c| c.kind)
        .collect();
    for &(index, kind) in specials {
        kinds[index] = kind;
    }
    BoardPath::from_kinds(&kinds).unwrap()
}

fn session_on(board: BoardPath) -> GameSession {
    let mut session = GameSession::new(
        GameConfig::default().with_seed(11),
        Box::new(FixedBoard::new(board)),
        Box::new(provider()),
        Box::new(BuiltinLocalizer),
    )
    .unwrap();
    session.start_game(party()).unwrap();
    session
}

fn roll(session: &mut GameSession, value: u8) {
    session.submit_roll(value);
    session.run_until_idle();
}

fn messages(effects: &[Effect]) -> Vec<&Message> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Announce(m) => Some(m),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Winning
// =============================================================================

/// Red on 0 rolls 9 on a 10-cell board: lands on the end and wins.
#[test]
fn test_exact_roll_wins_without_task() {
    let mut session = session_on(board(&[]));
    session.drain_effects();

    roll(&mut session, 9);

    let state = session.state();
    assert_eq!(state.phase, GamePhase::Win);
    assert_eq!(state.winner, Some(PlayerColor::Red));
    assert_eq!(state.position(PlayerColor::Red), 9);

    let effects = session.drain_effects();
    assert!(!effects.iter().any(|e| matches!(e, Effect::TaskAssigned(_))));
    assert!(effects.contains(&Effect::GameWon(PlayerColor::Red)));

    // Roll reveal, nine ticks, then the win delay.
    let config = session.config();
    assert_eq!(
        session.now_ms(),
        config.roll_duration_ms + 9 * config.tick_interval_ms + config.transition_delay_ms
    );
}

/// Once won, rolling does nothing until restart.
#[test]
fn test_no_rolls_after_win() {
    let mut session = session_on(board(&[]));
    roll(&mut session, 9);
    session.drain_effects();

    session.roll();
    assert!(session.is_idle());
    assert!(session.drain_effects().is_empty());
    assert_eq!(session.state().phase, GamePhase::Win);
}

// =============================================================================
// Bounce and stars
// =============================================================================

/// Red on 6 rolls 5: touches 9, bounces to 7, lands on a star, Blue performs.
#[test]
fn test_bounce_onto_star_assigns_opponent() {
    let mut session = session_on(board(&[(7, CellKind::Star)]));
    roll(&mut session, 6);
    roll(&mut session, 1);
    session.drain_effects();

    assert_eq!(session.state().current_player(), PlayerColor::Red);
    roll(&mut session, 5);

    let state = session.state();
    assert_eq!(state.position(PlayerColor::Red), 7);
    assert_eq!(state.phase, GamePhase::Task);

    let task = state.current_task.clone().unwrap();
    assert_eq!(task.event, TaskEvent::Star);
    assert_eq!(task.executor, PlayerColor::Blue);
    assert_eq!(task.target, PlayerColor::Red);

    let effects = session.drain_effects();
    let messages = messages(&effects);
    assert!(messages.iter().any(|m| matches!(m, Message::Bounced { steps: 2, .. })));

    // The piece touched the end before reflecting.
    let red_positions: Vec<usize> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::PositionChanged { player: PlayerColor::Red, position } => Some(*position),
            _ => None,
        })
        .collect();
    assert_eq!(red_positions, vec![7, 8, 9, 8, 7]);
}

/// A failed star task moves the executor back and passes the turn.
#[test]
fn test_failed_star_moves_executor_back() {
    let mut session = session_on(board(&[(5, CellKind::Star)]));
    roll(&mut session, 4);
    roll(&mut session, 5);
    assert_eq!(session.state().phase, GamePhase::Task);
    assert_eq!(session.state().current_task.as_ref().unwrap().executor, PlayerColor::Red);

    session.report(TaskOutcome::Failed);
    session.run_until_idle();

    let state = session.state();
    assert!(state.position(PlayerColor::Red) <= 1);
    assert_eq!(state.position(PlayerColor::Blue), 5);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.current_player(), PlayerColor::Red);
}

// =============================================================================
// Traps and collisions
// =============================================================================

#[test]
fn test_trap_is_performed_by_lander() {
    let mut session = session_on(board(&[(4, CellKind::Trap)]));
    roll(&mut session, 4);

    let task = session.state().current_task.clone().unwrap();
    assert_eq!(task.event, TaskEvent::Trap);
    assert_eq!(task.executor, PlayerColor::Red);

    session.handle(Command::ReportTask(TaskOutcome::Failed)).unwrap();
    session.run_until_idle();

    let state = session.state();
    assert!(state.position(PlayerColor::Red) <= 1);
    assert_eq!(state.current_player(), PlayerColor::Blue);
    assert!(messages(&session.drain_effects())
        .iter()
        .any(|m| matches!(m, Message::MovedBack { player: PlayerColor::Red, .. })));
}

#[test]
fn test_collision_failure_sends_executor_home() {
    let mut session = session_on(board(&[]));
    roll(&mut session, 3);
    roll(&mut session, 3);

    let task = session.state().current_task.clone().unwrap();
    assert_eq!(task.event, TaskEvent::Collision);
    assert_eq!(task.executor, PlayerColor::Red);
    assert_eq!(task.target, PlayerColor::Blue);

    session.report(TaskOutcome::Failed);
    session.run_until_idle();

    let state = session.state();
    assert_eq!(state.position(PlayerColor::Red), 0);
    assert_eq!(state.position(PlayerColor::Blue), 3);
    assert_eq!(state.current_player(), PlayerColor::Red);
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn test_collision_success_keeps_positions() {
    let mut session = session_on(board(&[]));
    roll(&mut session, 3);
    roll(&mut session, 3);

    session.report(TaskOutcome::Completed);
    session.run_until_idle();

    let state = session.state();
    assert_eq!(state.position(PlayerColor::Red), 3);
    assert_eq!(state.position(PlayerColor::Blue), 3);
    assert_eq!(state.current_player(), PlayerColor::Red);
}

/// Bouncing all the way back onto the start cell is a plain landing, even
/// with the opponent waiting there.
#[test]
fn test_no_collision_on_start_cell() {
    let mut session = session_on(board(&[]));
    roll(&mut session, 18);

    let state = session.state();
    assert_eq!(state.position(PlayerColor::Red), 0);
    assert_eq!(state.position(PlayerColor::Blue), 0);
    assert!(state.current_task.is_none());
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.current_player(), PlayerColor::Blue);
}

// =============================================================================
// Input gating
// =============================================================================

#[test]
fn test_roll_ignored_while_moving() {
    let mut session = session_on(board(&[]));
    session.submit_roll(3);
    session.advance(session.config().roll_duration_ms + 1);
    assert_eq!(session.state().phase, GamePhase::Moving);

    session.roll();
    session.submit_roll(4);
    session.run_until_idle();

    let state = session.state();
    assert_eq!(state.position(PlayerColor::Red), 3);
    assert_eq!(state.position(PlayerColor::Blue), 0);
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.current_player(), PlayerColor::Blue);
}

#[test]
fn test_roll_ignored_while_rolling() {
    let mut session = session_on(board(&[]));
    session.submit_roll(2);
    session.submit_roll(5);
    session.run_until_idle();

    assert_eq!(session.state().position(PlayerColor::Red), 2);
    assert_eq!(session.state().history.len(), 1);
}

#[test]
fn test_report_without_task_is_ignored() {
    let mut session = session_on(board(&[]));
    session.drain_effects();

    session.report(TaskOutcome::Completed);
    assert!(session.drain_effects().is_empty());
    assert!(session.state().history.is_empty());
}

#[test]
fn test_start_while_running_is_ignored() {
    let mut session = session_on(board(&[]));
    roll(&mut session, 2);

    session.handle(Command::StartGame(GameMode::new("other"))).unwrap();
    assert_eq!(session.state().mode, Some(party()));
    assert_eq!(session.state().position(PlayerColor::Red), 2);
}

// =============================================================================
// Restart, language and content
// =============================================================================

#[test]
fn test_restart_resets_state() {
    let mut session = session_on(board(&[]));
    roll(&mut session, 4);
    session.submit_roll(2);
    session.advance(100);

    session.handle(Command::Restart).unwrap();
    assert!(session.is_idle());

    let state = session.state();
    assert_eq!(state.phase, GamePhase::Start);
    assert_eq!(state.position(PlayerColor::Red), 0);
    assert_eq!(state.position(PlayerColor::Blue), 0);
    assert_eq!(state.current_player(), PlayerColor::Red);
    assert!(state.winner.is_none());
    assert!(state.current_task.is_none());

    session.start_game(party()).unwrap();
    assert_eq!(session.state().phase, GamePhase::Playing);
}

#[test]
fn test_language_switch_reloads_tasks_mid_game() {
    let mut session = session_on(board(&[]));
    roll(&mut session, 4);
    assert_eq!(session.state().tasks.len(), 2);
    session.drain_effects();

    session.handle(Command::SwitchLanguage(Language::new("es"))).unwrap();
    assert_eq!(session.drain_effects(), vec![Effect::LanguageChanged(Language::new("es"))]);

    let state = session.state();
    assert_eq!(state.language, Language::new("es"));
    assert_eq!(state.tasks.len(), 3);
    assert!(state.tasks.iter().any(|t| t == "baila"));
    assert_eq!(state.position(PlayerColor::Red), 4);
    assert_eq!(state.current_player(), PlayerColor::Blue);

    // No Spanish translations built in, so text falls back to English.
    assert_eq!(session.bundle().language(), &Language::new("en"));
}

#[test]
fn test_unknown_mode_uses_placeholders() {
    let mut session = GameSession::new(
        GameConfig::default().with_seed(5),
        Box::new(FixedBoard::new(board(&[]))),
        Box::new(provider()),
        Box::new(BuiltinLocalizer),
    )
    .unwrap();
    session.start_game(GameMode::new("nobody-wrote-this")).unwrap();

    let tasks = &session.state().tasks;
    assert_eq!(tasks.len(), PLACEHOLDER_TASKS.len());
    assert!(tasks.iter().all(|t| PLACEHOLDER_TASKS.contains(&t.as_str())));
}

#[test]
fn test_rendered_messages() {
    let mut session = session_on(board(&[]));
    session.drain_effects();
    roll(&mut session, 3);

    let effects = session.drain_effects();
    let rendered: Vec<String> = messages(&effects).into_iter().map(|m| session.render(m)).collect();
    assert_eq!(rendered, vec!["Red rolled a 3".to_string(), "Blue's turn".to_string()]);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let mut session = GameSession::new(
            GameConfig::default().with_seed(99),
            Box::new(SerpentineGenerator::default()),
            Box::new(provider()),
            Box::new(BuiltinLocalizer),
        )
        .unwrap();
        session.start_game(party()).unwrap();
        for _ in 0..20 {
            if session.state().can_report() {
                session.report(TaskOutcome::Failed);
            } else {
                session.roll();
            }
            session.run_until_idle();
        }
        let state = session.state();
        (
            state.board.cells().to_vec(),
            state.position(PlayerColor::Red),
            state.position(PlayerColor::Blue),
            state.history.len(),
        )
    };

    assert_eq!(play(), play());
}
