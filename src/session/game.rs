//! The caller-owned game session.

use im::Vector;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::error::SessionError;
use crate::core::{
    ConfigError, Direction, EngineConfig, GameRng, GameRngState, Grid, Position, TerminalPolicy,
};
use crate::rules::{apply_move, initialize_grid, is_stuck, is_winning_grid, spawn_tile, MoveResult};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No grid yet; the game view has not been entered.
    #[default]
    Uninitialized,
    /// Accepting moves.
    Playing,
    /// Reached the win threshold under [`TerminalPolicy::Halt`].
    Won,
    /// No move left under [`TerminalPolicy::Halt`].
    Lost,
}

impl SessionStatus {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Won | SessionStatus::Lost)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionStatus::Uninitialized => "uninitialized",
            SessionStatus::Playing => "playing",
            SessionStatus::Won => "won",
            SessionStatus::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Everything the UI layer needs after one directional input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The input that produced this turn.
    pub direction: Direction,
    /// Slide/merge outcome, before the spawn.
    pub result: MoveResult,
    /// Grid after the spawn (equal to `result.grid` when nothing spawned).
    pub grid: Grid,
    /// Where the new tile landed, if one did.
    pub spawned: Option<Position>,
    /// Session score after this turn.
    pub score: u64,
    /// True if the grid holds a winning tile.
    pub won: bool,
    /// True only on the turn that first reached the win threshold.
    pub newly_won: bool,
    /// Session status after this turn.
    pub status: SessionStatus,
}

impl Turn {
    /// True if the grid changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.result.changed
    }

    /// Points earned this turn.
    #[must_use]
    pub fn score_delta(&self) -> u64 {
        self.result.score_delta
    }
}

/// One accepted move in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    pub direction: Direction,
    pub score_delta: u64,
    pub spawned: Option<Position>,
}

/// Serializable session checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: EngineConfig,
    pub grid: Grid,
    pub score: u64,
    pub status: SessionStatus,
    pub won: bool,
    pub rng: GameRngState,
    pub history: Vector<TurnRecord>,
}

/// A single-player game session.
///
/// Owns the grid, score and RNG outright. Hosts drive it with directional
/// input and render from the returned [`Turn`] or from [`Session::grid`]
/// copies.
///
/// ## Example
///
/// ```
/// use rust_merge::core::Direction;
/// use rust_merge::session::{Session, SessionStatus};
///
/// let mut session = Session::with_seed(42);
/// assert!(session.enter().unwrap());
/// assert_eq!(session.status(), SessionStatus::Playing);
/// assert_eq!(session.grid().tile_count(), 2);
///
/// let turn = session.play(Direction::Left).unwrap();
/// assert_eq!(turn.spawned.is_some(), turn.changed());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: EngineConfig,
    grid: Grid,
    score: u64,
    status: SessionStatus,
    won: bool,
    rng: GameRng,
    history: Vector<TurnRecord>,
}

impl Session {
    /// Create an uninitialized session.
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, GameRng::new(seed)))
    }

    /// Create an uninitialized session with the default configuration.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::build(EngineConfig::default(), GameRng::new(seed))
    }

    fn build(config: EngineConfig, rng: GameRng) -> Self {
        Self {
            config,
            grid: Grid::empty(),
            score: 0,
            status: SessionStatus::Uninitialized,
            won: false,
            rng,
            history: Vector::new(),
        }
    }

    // === Lifecycle ===

    /// Enter the game view.
    ///
    /// Starts a new game if the grid is entirely empty, otherwise resumes
    /// the current one. Returns true if a new game was started.
    pub fn enter(&mut self) -> Result<bool, SessionError> {
        if self.grid.is_empty() {
            self.new_game()?;
            Ok(true)
        } else {
            if self.status == SessionStatus::Uninitialized {
                self.status = SessionStatus::Playing;
            }
            Ok(false)
        }
    }

    /// Discard the current game and seed a fresh grid.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        self.grid = initialize_grid(&mut self.rng, &self.config)?;
        self.score = 0;
        self.history = Vector::new();
        self.refresh_status();
        info!("new game started (seed {}, {})", self.rng.seed(), self.status);
        Ok(())
    }

    /// Replace the grid wholesale, e.g. with a board restored by the host.
    ///
    /// Score and history are kept; status is re-evaluated against the new
    /// grid.
    pub fn load_grid(&mut self, grid: Grid) {
        self.grid.replace(grid);
        self.refresh_status();
    }

    // === Play ===

    /// Apply one directional move.
    ///
    /// A move that changes nothing is not an error: it returns a turn with
    /// `changed() == false`, spawns nothing and is left out of the history.
    pub fn play(&mut self, direction: Direction) -> Result<Turn, SessionError> {
        match self.status {
            SessionStatus::Uninitialized => return Err(SessionError::NotStarted),
            status if status.is_terminal() => {
                warn!("ignoring {direction}: game is over ({status})");
                return Err(SessionError::GameOver(status));
            }
            _ => {}
        }

        let result = apply_move(&self.grid, direction);
        let mut spawned = None;

        if result.changed {
            self.grid = result.grid;
            spawned = spawn_tile(&mut self.grid, &mut self.rng, self.config.spawn_value)?;
            self.score += result.score_delta;
            self.history.push_back(TurnRecord {
                direction,
                score_delta: result.score_delta,
                spawned,
            });
            debug!(
                "moved {direction}: +{} (score {}), spawn {:?}",
                result.score_delta, self.score, spawned
            );
        } else {
            debug!("moved {direction}: no change");
        }

        let won = is_winning_grid(&self.grid, self.config.win_threshold);
        let newly_won = won && !self.won;
        if newly_won {
            self.won = true;
            info!("reached {} with score {}", self.config.win_threshold, self.score);
        }
        self.status = self.evaluate_status();

        Ok(Turn {
            direction,
            result,
            grid: self.grid,
            spawned,
            score: self.score,
            won,
            newly_won,
            status: self.status,
        })
    }

    /// Apply a move named by a key, ignoring keys that name no direction.
    pub fn handle_key(&mut self, key: &str) -> Result<Option<Turn>, SessionError> {
        match key.parse::<Direction>() {
            Ok(direction) => self.play(direction).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Derive `won` and `status` from the grid alone. An empty grid has not
    /// been started.
    fn refresh_status(&mut self) {
        self.won = is_winning_grid(&self.grid, self.config.win_threshold);
        self.status = if self.grid.is_empty() {
            SessionStatus::Uninitialized
        } else {
            self.evaluate_status()
        };
    }

    fn evaluate_status(&self) -> SessionStatus {
        match self.config.terminal_policy {
            TerminalPolicy::KeepPlaying => SessionStatus::Playing,
            TerminalPolicy::Halt if self.won => SessionStatus::Won,
            TerminalPolicy::Halt if is_stuck(&self.grid) => SessionStatus::Lost,
            TerminalPolicy::Halt => SessionStatus::Playing,
        }
    }

    // === Accessors ===

    /// Copy of the current grid.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Accumulated score for the current game.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True once the win threshold has been reached this game.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Accepted moves this game.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Number of accepted moves this game.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    // === Persistence ===

    /// Capture the full session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            grid: self.grid,
            score: self.score,
            status: self.status,
            won: self.won,
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// The restored session continues with the same spawn sequence the
    /// original would have produced. The snapshot's `status` and `won` are
    /// not trusted: both are recomputed from its grid and config.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self, SessionError> {
        snapshot.config.validate()?;
        let mut session = Self {
            config: snapshot.config,
            grid: snapshot.grid,
            score: snapshot.score,
            status: SessionStatus::Uninitialized,
            won: false,
            rng: GameRng::from_state(&snapshot.rng),
            history: snapshot.history,
        };
        session.refresh_status();
        Ok(session)
    }

    /// Encode the session with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(&self.snapshot())?)
    }

    /// Decode a session produced by [`Session::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        let snapshot: SessionSnapshot = bincode::deserialize(bytes)?;
        Self::restore(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_cells(rows).unwrap()
    }

    #[test]
    fn test_new_session_is_uninitialized() {
        let session = Session::with_seed(1);
        assert_eq!(session.status(), SessionStatus::Uninitialized);
        assert!(session.grid().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EngineConfig::new().with_spawn_value(3);
        assert_eq!(
            Session::new(config, 1).unwrap_err(),
            ConfigError::InvalidSpawnValue(3)
        );
    }

    #[test]
    fn test_play_before_enter_fails() {
        let mut session = Session::with_seed(1);
        assert!(matches!(
            session.play(Direction::Left),
            Err(SessionError::NotStarted)
        ));
    }

    #[test]
    fn test_enter_only_initializes_empty_grid() {
        let mut session = Session::with_seed(1);
        assert!(session.enter().unwrap());
        let first = session.grid();
        assert!(!session.enter().unwrap());
        assert_eq!(session.grid(), first);
    }

    #[test]
    fn test_no_op_move_spawns_nothing() {
        let mut session = Session::with_seed(1);
        session.load_grid(grid([[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));
        let before = session.grid();

        let turn = session.play(Direction::Left).unwrap();
        assert!(!turn.changed());
        assert_eq!(turn.spawned, None);
        assert_eq!(session.grid(), before);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_score_accumulates() {
        let mut session = Session::with_seed(1);
        session.load_grid(grid([[2, 2, 4, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));

        let turn = session.play(Direction::Left).unwrap();
        assert_eq!(turn.score_delta(), 12);
        assert_eq!(session.score(), 12);
        assert_eq!(turn.score, 12);
        assert_eq!(session.history()[0].score_delta, 12);
    }

    #[test]
    fn test_keep_playing_after_win() {
        let mut session = Session::with_seed(1);
        session.load_grid(grid([[64, 64, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));

        let turn = session.play(Direction::Left).unwrap();
        assert!(turn.won);
        assert!(turn.newly_won);
        assert_eq!(turn.status, SessionStatus::Playing);

        let next = session.play(Direction::Right).unwrap();
        assert!(next.won);
        assert!(!next.newly_won);
        assert!(session.has_won());
    }

    #[test]
    fn test_halt_on_win() {
        let config = EngineConfig::new().with_terminal_policy(TerminalPolicy::Halt);
        let mut session = Session::new(config, 1).unwrap();
        session.load_grid(grid([[64, 64, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));

        let turn = session.play(Direction::Left).unwrap();
        assert_eq!(turn.status, SessionStatus::Won);
        assert!(matches!(
            session.play(Direction::Right),
            Err(SessionError::GameOver(SessionStatus::Won))
        ));
    }

    #[test]
    fn test_halt_on_stuck_grid() {
        let config = EngineConfig::new().with_terminal_policy(TerminalPolicy::Halt);
        let mut session = Session::new(config, 1).unwrap();
        session.load_grid(grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]));
        assert_eq!(session.status(), SessionStatus::Lost);
    }

    #[test]
    fn test_handle_key() {
        let mut session = Session::with_seed(5);
        session.enter().unwrap();
        assert!(session.handle_key("Escape").unwrap().is_none());
        assert!(session.handle_key("ArrowUp").unwrap().is_some());
    }

    #[test]
    fn test_new_game_resets() {
        let mut session = Session::with_seed(9);
        session.load_grid(grid([[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));
        session.play(Direction::Left).unwrap();
        assert_eq!(session.score(), 4);

        session.new_game().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.grid().tile_count(), 2);
    }

    #[test]
    fn test_new_game_evaluates_fresh_grid() {
        let config = EngineConfig::new()
            .with_win_threshold(4)
            .with_spawn_value(4)
            .with_terminal_policy(TerminalPolicy::Halt);
        let mut session = Session::new(config, 3).unwrap();
        session.new_game().unwrap();

        assert!(session.has_won());
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn test_new_rejects_zero_initial_tiles() {
        let config = EngineConfig::new()
            .with_initial_tiles(0)
            .with_terminal_policy(TerminalPolicy::Halt);
        assert_eq!(
            Session::new(config, 1).unwrap_err(),
            ConfigError::InvalidInitialTiles(0)
        );
    }
}
