//! Match engine
//!
//! Owns the grid, both players and the turn. All moves go through
//! [`MatchEngine::place_stone`], which validates the move, writes the stone,
//! runs win detection around it and advances the turn. Front ends only read
//! back through [`MatchEngine::cell`] and [`MatchEngine::dimensions`].

use tracing::{debug, info, instrument};

use crate::board::{Grid, Pos, Stone};
use crate::config::GameConfig;
use crate::error::{ConfigError, GridError, MoveError};
use crate::player::{Player, PlayerId};
use crate::rules::check_win;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    /// Terminal until [`MatchEngine::restart`]
    Won(PlayerId),
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Game continues; `next` moves now
    Continue { next: PlayerId },
    /// The move completed five; the turn does not advance
    Won { winner: PlayerId },
}

impl Placement {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Placement::Won { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Placement::Won { winner } => Some(*winner),
            Placement::Continue { .. } => None,
        }
    }
}

/// One Gomoku session between two players.
///
/// Not reentrant: one `place_stone` at a time, from a single owner.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    grid: Grid,
    players: [Player; 2],
    current: PlayerId,
    state: MatchState,
    last_move: Option<Pos>,
    move_count: usize,
}

impl MatchEngine {
    /// Build a session from a validated config
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.board.rows, config.board.cols)?;
        let players = [config.players[0].to_player(), config.players[1].to_player()];
        Ok(Self::from_parts(grid, players))
    }

    fn from_parts(grid: Grid, players: [Player; 2]) -> Self {
        Self {
            grid,
            players,
            current: PlayerId::First,
            state: MatchState::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    /// Place the current player's stone at `(row, col)`.
    ///
    /// A rejected move returns `Err` and leaves the grid, the turn and the
    /// state untouched.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn place_stone(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        if let MatchState::Won(winner) = self.state {
            debug!(?winner, "rejected: game is over");
            return Err(MoveError::GameOver { winner });
        }

        let pos = Pos::new(row, col);
        let cell = self.grid.get(pos).inspect_err(|e| debug!(%e, "rejected"))?;
        if cell != Stone::Empty {
            debug!(?cell, "rejected: cell occupied");
            return Err(MoveError::Occupied { row, col });
        }

        let mover = self.current;
        let stone = self.player(mover).color().stone();
        self.grid.set(pos, stone)?;
        self.last_move = Some(pos);
        self.move_count += 1;

        if check_win(&self.grid, pos, stone) {
            self.state = MatchState::Won(mover);
            info!(
                winner = self.player(mover).name(),
                moves = self.move_count,
                "game won"
            );
            return Ok(Placement::Won { winner: mover });
        }

        self.current = mover.other();
        debug!(next = ?self.current, "stone placed");
        Ok(Placement::Continue { next: self.current })
    }

    /// Clear the grid and hand the first move back to `PlayerId::First`.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn restart(&mut self) {
        self.grid.reset();
        self.state = MatchState::InProgress;
        self.current = PlayerId::First;
        self.last_move = None;
        self.move_count = 0;
        info!("game restarted");
    }

    /// Read one cell for rendering
    pub fn cell(&self, row: usize, col: usize) -> Result<Stone, GridError> {
        self.grid.get(Pos::new(row, col))
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            MatchState::Won(winner) => Some(winner),
            MatchState::InProgress => None,
        }
    }

    /// Seat entitled to the next stone
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Stones placed since the last restart
    pub fn move_count(&self) -> usize {
        self.move_count
    }
}

impl Default for MatchEngine {
    /// 15x15 board, "Player 1" (black) against "Player 2" (white)
    fn default() -> Self {
        let config = GameConfig::default();
        let players = [config.players[0].to_player(), config.players[1].to_player()];
        Self::from_parts(Grid::default(), players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::config::BoardConfig;

    /// Play `moves` in order, interleaving the two seats.
    fn play(engine: &mut MatchEngine, moves: &[(usize, usize)]) -> Vec<Placement> {
        moves
            .iter()
            .map(|&(row, col)| engine.place_stone(row, col).unwrap())
            .collect()
    }

    /// Interleave `first` with filler moves for the second seat on row 0.
    fn with_filler(first: &[(usize, usize)]) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for (i, &mv) in first.iter().enumerate() {
            moves.push(mv);
            if i + 1 < first.len() {
                moves.push((0, i * 2));
            }
        }
        moves
    }

    #[test]
    fn test_initial_state() {
        let engine = MatchEngine::default();
        assert_eq!(engine.state(), MatchState::InProgress);
        assert_eq!(engine.current_player(), PlayerId::First);
        assert_eq!(engine.dimensions(), (15, 15));
        assert_eq!(engine.player(PlayerId::First).color(), Color::Black);
        assert_eq!(engine.player(PlayerId::Second).color(), Color::White);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.last_move(), None);
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_new_matches_default() {
        let engine = MatchEngine::new(&GameConfig::default()).unwrap();
        let default = MatchEngine::default();
        assert_eq!(engine.grid(), default.grid());
        assert_eq!(engine.player(PlayerId::First), default.player(PlayerId::First));
        assert_eq!(engine.player(PlayerId::Second), default.player(PlayerId::Second));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.board.rows = 0;
        assert!(matches!(
            MatchEngine::new(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_place_stone_alternates_turns() {
        let mut engine = MatchEngine::default();

        let result = engine.place_stone(7, 7).unwrap();
        assert_eq!(result, Placement::Continue { next: PlayerId::Second });
        assert_eq!(engine.cell(7, 7), Ok(Stone::Black));
        assert_eq!(engine.current_player(), PlayerId::Second);

        let result = engine.place_stone(7, 8).unwrap();
        assert_eq!(result, Placement::Continue { next: PlayerId::First });
        assert_eq!(engine.cell(7, 8), Ok(Stone::White));
        assert_eq!(engine.current_player(), PlayerId::First);

        assert_eq!(engine.move_count(), 2);
        assert_eq!(engine.last_move(), Some(Pos::new(7, 8)));
    }

    #[test]
    fn test_every_empty_cell_accepts_a_stone() {
        let mut engine = MatchEngine::new(&GameConfig {
            board: BoardConfig { rows: 3, cols: 4 },
            ..GameConfig::default()
        })
        .unwrap();

        let mut expected = PlayerId::First;
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(engine.current_player(), expected);
                let result = engine.place_stone(row, col).unwrap();
                expected = expected.other();
                assert_eq!(result, Placement::Continue { next: expected });
            }
        }
        assert!(engine.grid().is_full());
        assert_eq!(engine.state(), MatchState::InProgress);
    }

    #[test]
    fn test_full_board_rejects_further_moves() {
        let mut engine = MatchEngine::new(&GameConfig {
            board: BoardConfig { rows: 2, cols: 2 },
            ..GameConfig::default()
        })
        .unwrap();
        play(&mut engine, &[(0, 0), (0, 1), (1, 0), (1, 1)]);

        assert_eq!(
            engine.place_stone(1, 1),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(engine.state(), MatchState::InProgress);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = MatchEngine::default();
        engine.place_stone(7, 7).unwrap();
        let before = engine.grid().clone();

        assert_eq!(
            engine.place_stone(7, 7),
            Err(MoveError::Occupied { row: 7, col: 7 })
        );
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.current_player(), PlayerId::Second);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = MatchEngine::default();
        engine.place_stone(0, 0).unwrap();
        let before = engine.grid().clone();

        for (row, col) in [(15, 0), (0, 15), (15, 15), (usize::MAX, 3)] {
            let err = engine.place_stone(row, col).unwrap_err();
            assert!(matches!(err, MoveError::OutOfBounds(_)), "{row},{col}");
        }
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.current_player(), PlayerId::Second);
        assert_eq!(engine.last_move(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_row_win() {
        let mut engine = MatchEngine::default();
        let moves = with_filler(&[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]);
        let results = play(&mut engine, &moves);

        assert!(results[..results.len() - 1].iter().all(|r| !r.is_terminal()));
        let last = results.last().unwrap();
        assert_eq!(*last, Placement::Won { winner: PlayerId::First });
        assert_eq!(last.winner(), Some(PlayerId::First));
        assert_eq!(engine.state(), MatchState::Won(PlayerId::First));
        // Turn does not advance on a win
        assert_eq!(engine.current_player(), PlayerId::First);
    }

    #[test]
    fn test_column_win_for_second_player() {
        let mut engine = MatchEngine::default();
        let moves = [
            (14, 14),
            (2, 4),
            (14, 12),
            (3, 4),
            (14, 10),
            (4, 4),
            (14, 8),
            (5, 4),
            (12, 0),
            (6, 4),
        ];
        let results = play(&mut engine, &moves);

        assert_eq!(
            results.last(),
            Some(&Placement::Won { winner: PlayerId::Second })
        );
        assert_eq!(engine.winner(), Some(PlayerId::Second));
        assert_eq!(engine.player(PlayerId::Second).name(), "Player 2");
    }

    #[test]
    fn test_diagonal_win_in_order() {
        let mut engine = MatchEngine::default();
        let moves = with_filler(&[(5, 5), (6, 6), (7, 7), (8, 8), (9, 9)]);
        let results = play(&mut engine, &moves);
        assert_eq!(
            results.last(),
            Some(&Placement::Won { winner: PlayerId::First })
        );
    }

    #[test]
    fn test_diagonal_win_completed_in_middle() {
        let mut engine = MatchEngine::default();
        let moves = with_filler(&[(9, 9), (5, 5), (8, 8), (6, 6), (7, 7)]);
        let results = play(&mut engine, &moves);
        assert_eq!(
            results.last(),
            Some(&Placement::Won { winner: PlayerId::First })
        );
        assert_eq!(engine.cell(7, 7), Ok(Stone::Black));
    }

    #[test]
    fn test_diagonal_win_completed_at_end() {
        let mut engine = MatchEngine::default();
        let moves = with_filler(&[(7, 7), (9, 9), (6, 6), (8, 8), (5, 5)]);
        let results = play(&mut engine, &moves);
        assert_eq!(
            results.last(),
            Some(&Placement::Won { winner: PlayerId::First })
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut engine = MatchEngine::default();
        let moves = with_filler(&[(10, 2), (8, 4), (6, 6), (9, 3), (7, 5)]);
        let results = play(&mut engine, &moves);
        assert_eq!(
            results.last(),
            Some(&Placement::Won { winner: PlayerId::First })
        );
    }

    #[test]
    fn test_moves_rejected_after_win() {
        let mut engine = MatchEngine::default();
        play(&mut engine, &with_filler(&[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]));
        let before = engine.grid().clone();

        assert_eq!(
            engine.place_stone(10, 10),
            Err(MoveError::GameOver { winner: PlayerId::First })
        );
        assert_eq!(engine.grid(), &before);
        assert_eq!(engine.cell(10, 10), Ok(Stone::Empty));
    }

    #[test]
    fn test_restart_after_win() {
        let mut engine = MatchEngine::default();
        play(&mut engine, &with_filler(&[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]));
        assert_eq!(engine.winner(), Some(PlayerId::First));

        engine.restart();

        assert_eq!(engine.state(), MatchState::InProgress);
        assert_eq!(engine.current_player(), PlayerId::First);
        assert_eq!(engine.grid(), &Grid::new(15, 15).unwrap());
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.last_move(), None);
        assert!(engine.place_stone(7, 7).is_ok());
    }

    #[test]
    fn test_restart_keeps_first_mover_after_second_wins() {
        let mut engine = MatchEngine::default();
        play(
            &mut engine,
            &[
                (14, 14),
                (2, 4),
                (14, 12),
                (3, 4),
                (14, 10),
                (4, 4),
                (14, 8),
                (5, 4),
                (12, 0),
                (6, 4),
            ],
        );
        assert_eq!(engine.winner(), Some(PlayerId::Second));

        engine.restart();
        assert_eq!(engine.current_player(), PlayerId::First);
        assert_eq!(
            engine.place_stone(0, 0),
            Ok(Placement::Continue { next: PlayerId::Second })
        );
        assert_eq!(engine.cell(0, 0), Ok(Stone::Black));
    }

    #[test]
    fn test_restart_mid_game() {
        let mut engine = MatchEngine::default();
        play(&mut engine, &[(1, 1), (2, 2), (3, 3)]);
        assert_eq!(engine.current_player(), PlayerId::Second);

        engine.restart();
        assert_eq!(engine.current_player(), PlayerId::First);
        assert_eq!(engine.grid().stone_count(), 0);
    }

    #[test]
    fn test_custom_colors() {
        let mut config = GameConfig::default();
        config.players[0].color = Color::White;
        config.players[1].color = Color::Black;
        let mut engine = MatchEngine::new(&config).unwrap();

        engine.place_stone(4, 4).unwrap();
        assert_eq!(engine.cell(4, 4), Ok(Stone::White));
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let engine = MatchEngine::default();
        assert!(matches!(
            engine.cell(15, 0),
            Err(GridError::OutOfBounds { row: 15, col: 0, .. })
        ));
    }
}
