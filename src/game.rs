use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    config::GameConfig,
    coordinate::Coordinate,
    fleet::random_board,
    player::TargetSource,
};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// Decides who shoots next and whether someone has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResolver {
    active: Side,
    fleet_size: usize,
}

impl TurnResolver {
    /// `first` shoots first; `fleet_size` ships must be sunk to win.
    pub fn new(first: Side, fleet_size: usize) -> Self {
        Self {
            active: first,
            fleet_size,
        }
    }

    /// Side whose move it is.
    pub fn active(&self) -> Side {
        self.active
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    /// Apply the outcome of a resolved shot and return the side to move.
    /// A non-lethal hit keeps the turn; a miss or a sinking passes it.
    pub fn advance(&mut self, outcome: ShotOutcome) -> Side {
        if outcome != ShotOutcome::Hit {
            self.active = self.active.other();
        }
        self.active
    }

    /// Winner given the number of ships sunk on A's board and on B's board.
    /// A side wins once its opponent's whole fleet is down.
    pub fn winner(&self, sunk_on_a: usize, sunk_on_b: usize) -> Option<Side> {
        if sunk_on_b >= self.fleet_size {
            Some(Side::A)
        } else if sunk_on_a >= self.fleet_size {
            Some(Side::B)
        } else {
            None
        }
    }
}

/// Summary of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Side to move after this shot.
    pub next: Side,
}

/// Both sides' boards plus the turn state. Side A moves first.
#[derive(Debug, Clone)]
pub struct Game {
    boards: [Board; 2],
    turn: TurnResolver,
    status: GameStatus,
    shots: [usize; 2],
}

impl Game {
    /// Start a game on already populated boards. `board_a` belongs to side A
    /// and is the one side B shoots at.
    pub fn new(board_a: Board, board_b: Board, fleet_size: usize) -> Self {
        Self {
            boards: [board_a, board_b],
            turn: TurnResolver::new(Side::A, fleet_size),
            status: GameStatus::InProgress,
            shots: [0; 2],
        }
    }

    /// Place a random fleet for each side and start the game.
    pub fn from_config<R: Rng>(rng: &mut R, config: &GameConfig) -> Result<Self, BoardError> {
        let board_a = random_board(rng, config)?;
        let board_b = random_board(rng, config)?;
        Ok(Self::new(board_a, board_b, config.fleet_size()))
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn active(&self) -> Side {
        self.turn.active()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Shots resolved by `side` so far, rejected ones excluded.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Fire the active side's shot at the opponent's board.
    ///
    /// Errors leave the game untouched, including whose turn it is.
    pub fn fire(&mut self, target: Coordinate) -> Result<MoveReport, BoardError> {
        if let GameStatus::Won(_) = self.status {
            return Err(BoardError::GameOver);
        }
        let shooter = self.turn.active();
        let outcome = self.boards[shooter.other().index()].receive_shot(target)?;
        self.shots[shooter.index()] += 1;
        let next = self.turn.advance(outcome);
        log::trace!("{:?} fired at {:?}: {:?}", shooter, target, outcome);

        let sunk_on_a = self.boards[Side::A.index()].sunk_count();
        let sunk_on_b = self.boards[Side::B.index()].sunk_count();
        if let Some(winner) = self.turn.winner(sunk_on_a, sunk_on_b) {
            log::info!("{:?} wins after {} shots", winner, self.shots[winner.index()]);
            self.status = GameStatus::Won(winner);
        }
        Ok(MoveReport {
            shooter,
            target,
            outcome,
            next,
        })
    }

    /// Ask `source` for targets until one is accepted.
    ///
    /// Off-grid and repeated targets are handed back to the source and do not
    /// use up the turn. Returns `Ok(None)` if the source runs dry.
    pub fn take_move<S>(&mut self, source: &mut S) -> Result<Option<MoveReport>, BoardError>
    where
        S: TargetSource + ?Sized,
    {
        loop {
            let target = {
                let view = self.board(self.active().other()).view();
                source.next_target(&view)
            };
            let Some(target) = target else {
                return Ok(None);
            };
            match self.fire(target) {
                Ok(report) => return Ok(Some(report)),
                Err(err @ (BoardError::OutOfBounds { .. } | BoardError::RepeatShot { .. })) => {
                    source.handle_rejected(target, &err);
                }
                Err(err) => return Err(err),
            }
        }
    }
}
