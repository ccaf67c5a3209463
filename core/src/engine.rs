use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of a `select` call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
    Moved,
    Won,
    Lost,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Selected => true,
            Moved => true,
            Won => true,
            Lost => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UndoOutcome {
    NoChange,
    Reverted,
}

impl UndoOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Reverted => true,
        }
    }
}

/// The game-state aggregate: current board, undo history, selection, status,
/// and the advisory hint overlay. All mutation goes through the operations
/// below; history entries are deep snapshots, so undo is exact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    history: Vec<Board>,
    selected: Option<Pos>,
    status: Status,
    hint: Option<Move>,
    hint_seq: HintSeq,
    pending_hint: Option<HintSeq>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_board(Board::standard())
    }

    /// Starts from an arbitrary position, evaluating its status up front.
    pub fn with_board(board: Board) -> Self {
        let status = evaluate(&board);
        Self {
            board,
            history: Vec::new(),
            selected: None,
            status,
            hint: None,
            hint_seq: 0,
            pending_hint: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    pub fn hint(&self) -> Option<Move> {
        self.hint
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn hint_pending(&self) -> bool {
        self.pending_hint.is_some()
    }

    pub fn pegs_left(&self) -> CellCount {
        self.board.peg_count()
    }

    /// Landing holes reachable from the current selection; empty when
    /// nothing is selected. Presentation-only query.
    pub fn valid_targets(&self) -> Vec<Pos> {
        match self.selected {
            Some(from) => legal_targets(&self.board, from),
            None => Vec::new(),
        }
    }

    /// The single user-facing entry point for pegs and moves. Clicking a peg
    /// selects it; clicking an empty hole while a peg is selected attempts
    /// the jump. Illegal attempts change nothing and keep the selection so
    /// the user can pick another target.
    pub fn select(&mut self, pos: Pos) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let pos = self.board.validate_pos(pos)?;

        if self.status.is_finished() {
            return Ok(NoChange);
        }

        Ok(match self.board.cell_at(pos) {
            Cell::Peg => {
                // A fresh selection invalidates the displayed hint but not a
                // request in flight: the board is unchanged.
                self.hint = None;
                self.selected = Some(pos);
                Selected
            }
            Cell::Empty => match self.selected {
                Some(from) => self.try_move(from, pos),
                None => NoChange,
            },
            Cell::Invalid => NoChange,
        })
    }

    fn try_move(&mut self, from: Pos, to: Pos) -> SelectOutcome {
        let Some(mv) = Move::between(from, to) else {
            return SelectOutcome::NoChange;
        };
        if !is_legal_move(&self.board, &mv) {
            return SelectOutcome::NoChange;
        }

        self.history.push(self.board.clone());
        apply_move(&mut self.board, &mv);
        self.selected = None;
        self.clear_hint();
        self.status = evaluate(&self.board);
        log::debug!(
            "jump {:?} over {:?} to {:?}, {} pegs left",
            mv.from,
            mv.over,
            mv.to,
            self.board.peg_count()
        );

        match self.status {
            Status::Playing => SelectOutcome::Moved,
            Status::Won => SelectOutcome::Won,
            Status::Lost => SelectOutcome::Lost,
        }
    }

    /// Reverts the latest jump. Always lands back in `Playing`: the restored
    /// board had at least one legal move, the one just undone.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(snapshot) = self.history.pop() else {
            return UndoOutcome::NoChange;
        };

        self.board = snapshot;
        self.selected = None;
        self.clear_hint();
        self.status = Status::Playing;
        log::debug!("undo, {} snapshots left", self.history.len());
        UndoOutcome::Reverted
    }

    /// Back to the standard opening position. Always succeeds.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.history.clear();
        self.selected = None;
        self.clear_hint();
        self.status = Status::Playing;
    }

    /// Opens a hint request: bumps the sequence counter, marks it pending,
    /// and returns the snapshot to ship to the collaborator. `None` once the
    /// game is over. Re-issuing while a request is in flight supersedes it.
    pub fn begin_hint(&mut self) -> Option<HintRequest> {
        if self.status.is_finished() {
            return None;
        }

        self.hint_seq += 1;
        self.pending_hint = Some(self.hint_seq);
        log::debug!("hint request #{} issued", self.hint_seq);
        Some(HintRequest {
            seq: self.hint_seq,
            board: self.board.clone(),
        })
    }

    /// Feeds a collaborator reply back in. The suggestion is untrusted:
    /// it is re-validated against the current board and dropped when stale,
    /// absent, or illegal. Never mutates board, selection, or status.
    pub fn resolve_hint(&mut self, seq: HintSeq, suggestion: Option<(Pos, Pos)>) -> HintOutcome {
        if self.pending_hint != Some(seq) {
            log::debug!("hint reply #{seq} dropped as stale");
            return HintOutcome::Stale;
        }
        self.pending_hint = None;

        let Some((from, to)) = suggestion else {
            return HintOutcome::Unavailable;
        };
        let Some(mv) = Move::between(from, to) else {
            log::warn!("hint reply #{seq} is not a jump: {from:?} -> {to:?}");
            return HintOutcome::Unavailable;
        };
        if !is_legal_move(&self.board, &mv) {
            log::warn!("hint reply #{seq} fails re-validation: {from:?} -> {to:?}");
            return HintOutcome::Unavailable;
        }

        self.hint = Some(mv);
        HintOutcome::Suggested(mv)
    }

    /// Clears the overlay and orphans any in-flight request; called on every
    /// board mutation.
    fn clear_hint(&mut self) {
        self.hint = None;
        self.pending_hint = None;
    }
}
