use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Whether a board position is still playable or has reached a terminal
/// state. Any single remaining peg counts as a win, wherever it sits; a
/// center finish is flavor, not a stricter condition.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Playing
    }
}

/// A single jump: the peg at `from` leaps over the peg at `over` into the
/// empty hole at `to`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Pos,
    pub over: Pos,
    pub to: Pos,
}

impl Move {
    /// Builds the jump between `from` and `to`, deriving the jumped-over
    /// midpoint. `None` unless the displacement is exactly two holes along
    /// one cardinal axis.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        let dr = from.0.abs_diff(to.0);
        let dc = from.1.abs_diff(to.1);
        if !matches!((dr, dc), (2, 0) | (0, 2)) {
            return None;
        }

        let mid = |a: Coord, b: Coord| ((a as u16 + b as u16) / 2) as Coord;
        Some(Self {
            from,
            over: (mid(from.0, to.0), mid(from.1, to.1)),
            to,
        })
    }
}

/// Single source of truth for jump legality: `from` holds a peg, `to` is an
/// in-bounds empty hole exactly two holes away along one cardinal axis, and
/// the midpoint holds a peg. Out-of-bounds positions are simply illegal,
/// which is what lets untrusted hint replies funnel through here.
pub fn is_legal_move(board: &Board, mv: &Move) -> bool {
    // Re-derive the midpoint so hand-built moves with a bogus `over` fail.
    let Some(derived) = Move::between(mv.from, mv.to) else {
        return false;
    };
    if derived.over != mv.over {
        return false;
    }

    matches!(board.get(mv.from), Some(Cell::Peg))
        && matches!(board.get(mv.over), Some(Cell::Peg))
        && matches!(board.get(mv.to), Some(Cell::Empty))
}

/// Every position reachable from `from` by one legal jump. Order is
/// unspecified; callers treat the result as a set.
pub fn legal_targets(board: &Board, from: Pos) -> Vec<Pos> {
    board
        .iter_jumps(from)
        .filter_map(|(over, to)| {
            let mv = Move { from, over, to };
            is_legal_move(board, &mv).then_some(to)
        })
        .collect()
}

/// Applies a validated jump. Pure transformation: no legality re-check in
/// release builds, callers go through `is_legal_move` first.
pub fn apply_move(board: &mut Board, mv: &Move) {
    debug_assert!(is_legal_move(board, mv), "apply_move requires a legal move");

    board.set(mv.from, Cell::Empty);
    board.set(mv.over, Cell::Empty);
    board.set(mv.to, Cell::Peg);
}

/// Whether any peg on the board still has a legal jump.
pub fn has_any_move(board: &Board) -> bool {
    board.positions().any(|from| {
        board.cell_at(from).is_peg()
            && board
                .iter_jumps(from)
                .any(|(over, to)| is_legal_move(board, &Move { from, over, to }))
    })
}

/// Terminal detection: a read-only scan invoked after each board mutation.
pub fn evaluate(board: &Board) -> Status {
    if has_any_move(board) {
        Status::Playing
    } else if board.peg_count() == 1 {
        Status::Won
    } else {
        Status::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn sparse_board(pegs: &[Pos]) -> Board {
        let mut cells = Array2::from_elem((7, 7), Cell::Empty);
        for &pos in pegs {
            cells[pos.to_nd_index()] = Cell::Peg;
        }
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn between_accepts_only_cardinal_distance_two() {
        let mv = Move::between((1, 3), (3, 3)).unwrap();
        assert_eq!(mv.over, (2, 3));

        let mv = Move::between((3, 5), (3, 3)).unwrap();
        assert_eq!(mv.over, (3, 4));

        assert_eq!(Move::between((1, 1), (3, 3)), None);
        assert_eq!(Move::between((2, 3), (3, 3)), None);
        assert_eq!(Move::between((0, 3), (3, 3)), None);
        assert_eq!(Move::between((3, 3), (3, 3)), None);
    }

    #[test]
    fn legal_targets_agrees_with_the_legality_predicate() {
        let board = Board::standard();

        for from in board.positions() {
            let targets = legal_targets(&board, from);
            for to in board.positions() {
                let legal = Move::between(from, to)
                    .is_some_and(|mv| is_legal_move(&board, &mv));
                assert_eq!(targets.contains(&to), legal, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn initial_position_has_exactly_four_moves() {
        let board = Board::standard();

        let movable: Vec<Pos> = board
            .positions()
            .filter(|&pos| board.cell_at(pos).is_peg() && !legal_targets(&board, pos).is_empty())
            .collect();

        assert_eq!(movable, [(1, 3), (3, 1), (3, 5), (5, 3)]);
        assert_eq!(legal_targets(&board, (1, 3)), [(3, 3)]);
    }

    #[test]
    fn apply_move_removes_one_peg_and_nothing_else() {
        let mut board = Board::standard();
        let before = board.clone();
        let mv = Move::between((1, 3), (3, 3)).unwrap();
        assert!(is_legal_move(&board, &mv));

        apply_move(&mut board, &mv);

        assert_eq!(board.peg_count(), before.peg_count() - 1);
        assert_eq!(board.cell_at((1, 3)), Cell::Empty);
        assert_eq!(board.cell_at((2, 3)), Cell::Empty);
        assert_eq!(board.cell_at((3, 3)), Cell::Peg);
        for pos in board.positions() {
            if ![(1, 3), (2, 3), (3, 3)].contains(&pos) {
                assert_eq!(board.cell_at(pos), before.cell_at(pos), "{pos:?}");
            }
        }
    }

    #[test]
    fn diagonal_jump_is_illegal_even_with_pegs_around() {
        let board = sparse_board(&[(1, 1), (2, 2), (1, 2), (2, 1)]);

        let mv = Move {
            from: (1, 1),
            over: (2, 2),
            to: (3, 3),
        };
        assert!(!is_legal_move(&board, &mv));
    }

    #[test]
    fn bogus_midpoint_is_rejected() {
        let board = Board::standard();

        // Displacement is a jump but `over` does not sit between the holes.
        let mv = Move {
            from: (1, 3),
            over: (2, 4),
            to: (3, 3),
        };
        assert!(!is_legal_move(&board, &mv));
    }

    #[test]
    fn standard_board_evaluates_to_playing() {
        assert_eq!(evaluate(&Board::standard()), Status::Playing);
    }

    #[test]
    fn lone_peg_anywhere_is_a_win() {
        assert_eq!(evaluate(&sparse_board(&[(3, 3)])), Status::Won);
        assert_eq!(evaluate(&sparse_board(&[(0, 6)])), Status::Won);
    }

    #[test]
    fn stranded_pegs_are_a_loss() {
        // No cardinal (peg, peg, empty) run anywhere.
        assert_eq!(evaluate(&sparse_board(&[(0, 0), (6, 6)])), Status::Lost);
        assert_eq!(
            evaluate(&sparse_board(&[(0, 0), (2, 0), (4, 0)])),
            Status::Lost
        );
    }

    #[test]
    fn adjacent_pegs_with_room_keep_playing() {
        assert_eq!(evaluate(&sparse_board(&[(3, 3), (3, 4)])), Status::Playing);
    }
}
