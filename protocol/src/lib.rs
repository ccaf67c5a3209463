//! Wire types for the external hint collaborator.
//!
//! The collaborator receives the board as plain text and answers with a JSON
//! document naming at most one move. Transport, prompting, and credentials
//! live outside this workspace; the engine re-validates whatever comes back.

use brainvita_core::{Board, Cell, Pos};
use serde::{Deserialize, Serialize};

/// Renders a board in the collaborator's text form: one row per line, `P`
/// for a peg, `E` for an empty hole, `.` for holes outside the cross.
pub fn encode_board(board: &Board) -> String {
    let size = board.size();
    let mut text = String::with_capacity(usize::from(size) * (usize::from(size) + 1));

    for r in 0..size {
        if r > 0 {
            text.push('\n');
        }
        for c in 0..size {
            text.push(match board.cell_at((r, c)) {
                Cell::Peg => 'P',
                Cell::Empty => 'E',
                Cell::Invalid => '.',
            });
        }
    }

    text
}

/// 0-indexed `(row, column)` pair as the collaborator spells it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintCoords {
    pub r: u8,
    pub c: u8,
}

/// JSON reply schema. `from`/`to` are only meaningful when `has_move` is
/// set; `explanation` is free-form collaborator prose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub has_move: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<HintCoords>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<HintCoords>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl HintResponse {
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The suggested move as engine positions. `None` when the collaborator
    /// reports no move or omits a coordinate; legality is the engine's call.
    pub fn suggestion(&self) -> Option<(Pos, Pos)> {
        if !self.has_move {
            return None;
        }
        let from = self.from?;
        let to = self.to?;
        Some(((from.r, from.c), (to.r, to.c)))
    }
}
