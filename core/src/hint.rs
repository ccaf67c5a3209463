use serde::{Deserialize, Serialize};

use crate::*;

/// Monotonic identifier for hint requests. A reply carrying anything but the
/// currently pending sequence number is dropped, so a slow collaborator can
/// never reinstate a hint over a newer request or a manual move.
pub type HintSeq = u64;

/// Snapshot handed to the hint collaborator. The board is a deep copy; the
/// live game can move on while the request is in flight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HintRequest {
    pub seq: HintSeq,
    pub board: Board,
}

/// Engine-side disposition of a collaborator reply.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HintOutcome {
    /// Reply belongs to a superseded request or a board that has since
    /// changed; ignored.
    Stale,
    /// The collaborator found no move, or its suggestion failed
    /// re-validation. Callers surface this as a transient notice.
    Unavailable,
    /// Legal suggestion, now stored as the advisory overlay.
    Suggested(Move),
}

impl HintOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Suggested(_))
    }
}
