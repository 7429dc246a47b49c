use super::history::PathHistory;
use super::point::Point;
use crate::consts;

/// One cell of the snake's body.
///
/// A segment never moves on its own: every tick it replays the shared path
/// history, adopting the entry under its cursor and then advancing the
/// cursor by one.  The cursor starts
/// [`SEGMENT_SPACING`][consts::SEGMENT_SPACING] entries behind the previous
/// segment's and may be negative at first; until it catches up with a
/// recorded entry the segment has no position, so it is neither drawn nor
/// collidable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct TrailingSegment {
    /// 1-based creation order, counted outward from the head
    pub(super) ordinal: usize,

    /// Next index into the path history; advances by exactly one per tick
    /// and never goes backwards
    pub(super) cursor: i64,

    pub(super) pos: Option<Point>,
}

impl TrailingSegment {
    /// Create the `ordinal`-th segment at a moment when the shared history
    /// holds `history_len` entries
    pub(super) fn new(history_len: usize, ordinal: usize) -> TrailingSegment {
        let cursor = history_len as i64 - consts::SEGMENT_SPACING * ordinal as i64;
        TrailingSegment {
            ordinal,
            cursor,
            pos: None,
        }
    }

    pub(super) fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The segment's display position, once its cursor has caught up with
    /// the recorded history
    pub(super) fn position(&self) -> Option<Point> {
        self.pos
    }

    /// Replay one tick.  The cursor advances whether or not it was in
    /// range, so a freshly spawned segment catches up monotonically and
    /// thereafter stays exactly `SEGMENT_SPACING × ordinal` entries behind
    /// the head.
    pub(super) fn advance(&mut self, history: &PathHistory) {
        if let Ok(index) = usize::try_from(self.cursor) {
            if let Some(pos) = history.get(index) {
                self.pos = Some(pos);
            }
        }
        self.cursor += 1;
    }
}
