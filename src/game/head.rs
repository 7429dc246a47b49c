use super::point::Point;
use crate::consts;

/// The snake's head: a heading-seeking mover.
///
/// All positions are anchors (top-left corners) of an
/// [`ENTITY_SIZE`][consts::ENTITY_SIZE]-sized box in play-area coordinates.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Head {
    /// Current anchor position
    pub(super) pos: Point,

    /// Heading in radians; 0 points east, and a positive quarter turn
    /// points south (y grows downward)
    pub(super) heading: f64,

    /// The target the heading was last computed against
    pub(super) last_target: Point,
}

impl Head {
    /// Create a head at the center of the play area, heading east
    pub(super) fn new() -> Head {
        Head {
            pos: Point::new(consts::PLAY_WIDTH / 2.0, consts::PLAY_HEIGHT / 2.0),
            heading: 0.0,
            last_target: Point::ZERO,
        }
    }

    pub(super) fn position(&self) -> Point {
        self.pos
    }

    /// Advance one unit toward `target`, re-aiming first if the target has
    /// moved since the last tick.  Aiming measures from the center of the
    /// head's box, so the head settles centered on the pointer rather than
    /// cornered on it.  While the target stays put the heading stays put
    /// too, and the head just keeps drifting along it.
    pub(super) fn advance(&mut self, target: Point) -> Point {
        if target != self.last_target {
            let dx = target.x - self.pos.x - consts::ENTITY_SIZE / 2.0;
            let dy = target.y - self.pos.y - consts::ENTITY_SIZE / 2.0;
            self.heading = dy.atan2(dx);
            self.last_target = target;
        }
        self.pos.x += self.heading.cos();
        self.pos.y += self.heading.sin();
        self.pos
    }

    /// Is the head's box entirely inside the play area?  An anchor at
    /// exactly `PLAY_WIDTH - ENTITY_SIZE` (or the vertical equivalent)
    /// already counts as out.
    pub(super) fn in_bounds(&self) -> bool {
        (0.0..consts::PLAY_WIDTH - consts::ENTITY_SIZE).contains(&self.pos.x)
            && (0.0..consts::PLAY_HEIGHT - consts::ENTITY_SIZE).contains(&self.pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPSILON: f64 = 1e-9;

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < EPSILON && (p.y - y).abs() < EPSILON,
            "{p:?} is not near ({x}, {y})"
        );
    }

    #[test]
    fn drifts_east_until_target_moves() {
        let mut head = Head::new();
        head.advance(Point::ZERO);
        head.advance(Point::ZERO);
        assert_close(head.position(), 402.0, 300.0);
    }

    #[test]
    fn stationary_target_keeps_heading() {
        let mut head = Head::new();
        // Target center 100 units due east of the head's center
        let target = Point::new(540.0, 340.0);
        head.advance(target);
        assert_close(head.position(), 401.0, 300.0);
        // The head has moved, but the target hasn't, so no re-aim happens
        head.advance(target);
        assert_close(head.position(), 402.0, 300.0);
        assert!(head.heading.abs() < EPSILON);
    }

    #[test]
    fn moved_target_reaims() {
        let mut head = Head::new();
        head.advance(Point::new(540.0, 340.0));
        // Due west of the head's new center
        head.advance(Point::new(240.0, 341.0));
        assert!((head.heading.abs() - std::f64::consts::PI).abs() < 0.02);
        assert!((head.position().x - 400.0).abs() < 1e-4);
    }

    #[rstest]
    #[case(Point::new(400.0, 300.0), true)]
    #[case(Point::new(0.0, 0.0), true)]
    #[case(Point::new(719.0, 300.0), true)]
    #[case(Point::new(719.9, 300.0), true)]
    #[case(Point::new(720.0, 300.0), false)]
    #[case(Point::new(-0.1, 300.0), false)]
    #[case(Point::new(400.0, 519.9), true)]
    #[case(Point::new(400.0, 520.0), false)]
    #[case(Point::new(400.0, -1.0), false)]
    fn test_in_bounds(#[case] pos: Point, #[case] inside: bool) {
        let head = Head {
            pos,
            heading: 0.0,
            last_target: Point::ZERO,
        };
        assert_eq!(head.in_bounds(), inside);
    }
}
