use super::head::Head;
use super::history::PathHistory;
use super::point::Point;
use super::segment::TrailingSegment;
use crate::consts;
use rand::Rng;

/// Pure simulation state for one game session: the head, the shared path
/// history it records into, the trailing segments replaying that history,
/// the apple, and the score.  Knows nothing about terminals or timers; the
/// [`Game`][super::Game] screen drives it and draws it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    pub(super) head: Head,
    pub(super) history: PathHistory,
    pub(super) segments: Vec<TrailingSegment>,
    pub(super) apple: Point,
    pub(super) score: u32,
}

impl<R: Rng> Session<R> {
    pub(crate) fn new_with_rng(mut rng: R) -> Session<R> {
        let apple = random_apple(&mut rng);
        Session {
            rng,
            head: Head::new(),
            history: PathHistory::new(),
            segments: Vec::new(),
            apple,
            score: 0,
        }
    }

    /// Run one simulation tick, steering toward `target`.  Everything
    /// happens synchronously in a fixed order: the head moves and records
    /// its position, every segment replays one history entry, and only then
    /// are the session-ending and growth conditions evaluated.
    pub(crate) fn tick(&mut self, target: Point) -> TickOutcome {
        let head_pos = self.head.advance(target);
        self.history.push(head_pos);
        for segment in &mut self.segments {
            segment.advance(&self.history);
        }
        if !self.head.in_bounds() {
            return TickOutcome::GameOver(GameOverCause::OutOfBounds);
        }
        if self.self_collision() {
            return TickOutcome::GameOver(GameOverCause::SelfCollision);
        }
        if head_pos.overlaps(self.apple) {
            self.grow();
            return TickOutcome::AppleEaten;
        }
        TickOutcome::Continue
    }

    /// Does the head overlap any collidable segment?  Segments that have
    /// not yet become active are skipped, as are the
    /// [`COLLISION_EXEMPT_SEGMENTS`][consts::COLLISION_EXEMPT_SEGMENTS]
    /// segments nearest the head.
    fn self_collision(&self) -> bool {
        let head = self.head.position();
        self.segments
            .iter()
            .filter(|segment| segment.ordinal() > consts::COLLISION_EXEMPT_SEGMENTS)
            .filter_map(TrailingSegment::position)
            .any(|pos| head.overlaps(pos))
    }

    /// A growth event: bump the score, spawn the next trailing segment one
    /// spacing further down the history, and re-place the apple
    fn grow(&mut self) {
        self.score += 1;
        let ordinal = self.segments.len() + 1;
        self.segments
            .push(TrailingSegment::new(self.history.len(), ordinal));
        self.apple = random_apple(&mut self.rng);
    }

    /// Start the session over: empty history, no segments, zero score, head
    /// back at the center, fresh apple.  Calling this twice leaves the same
    /// state as calling it once.
    pub(crate) fn reset(&mut self) {
        self.head = Head::new();
        self.history.clear();
        self.segments.clear();
        self.score = 0;
        self.apple = random_apple(&mut self.rng);
    }
}

impl<R> Session<R> {
    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn apple(&self) -> Point {
        self.apple
    }

    pub(crate) fn head_position(&self) -> Point {
        self.head.position()
    }

    pub(crate) fn segments(&self) -> &[TrailingSegment] {
        &self.segments
    }
}

/// Place an apple uniformly at random, fully inside the play area.  Nothing
/// prevents it from landing under the snake's body.
fn random_apple<R: Rng>(rng: &mut R) -> Point {
    Point::new(
        rng.random_range(0.0..consts::PLAY_WIDTH - consts::ENTITY_SIZE),
        rng.random_range(0.0..consts::PLAY_HEIGHT - consts::ENTITY_SIZE),
    )
}

/// What a single tick amounted to.  Game over is a state transition, not an
/// error: the caller stops ticking and offers a restart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    Continue,
    AppleEaten,
    GameOver(GameOverCause),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameOverCause {
    OutOfBounds,
    SelfCollision,
}

impl GameOverCause {
    pub(crate) fn label(self) -> &'static str {
        match self {
            GameOverCause::OutOfBounds => "out of bounds",
            GameOverCause::SelfCollision => "self-collision",
        }
    }
}
