//! Player session - one player's engine plus score, level, gravity and loss
//!
//! A session wraps an [`Engine`] and adds the scoring rules:
//!
//! - soft drop: +1 per successful row
//! - hard drop: +2 per row travelled, then lock
//! - line clear: `LINE_SCORES[n] * level`, using the level before the clear
//!
//! Once `lost` is set every mutating operation becomes a no-op.

use crate::engine::Engine;
use crate::rng::PieceSource;
use crate::scoring::{calculate_drop_score, calculate_line_score, drop_interval_ms, level_for_lines};
use crate::snapshot::{SessionSnapshot, SessionStats};
use crate::types::{GameAction, PlayerId, BASE_DROP_MS};

/// What happened on the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_score: u32,
    /// The following spawn collided and the session is now lost.
    pub topped_out: bool,
}

#[derive(Debug)]
pub struct PlayerSession {
    id: PlayerId,
    engine: Engine,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    lost: bool,
    opponent: Option<PlayerId>,
    last_event: Option<LockEvent>,
}

impl PlayerSession {
    pub fn new(id: PlayerId, source: impl PieceSource + 'static) -> Self {
        Self::with_engine(id, Engine::new(source))
    }

    /// Wrap an existing engine (its board and pieces are kept as they are).
    pub fn with_engine(id: PlayerId, engine: Engine) -> Self {
        Self {
            id,
            engine,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            lost: false,
            opponent: None,
            last_event: None,
        }
    }

    /// Back to a fresh game: empty board, zeroed stats, not lost.
    ///
    /// The opponent link is kept.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.lost = false;
        self.last_event = None;
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn opponent(&self) -> Option<PlayerId> {
        self.opponent
    }

    pub fn set_opponent(&mut self, opponent: Option<PlayerId>) {
        self.opponent = opponent;
    }

    pub fn move_piece(&mut self, dx: i8) -> bool {
        !self.lost && self.engine.move_piece(dx, 0)
    }

    pub fn rotate_piece(&mut self) -> bool {
        !self.lost && self.engine.rotate_piece()
    }

    /// One row down, +1 point on success. A blocked soft drop does not lock.
    pub fn soft_drop(&mut self) -> bool {
        if self.lost || !self.engine.move_piece(0, 1) {
            return false;
        }
        self.score = self.score.saturating_add(calculate_drop_score(1, false));
        true
    }

    /// Drop to the landing row, score 2 points per row, then lock.
    pub fn hard_drop(&mut self) -> bool {
        if self.lost {
            return false;
        }

        let mut rows = 0u32;
        while self.engine.move_piece(0, 1) {
            rows += 1;
        }
        self.score = self.score.saturating_add(calculate_drop_score(rows, true));
        self.lock_and_clear();
        true
    }

    /// Route one action. `Pause` is not a session concern and returns false.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate_piece(),
            GameAction::Pause => false,
        }
    }

    /// Advance gravity by `delta_ms`.
    ///
    /// At most one gravity step per call; the timer restarts from zero after
    /// every step. Returns true when a step happened.
    pub fn update(&mut self, delta_ms: u32) -> bool {
        if self.lost {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(delta_ms);
        if self.drop_timer_ms < self.drop_interval_ms {
            return false;
        }

        if !self.engine.move_piece(0, 1) {
            self.lock_and_clear();
        }
        self.drop_timer_ms = 0;
        true
    }

    fn lock_and_clear(&mut self) {
        self.engine.lock_piece();
        let cleared = self.engine.clear_lines();

        let mut line_score = 0;
        if cleared > 0 {
            line_score = calculate_line_score(cleared, self.level);
            self.score = self.score.saturating_add(line_score);
            self.lines = self.lines.saturating_add(cleared as u32);

            let level = level_for_lines(self.lines);
            if level > self.level {
                self.level = level;
                self.drop_interval_ms = drop_interval_ms(level);
            }

            tracing::debug!(
                player = self.id.number(),
                cleared,
                line_score,
                level = self.level,
                "lines cleared"
            );
        }

        self.drop_timer_ms = 0;
        let topped_out = !self.engine.spawn_new_piece();
        if topped_out {
            self.lost = true;
            tracing::info!(player = self.id.number(), score = self.score, "topped out");
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            line_score,
            topped_out,
        });
    }

    /// The most recent lock since the last call, if any.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            score: self.score,
            level: self.level,
            lines: self.lines,
            lost: self.lost,
        }
    }

    /// Fill an existing snapshot in place (no ghost once lost).
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.player = self.id;
        out.opponent = self.opponent;
        out.stats = self.stats();
        self.engine.snapshot_into(&mut out.board, !self.lost);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::new(self.id);
        self.snapshot_into(&mut out);
        out
    }
}
