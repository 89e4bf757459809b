//! Game orchestrator - phases, action routing and match results
//!
//! ```text
//! Menu ──start──▶ Playing ◀──pause──▶ Paused
//!                    │
//!                    └── a session lost ──▶ GameOver(result)
//! ```
//!
//! `start`/`restart` leave any phase for a fresh `Playing`. In dual mode the
//! sessions are ticked in player order and checked together afterwards, so
//! two losses in the same tick end the match as a [`MatchResult::Draw`].

use crate::core::{OsRandom, PieceSource, PlayerSession, SessionSnapshot, SimpleRng};
use crate::types::{GameAction, GameMode, PlayerAction, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// Single mode: the final stats of the only player.
    Solo { score: u32, lines: u32, level: u32 },
    /// Dual mode: the player still standing.
    Winner(PlayerId),
    /// Dual mode: both players topped out in the same tick.
    Draw,
}

impl MatchResult {
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MatchResult::Winner(player) => Some(*player),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver(MatchResult),
}

#[derive(Debug)]
pub struct Game {
    mode: GameMode,
    phase: Phase,
    sessions: Vec<PlayerSession>,
}

impl Game {
    /// Create a game in the menu. A seed makes every session draw the same
    /// deterministic piece sequence; without one pieces come from the OS RNG.
    pub fn new(mode: GameMode, seed: Option<u64>) -> Self {
        Self::with_sources(mode, |_| match seed {
            Some(seed) => Box::new(SimpleRng::new(seed as u32 ^ (seed >> 32) as u32)),
            None => Box::new(OsRandom::new()),
        })
    }

    /// Create a game with one piece source per player.
    pub fn with_sources<F>(mode: GameMode, mut source_for: F) -> Self
    where
        F: FnMut(PlayerId) -> Box<dyn PieceSource>,
    {
        let sessions = mode
            .players()
            .iter()
            .map(|&player| {
                let engine = crate::core::Engine::with_source(source_for(player));
                PlayerSession::with_engine(player, engine)
            })
            .collect();

        let mut game = Self {
            mode,
            phase: Phase::Menu,
            sessions,
        };
        game.link_opponents();
        game
    }

    fn link_opponents(&mut self) {
        let dual = self.mode == GameMode::Dual;
        for session in &mut self.sessions {
            let opponent = dual.then(|| session.id().opponent());
            session.set_opponent(opponent);
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn result(&self) -> Option<MatchResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    pub fn sessions(&self) -> &[PlayerSession] {
        &self.sessions
    }

    pub fn session(&self, player: PlayerId) -> Option<&PlayerSession> {
        self.sessions.get(player.index())
    }

    pub fn session_mut(&mut self, player: PlayerId) -> Option<&mut PlayerSession> {
        self.sessions.get_mut(player.index())
    }

    pub fn snapshot(&self, player: PlayerId) -> Option<SessionSnapshot> {
        self.session(player).map(PlayerSession::snapshot)
    }

    /// Fresh sessions, straight into `Playing`.
    pub fn start(&mut self) {
        for session in &mut self.sessions {
            session.reset();
        }
        self.link_opponents();
        self.phase = Phase::Playing;
        tracing::info!(mode = ?self.mode, "match started");
    }

    pub fn restart(&mut self) {
        self.start();
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.phase = Phase::Paused;
        tracing::info!("paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Playing;
        tracing::info!("resumed");
        true
    }

    /// Route one action. Returns whether anything changed.
    ///
    /// `Pause` toggles between `Playing` and `Paused`; every other action
    /// reaches its player's session only while `Playing`.
    pub fn apply(&mut self, action: PlayerAction) -> bool {
        if action.action == GameAction::Pause {
            return match self.phase {
                Phase::Playing => self.pause(),
                Phase::Paused => self.resume(),
                _ => false,
            };
        }

        if self.phase != Phase::Playing {
            return false;
        }
        match self.sessions.get_mut(action.player.index()) {
            Some(session) => session.apply(action.action),
            None => false,
        }
    }

    /// Advance gravity for every session, then check for the end of the match.
    ///
    /// Returns the result on the tick the match ends, `None` otherwise.
    pub fn tick(&mut self, delta_ms: u32) -> Option<MatchResult> {
        if self.phase != Phase::Playing {
            return None;
        }

        for session in &mut self.sessions {
            session.update(delta_ms);
        }

        let result = self.check_result()?;
        self.phase = Phase::GameOver(result);
        tracing::info!(?result, "match over");
        Some(result)
    }

    fn check_result(&mut self) -> Option<MatchResult> {
        for session in &mut self.sessions {
            if let Some(event) = session.take_last_event() {
                if event.lines_cleared > 0 {
                    tracing::debug!(
                        player = session.id().number(),
                        lines = event.lines_cleared,
                        "lock cleared lines"
                    );
                }
            }
        }

        match self.mode {
            GameMode::Single => {
                let session = self.sessions.first()?;
                session.is_lost().then(|| MatchResult::Solo {
                    score: session.score(),
                    lines: session.lines(),
                    level: session.level(),
                })
            }
            GameMode::Dual => {
                let lost = |player: PlayerId| self.session(player).is_some_and(|s| s.is_lost());
                match (lost(PlayerId::One), lost(PlayerId::Two)) {
                    (false, false) => None,
                    (true, false) => Some(MatchResult::Winner(PlayerId::Two)),
                    (false, true) => Some(MatchResult::Winner(PlayerId::One)),
                    (true, true) => Some(MatchResult::Draw),
                }
            }
        }
    }
}
