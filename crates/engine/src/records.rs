//! High score and match history, stored as pretty JSON.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::SessionStats;
use crate::game::MatchResult;
use crate::types::{PlayerId, MAX_MATCH_RECORDS};

/// One player's line in a match record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub score: u32,
    pub lines: u32,
}

impl From<SessionStats> for PlayerLine {
    fn from(stats: SessionStats) -> Self {
        Self {
            score: stats.score,
            lines: stats.lines,
        }
    }
}

/// A finished versus match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub timestamp: DateTime<Utc>,
    /// `None` for a draw.
    pub winner: Option<PlayerId>,
    pub players: [PlayerLine; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStore {
    pub high_score: u32,
    /// Newest first, at most [`MAX_MATCH_RECORDS`].
    pub matches: Vec<MatchRecord>,
}

impl RecordStore {
    /// Load a store; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to open {}", path.display()))
            }
        };
        let reader = BufReader::new(file);
        let mut store: Self = serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        store.matches.truncate(MAX_MATCH_RECORDS);
        Ok(store)
    }

    /// Write the store, creating missing parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("failed to write JSON to {}", path.display()))?;
        writeln!(writer).with_context(|| format!("failed to write {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("failed to flush {}", path.display()))?;
        Ok(())
    }

    /// Raise the high score if `score` beats it.
    pub fn record_solo(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Record a finished match; returns whether the high score was raised.
    ///
    /// Solo results only touch the high score. Versus results are added to
    /// the front of the history, which keeps the newest ten.
    pub fn record_match(
        &mut self,
        result: MatchResult,
        a: SessionStats,
        b: SessionStats,
        timestamp: DateTime<Utc>,
    ) -> bool {
        let winner = match result {
            MatchResult::Solo { score, .. } => return self.record_solo(score),
            MatchResult::Winner(player) => Some(player),
            MatchResult::Draw => None,
        };

        self.matches.insert(
            0,
            MatchRecord {
                timestamp,
                winner,
                players: [a.into(), b.into()],
            },
        );
        self.matches.truncate(MAX_MATCH_RECORDS);
        self.record_solo(a.score.max(b.score))
    }
}
