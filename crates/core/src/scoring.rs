//! Scoring module - fixed line table, level and gravity progression
//!
//! - Line clears: `[0, 40, 100, 300, 1200][rows] * level`
//! - Level: `lines / 10 + 1`
//! - Gravity: `max(50, 1000 - (level - 1) * 50)` milliseconds per row
//! - Soft drop: 1 point per row, hard drop: 2 points per row

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_SCORES, SOFT_DROP_POINTS,
};

/// Calculate line clear score
/// lines: number of lines cleared in one lock
/// level: level at the time of the clear (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Level reached after clearing `lines` in total.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, floored at 50ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Calculate points for dropping a piece
pub fn calculate_drop_score(rows: u32, hard_drop: bool) -> u32 {
    if hard_drop {
        rows.saturating_mul(HARD_DROP_POINTS)
    } else {
        rows.saturating_mul(SOFT_DROP_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_table_level_one() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 1), 100);
        assert_eq!(calculate_line_score(3, 1), 300);
        assert_eq!(calculate_line_score(4, 1), 1200);
    }

    #[test]
    fn test_line_score_scales_with_level() {
        assert_eq!(calculate_line_score(1, 3), 120);
        assert_eq!(calculate_line_score(2, 3), 300);
        assert_eq!(calculate_line_score(3, 3), 900);
        assert_eq!(calculate_line_score(4, 3), 3600);
    }

    #[test]
    fn test_more_than_four_rows_uses_top_entry() {
        assert_eq!(calculate_line_score(6, 1), 1200);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(200), 21);
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 950);
        assert_eq!(drop_interval_ms(19), 100);
        assert_eq!(drop_interval_ms(20), 50);
        assert_eq!(drop_interval_ms(21), 50);
        assert_eq!(drop_interval_ms(u32::MAX), 50);
    }

    #[test]
    fn test_drop_score() {
        assert_eq!(calculate_drop_score(1, false), 1);
        assert_eq!(calculate_drop_score(18, true), 36);
    }
}
