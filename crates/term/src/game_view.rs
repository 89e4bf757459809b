//! GameView: maps the orchestrator's sessions into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::{Game, MatchResult, Phase};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::core::{SessionSnapshot, Shape};
use crate::types::{GameMode, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// Columns between the board frame and its side panel, and between players.
const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 10;
const PLAYER_GAP: u16 = 3;

/// Draws one board per player, side by side, with a stats panel each.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2)
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_w(&self) -> u16 {
        BOARD_WIDTH as u16 * self.cell_w + 2
    }

    fn frame_h(&self) -> u16 {
        BOARD_HEIGHT as u16 + 2
    }

    fn block_w(&self) -> u16 {
        self.frame_w() + PANEL_GAP + PANEL_W
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let players = game.mode().players();
        let count = players.len() as u16;
        let total_w = self.block_w() * count + PLAYER_GAP * count.saturating_sub(1);
        // Title row, frame, status row.
        let total_h = self.frame_h() + 2;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;

        for (i, &player) in players.iter().enumerate() {
            let Some(session) = game.session(player) else {
                continue;
            };
            let snap = session.snapshot();

            let x = start_x + i as u16 * (self.block_w() + PLAYER_GAP);
            let title = if game.mode() == GameMode::Dual {
                match player.number() {
                    1 => "PLAYER 1",
                    _ => "PLAYER 2",
                }
            } else {
                "TETRIS"
            };
            fb.put_str(x + 1, start_y, title, LABEL);
            self.draw_board(fb, &snap, x, start_y + 1);
            self.draw_panel(fb, &snap, x + self.frame_w() + PANEL_GAP, start_y + 1);
        }

        if let Some(text) = banner(game.phase()) {
            let mid_y = start_y + 1 + self.frame_h() / 2;
            put_centered(fb, start_x, total_w, mid_y, text, BANNER);
            if matches!(game.phase(), Phase::Menu | Phase::GameOver(_)) {
                let hint = "ENTER: START  Q: QUIT";
                put_centered(fb, start_x, total_w, mid_y + 2, hint, VALUE);
            }
        }

        let status = match game.mode() {
            GameMode::Single => "WASD/ARROWS MOVE  J/SPACE DROP  ENTER PAUSE  R RESTART",
            GameMode::Dual => "P1 WASD+J  P2 ARROWS+SPACE  ENTER PAUSE  R RESTART",
        };
        let status_y = start_y + 1 + self.frame_h();
        put_centered(fb, start_x, total_w, status_y, status, VALUE.dim());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        let (w, h) = (self.frame_w(), self.frame_h());
        draw_border(fb, x, y, w, h);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        let ghost_style = CellStyle::new(Rgb::new(140, 140, 140), PLAY_BG).dim();

        for (row, line) in snap.board.cells.iter().enumerate() {
            for (col, &id) in line.iter().enumerate() {
                let px = x + 1 + col as u16 * self.cell_w;
                let py = y + 1 + row as u16;
                let ghost = snap.board.ghost.map_or(0, |g| g[row][col]);

                match PieceKind::from_color_id(id) {
                    Some(kind) => fb.fill_rect(px, py, self.cell_w, 1, '█', piece_style(kind)),
                    None if ghost != 0 => fb.fill_rect(px, py, self.cell_w, 1, '░', ghost_style),
                    None => fb.fill_rect(px, py, self.cell_w, 1, '·', empty),
                }
            }
        }

        if snap.stats.lost {
            put_centered(fb, x, w, y + h / 2, "TOPPED OUT", BANNER);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        let rows = [
            ("SCORE", snap.stats.score),
            ("LEVEL", snap.stats.level),
            ("LINES", snap.stats.lines),
        ];
        let mut cy = y;
        for (label, value) in rows {
            fb.put_str(x, cy, label, LABEL);
            fb.put_u32(x, cy + 1, value, VALUE);
            cy += 3;
        }

        fb.put_str(x, cy, "NEXT", LABEL);
        draw_preview(fb, &snap.board.next_shape, snap.board.next, x, cy + 1);
    }
}

fn banner(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Menu => Some("VERSUS TETRIS"),
        Phase::Playing => None,
        Phase::Paused => Some("PAUSED"),
        Phase::GameOver(MatchResult::Solo { .. }) => Some("GAME OVER"),
        Phase::GameOver(MatchResult::Winner(player)) => Some(match player.number() {
            1 => "PLAYER 1 WINS",
            _ => "PLAYER 2 WINS",
        }),
        Phase::GameOver(MatchResult::Draw) => Some("DRAW"),
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, PLAY_BG).bold()
}

fn draw_preview(fb: &mut FrameBuffer, shape: &Shape, kind: PieceKind, x: u16, y: u16) {
    let style = CellStyle {
        bg: Rgb::new(0, 0, 0),
        ..piece_style(kind)
    };
    for (col, row) in shape.cells() {
        fb.fill_rect(x + col as u16 * 2, y + row as u16, 2, 1, '█', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}
