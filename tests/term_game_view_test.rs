use versus_tetris::core::PieceSequence;
use versus_tetris::engine::Game;
use versus_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use versus_tetris::types::{GameAction, GameMode, PieceKind, PlayerAction, PlayerId};

fn screen(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn winner_banner_and_topped_out_board() {
    let mut game = Game::with_sources(GameMode::Dual, |_| {
        Box::new(PieceSequence::repeat(PieceKind::O))
    });
    game.start();
    if let Some(session) = game.session_mut(PlayerId::Two) {
        session.engine_mut().board_mut().set(4, 2, Some(PieceKind::Z));
    }
    game.apply(PlayerAction::new(PlayerId::Two, GameAction::HardDrop));
    game.tick(0);

    let text = screen(&GameView::default().render(&game, Viewport::new(100, 30)));
    assert!(text.contains("PLAYER 1 WINS"));
    assert!(text.contains("TOPPED OUT"));
    assert!(text.contains("ENTER: START"));
}

#[test]
fn render_into_reuses_buffer_across_resizes() {
    let mut game = Game::new(GameMode::Single, Some(1));
    game.start();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&game, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    assert!(screen(&fb).contains("SCORE"));

    view.render_into(&game, Viewport::new(60, 26), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 26));
    assert_eq!(fb.cells().len(), 60 * 26);
}

#[test]
fn renderer_constructs_without_touching_terminal() {
    let renderer = TerminalRenderer::default();
    assert!(!renderer.reports_key_releases());
}
