//! Orchestrator tests: phases, action routing and match results

use versus_tetris::core::PieceSequence;
use versus_tetris::engine::{Game, MatchResult, Phase};
use versus_tetris::types::{GameAction, GameMode, PieceKind, PlayerAction, PlayerId};

fn o_game(mode: GameMode) -> Game {
    Game::with_sources(mode, |_| Box::new(PieceSequence::repeat(PieceKind::O)))
}

/// Occupy the cell under the spawned O so the player's next lock tops out.
fn doom(game: &mut Game, player: PlayerId) {
    let session = game.session_mut(player).expect("session");
    session.engine_mut().board_mut().set(4, 2, Some(PieceKind::Z));
}

fn act(player: PlayerId, action: GameAction) -> PlayerAction {
    PlayerAction::new(player, action)
}

#[test]
fn test_menu_to_playing() {
    let mut game = o_game(GameMode::Dual);
    assert_eq!(game.phase(), Phase::Menu);
    assert!(!game.apply(act(PlayerId::One, GameAction::MoveLeft)));

    game.start();
    assert!(game.is_playing());
    assert!(game.apply(act(PlayerId::One, GameAction::MoveLeft)));
    assert!(game.apply(act(PlayerId::Two, GameAction::MoveRight)));
    assert_eq!(game.session(PlayerId::One).map(|s| s.opponent()), Some(Some(PlayerId::Two)));
}

#[test]
fn test_pause_freezes_everything() {
    let mut game = o_game(GameMode::Single);
    game.start();

    assert!(game.apply(act(PlayerId::One, GameAction::Pause)));
    assert!(game.is_paused());
    assert_eq!(game.tick(5000), None);
    assert!(!game.apply(act(PlayerId::One, GameAction::HardDrop)));
    assert_eq!(game.session(PlayerId::One).map(|s| s.engine().current().y), Some(0));

    assert!(game.apply(act(PlayerId::One, GameAction::Pause)));
    assert!(game.is_playing());
    game.tick(1000);
    assert_eq!(game.session(PlayerId::One).map(|s| s.engine().current().y), Some(1));
}

#[test]
fn test_single_mode_has_no_second_player() {
    let mut game = o_game(GameMode::Single);
    game.start();
    assert_eq!(game.sessions().len(), 1);
    assert!(game.session(PlayerId::Two).is_none());
    assert!(!game.apply(act(PlayerId::Two, GameAction::MoveLeft)));
    assert_eq!(game.session(PlayerId::One).and_then(|s| s.opponent()), None);
}

#[test]
fn test_single_game_over_reports_stats() {
    let mut game = o_game(GameMode::Single);
    game.start();
    game.apply(act(PlayerId::One, GameAction::SoftDrop));
    // The O now sits on rows 1..=2; block the row below it.
    game.session_mut(PlayerId::One)
        .expect("session")
        .engine_mut()
        .board_mut()
        .set(4, 3, Some(PieceKind::Z));

    let result = game.tick(1000);
    assert_eq!(
        result,
        Some(MatchResult::Solo {
            score: 1,
            lines: 0,
            level: 1
        })
    );
    assert_eq!(game.phase(), Phase::GameOver(result.expect("result")));
    assert_eq!(game.tick(1000), None);
}

#[test]
fn test_one_loser_means_the_other_wins() {
    let mut game = o_game(GameMode::Dual);
    game.start();
    doom(&mut game, PlayerId::Two);

    let result = game.tick(1000);
    assert_eq!(result, Some(MatchResult::Winner(PlayerId::One)));
    assert_eq!(result.and_then(|r| r.winner()), Some(PlayerId::One));
    assert!(!game.apply(act(PlayerId::One, GameAction::MoveLeft)));
}

#[test]
fn test_hard_drop_top_out_ends_match_on_next_tick() {
    let mut game = o_game(GameMode::Dual);
    game.start();
    doom(&mut game, PlayerId::One);

    assert!(game.apply(act(PlayerId::One, GameAction::HardDrop)));
    assert!(game.session(PlayerId::One).is_some_and(|s| s.is_lost()));
    assert_eq!(game.tick(0), Some(MatchResult::Winner(PlayerId::Two)));
}

#[test]
fn test_simultaneous_losses_are_a_draw() {
    let mut game = o_game(GameMode::Dual);
    game.start();
    doom(&mut game, PlayerId::One);
    doom(&mut game, PlayerId::Two);

    let result = game.tick(1000);
    assert_eq!(result, Some(MatchResult::Draw));
    assert_eq!(result.and_then(|r| r.winner()), None);
}

#[test]
fn test_restart_clears_boards_and_result() {
    let mut game = o_game(GameMode::Dual);
    game.start();
    doom(&mut game, PlayerId::Two);
    game.tick(1000);
    assert!(game.result().is_some());

    game.restart();
    assert!(game.is_playing());
    assert_eq!(game.result(), None);
    for session in game.sessions() {
        assert!(!session.is_lost());
        assert_eq!(session.score(), 0);
        assert!(session.engine().board().cells().iter().all(|c| c.is_none()));
    }
}

#[test]
fn test_seeded_players_get_the_same_pieces() {
    let mut game = Game::new(GameMode::Dual, Some(42));
    game.start();

    let kinds = |game: &Game, player| {
        game.session(player)
            .map(|s| (s.engine().current().kind(), s.engine().next().kind))
    };
    for _ in 0..20 {
        assert_eq!(kinds(&game, PlayerId::One), kinds(&game, PlayerId::Two));
        game.apply(act(PlayerId::One, GameAction::HardDrop));
        game.apply(act(PlayerId::Two, GameAction::HardDrop));
        if game.tick(0).is_some() {
            break;
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let sequence = |seed| {
        let mut game = Game::new(GameMode::Single, Some(seed));
        game.start();
        (0..10)
            .filter_map(|_| {
                let kind = game.session(PlayerId::One)?.engine().current().kind();
                game.apply(act(PlayerId::One, GameAction::HardDrop));
                Some(kind)
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(sequence(7), sequence(7));
}

#[test]
fn test_snapshot_follows_session() {
    let mut game = o_game(GameMode::Dual);
    game.start();
    game.apply(act(PlayerId::Two, GameAction::SoftDrop));

    let snap = game.snapshot(PlayerId::Two).expect("snapshot");
    assert_eq!(snap.player, PlayerId::Two);
    assert_eq!(snap.opponent, Some(PlayerId::One));
    assert_eq!(snap.stats.score, 1);
    assert!(snap.board.ghost.is_some());
}
