use othello_engine::ai::eval::default_evaluator;
use othello_engine::ai::search::Searcher;
use othello_engine::board::Board;
use othello_engine::game::{GameInstance, PLAYER_BLACK, PLAYER_WHITE};

#[test]
fn opening_scenario_regression() {
    let board = Board::new();
    let searcher = Searcher::new(default_evaluator());

    // The four standard opening captures for black.
    let legal = board.legal_moves(true);
    assert_eq!(legal, (1u64 << 19) | (1u64 << 26) | (1u64 << 37) | (1u64 << 44));

    // All four are symmetric under the weight table; the stable
    // tie-break picks the lowest square, (row 2, col 3).
    assert_eq!(searcher.search(&board, true), Some(19));
}

#[test]
fn midgame_regression_fixture() {
    // Both sides playing the engine's own choices from the opening:
    // B d3, W c5, B b6, W d2, B c2, W b5.
    let plies: [(usize, bool); 6] = [
        (19, true),
        (34, false),
        (41, true),
        (11, false),
        (10, true),
        (33, false),
    ];

    let mut board = Board::new();
    for (mv, is_black) in plies {
        assert_ne!(board.legal_moves(is_black) & (1u64 << mv), 0, "ply {mv} not legal");
        assert_ne!(board.place(mv, is_black), 0);
    }

    assert_eq!(default_evaluator().evaluate(&board, true), -2);

    let searcher = Searcher::new(default_evaluator());
    assert_eq!(searcher.search(&board, true), Some(20));
}

#[test]
fn every_placement_grows_the_stone_count_by_exactly_one() {
    let mut board = Board::new();
    let searcher = Searcher::new(default_evaluator());
    let mut is_black = true;

    for _ in 0..20 {
        let Some(mv) = searcher.search(&board, is_black) else {
            is_black = !is_black;
            continue;
        };
        let (b, w) = board.count();
        assert_ne!(board.place(mv, is_black), 0);
        let (nb, nw) = board.count();
        assert_eq!(nb + nw, b + w + 1);
        is_black = !is_black;
    }
}

#[test]
fn search_answers_for_independent_boards_do_not_interfere() {
    // Two interleaved searches over distinct boards: each owns its
    // snapshots, so results match the same searches run back to back.
    let searcher = Searcher::new(default_evaluator());
    let opening = Board::new();
    let mut advanced = Board::new();
    advanced.place(19, true);

    let a1 = searcher.search(&opening, true);
    let b1 = searcher.search(&advanced, false);
    let a2 = searcher.search(&opening, true);
    let b2 = searcher.search(&advanced, false);

    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
}

#[test]
fn full_game_between_engine_and_first_legal_player_terminates() {
    let mut game = GameInstance::new_with_search_selector(2);

    for _ in 0..200 {
        if game.is_game_over {
            break;
        }
        if !game.has_legal_moves_for_current() {
            game.pass();
            if !game.has_legal_moves_for_current() {
                game.end_game();
            }
            continue;
        }
        match game.current_player {
            PLAYER_BLACK => {
                let mv = game.get_legal_moves()[0];
                game.place(mv.row, mv.col).expect("legal black move");
            }
            PLAYER_WHITE => game.do_ai_move().expect("engine move"),
            _ => unreachable!(),
        }
    }

    assert!(game.is_game_over, "game did not finish within the move bound");

    let state = game.to_game_state();
    let result = game.to_game_result();
    assert!(state.black_count + state.white_count <= 64);
    assert_eq!(result.black_count, state.black_count);
    assert_eq!(result.white_count, state.white_count);
    match result.winner {
        0 => assert_eq!(result.black_count, result.white_count),
        PLAYER_BLACK => assert!(result.black_count > result.white_count),
        PLAYER_WHITE => assert!(result.white_count > result.black_count),
        other => panic!("invalid winner value {other}"),
    }
}
