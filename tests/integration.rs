// Integration tests (native) for the `scrapbook-arcade` crate.
// End-to-end game scenarios driven through the public API with scripted
// boards, decks and spins, plus one session driven through `Arcade`.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use scrapbook_arcade::config::{ArcadeConfig, MatchConfig, WheelConfig};
use scrapbook_arcade::matching::{CardFace, CardKind, MatchCard, MatchGame, MatchPhase, Pick, Resolution};
use scrapbook_arcade::puzzle::{SlidingPuzzle, is_solvable};
use scrapbook_arcade::scratch::{ScratchOutcome, ScratchPhase};
use scrapbook_arcade::wheel::{SpinDraw, SpinWheel, WheelPhase, winning_index};
use scrapbook_arcade::{Arcade, ArcadeError};

// Goal [1..8, blank] written with this crate's labels (blank = 8, goal = identity).
#[test]
fn puzzle_two_move_solution() {
    let tiles = vec![0, 1, 8, 3, 4, 2, 6, 7, 5];
    assert!(is_solvable(&tiles, 3));
    let mut puzzle = SlidingPuzzle::from_tiles(3, tiles, "photo.jpg").unwrap();
    assert_eq!(puzzle.blank_index(), 2);

    let script = [5, 8];
    for (step, &cell) in script.iter().enumerate() {
        assert!(!puzzle.is_solved(), "solved too early at step {step}");
        assert!(puzzle.attempt_move(cell));
    }
    assert!(puzzle.is_solved());
    assert_eq!(puzzle.tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(puzzle.moves() as usize, script.len());
}

#[test]
fn match_two_pairs_in_order() {
    let cards = vec![
        MatchCard::new(0, 0, CardKind::Image, "a.jpg"),
        MatchCard::new(1, 0, CardKind::Text, "A"),
        MatchCard::new(2, 1, CardKind::Image, "b.jpg"),
        MatchCard::new(3, 1, CardKind::Text, "B"),
    ];
    let config = MatchConfig::default();
    let mut game = MatchGame::from_cards(cards, &config).unwrap();

    assert_eq!(game.select(0, 0.0), Pick::Revealed);
    assert_eq!(game.select(1, 50.0), Pick::Resolving { matched: true });
    assert_eq!(game.tick(50.0 + config.match_settle_ms), Some(Resolution::Matched));
    assert_eq!(game.cards()[0].face(), CardFace::Matched);
    assert_eq!(game.cards()[1].face(), CardFace::Matched);
    assert!(!game.is_won());

    assert_eq!(game.select(2, 1000.0), Pick::Revealed);
    assert_eq!(game.select(3, 1100.0), Pick::Resolving { matched: true });
    assert!(!game.is_won());
    assert_eq!(game.tick(1100.0 + config.match_settle_ms), Some(Resolution::Won));
    assert!(game.is_won());
    assert_eq!(game.phase(), MatchPhase::Won);
    assert_eq!(game.moves(), 2);
}

#[test]
fn spin_five_turns_no_offset_lands_on_first() {
    let config = WheelConfig::default();
    let mut wheel = SpinWheel::date_planner(&config);
    assert_eq!(wheel.activities().len(), 8);
    assert_eq!(wheel.rotation(), 0.0);

    let target = wheel
        .spin_with(
            SpinDraw {
                extra_revolutions: 5,
                offset_deg: 0.0,
            },
            0.0,
        )
        .unwrap();
    assert_eq!(target, 1800.0);
    assert_eq!(winning_index(target, 8), Some(0));
    wheel.tick(config.spin_duration_ms);
    assert_eq!(wheel.phase(), WheelPhase::Landed { index: 0 });
}

#[test]
fn arcade_session_plays_every_game() {
    let mut arcade = Arcade::with_seed(ArcadeConfig::default(), 2024);
    let mut rng = StdRng::seed_from_u64(99);

    // puzzle: keep clicking random movable cells, the board stays consistent
    arcade.start_puzzle();
    for _ in 0..50 {
        let movable = arcade.puzzle().unwrap().movable_cells();
        if movable.is_empty() {
            break;
        }
        let cell = movable[rng.gen_range(0..movable.len())];
        assert!(arcade.puzzle_move(cell).unwrap());
    }

    // scratch: a big brush clears the card in a few strokes
    arcade.start_scratch("coupon", 100, 100).unwrap();
    let mut outcome = ScratchOutcome::Scratched;
    for y in (0..100).step_by(20) {
        for x in (0..100).step_by(20) {
            let o = arcade.scratch_at(x as f64, y as f64).unwrap();
            if o == ScratchOutcome::Revealed {
                outcome = o;
            }
        }
    }
    assert_eq!(outcome, ScratchOutcome::Revealed);
    let prize = arcade.scratch().unwrap().prize();
    let card = arcade.reset_scratch().unwrap();
    assert_eq!(card.phase(), ScratchPhase::Covered);
    assert_ne!(card.prize(), prize);

    // quiz and shooter run off the shared tick
    arcade.start_quiz();
    arcade.quiz_answer(0, 0.0).unwrap();
    arcade.open_shooter();
    arcade.start_shooter(0.0).unwrap();
    let mut now = 0.0;
    while now < 2000.0 {
        now += 16.0;
        arcade.tick(now);
    }
    assert_eq!(arcade.quiz().unwrap().current_index(), 1);
    assert!(arcade.shooter().unwrap().time_left_secs(now) <= 59);

    assert!(matches!(
        arcade.scratch_at(1.0, 1.0),
        Ok(ScratchOutcome::Scratched)
    ));
    arcade.close("scratch").unwrap();
    assert!(matches!(
        arcade.scratch_at(1.0, 1.0),
        Err(ArcadeError::NotRunning("scratch"))
    ));
}

#[test]
fn config_from_json_drives_the_games() {
    let config = ArcadeConfig::from_json(r#"{ "puzzle": { "size": 4 }, "matching": { "pairs": 3 } }"#).unwrap();
    let mut arcade = Arcade::with_seed(config, 7);
    assert_eq!(arcade.start_puzzle().tiles().len(), 16);
    assert_eq!(arcade.start_match().unwrap().pairs(), 3);
}
