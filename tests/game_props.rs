use std::collections::HashSet;

use battleship_replay::{play_game, Board, Cell, Coordinate, GuessResult, Verdict};
use proptest::prelude::*;

fn coords(grid: usize, max: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..grid, 0..grid), 1..=max)
}

/// Grid size with ship and move lists that stay inside it.
fn scenario() -> impl Strategy<
    Value = (
        usize,
        Vec<(usize, usize)>,
        Vec<(usize, usize)>,
        Vec<(usize, usize)>,
        Vec<(usize, usize)>,
    ),
> {
    (1usize..10).prop_flat_map(|grid| {
        (
            Just(grid),
            coords(grid, 8),
            coords(grid, 8),
            coords(grid, 20),
            coords(grid, 20),
        )
    })
}

fn join(list: &[(usize, usize)]) -> String {
    list.iter()
        .map(|(r, c)| format!("{}:{}", r, c))
        .collect::<Vec<_>>()
        .join(",")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rendered_boards_are_square((grid, s1, s2, m1, m2) in scenario()) {
        let lines = [
            grid.to_string(),
            "5".to_string(),
            join(&s1),
            join(&s2),
            "5".to_string(),
            join(&m1),
            join(&m2),
        ];
        let result = play_game(&lines).unwrap();
        for rendered in [&result.player1_board, &result.player2_board] {
            let rows: Vec<&str> = rendered.lines().collect();
            prop_assert_eq!(rows.len(), grid);
            for row in rows {
                let glyphs: Vec<&str> = row.split(' ').collect();
                prop_assert_eq!(glyphs.len(), grid);
                for g in glyphs {
                    prop_assert!(["_", "B", "X", "O"].contains(&g));
                }
            }
        }
        prop_assert!(result.player1_hits <= m1.len());
        prop_assert!(result.player2_hits <= m2.len());

        let expected = if result.player1_hits > result.player2_hits {
            Verdict::Player1Wins
        } else if result.player2_hits > result.player1_hits {
            Verdict::Player2Wins
        } else {
            Verdict::Draw
        };
        prop_assert_eq!(result.verdict, expected);
    }

    #[test]
    fn every_shot_classified_once((grid, ships, _, moves, _) in scenario()) {
        let ships: Vec<Coordinate> = ships.into_iter().map(Coordinate::from).collect();
        let moves: Vec<Coordinate> = moves.into_iter().map(Coordinate::from).collect();
        let mut board = Board::new(grid, ships.len(), ships.clone()).unwrap();

        let mut hits = 0;
        let mut misses = 0;
        for &at in &moves {
            match board.fire(at).unwrap() {
                GuessResult::Hit => hits += 1,
                GuessResult::Miss => misses += 1,
            }
        }
        prop_assert_eq!(hits + misses, moves.len());

        // each ship cell counts at most once, however often it is targeted
        let ship_cells: HashSet<Coordinate> = ships.iter().copied().collect();
        let targeted: HashSet<Coordinate> = moves.iter().copied().collect();
        prop_assert_eq!(hits, ship_cells.intersection(&targeted).count());
        prop_assert_eq!(board.count(Cell::Hit), hits);
        prop_assert_eq!(
            board.count(Cell::Miss),
            targeted.difference(&ship_cells).count()
        );
    }

    #[test]
    fn replaying_a_salvo_twice_scores_nothing((grid, ships, _, moves, _) in scenario()) {
        let ships: Vec<Coordinate> = ships.into_iter().map(Coordinate::from).collect();
        let moves: Vec<Coordinate> = moves.into_iter().map(Coordinate::from).collect();
        let mut board = Board::new(grid, ships.len(), ships).unwrap();
        board.receive_salvo(&moves).unwrap();
        let after_first = board.clone();
        prop_assert_eq!(board.receive_salvo(&moves).unwrap(), 0);
        prop_assert_eq!(board, after_first);
    }
}
