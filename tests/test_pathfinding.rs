mod common;

use common::{assert_valid_path, bfs_distance, grid_from_text, random_case, reachable_from};
use gridpath::pathfinding::{format_map, format_path, search, CellRecord, FrontierEntry};
use gridpath::{Grid, Position};
use std::collections::{HashMap, HashSet};

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

#[test]
fn test_detour_around_blocked_middle_row() {
    let grid = Grid::from_rows(&[vec![1, 1, 1], vec![0, 0, 1], vec![1, 1, 1]]).unwrap();
    let outcome = search(&grid, p(0, 0), p(2, 0));

    let path = outcome.path().expect("path should exist");
    println!("{}", format_path(path));
    assert_eq!(
        path,
        &[p(2, 0), p(2, 1), p(2, 2), p(1, 2), p(0, 2), p(0, 1), p(0, 0)]
    );
    assert_eq!(outcome.cost(), Some(6));

    let expected_visited: HashSet<Position> =
        [p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2), p(2, 1)].into_iter().collect();
    assert_eq!(outcome.visited(), &expected_visited);

    // Only the goal's own entry is left when the search stops
    assert_eq!(outcome.frontier(), &[FrontierEntry { f: 6, g: 6, position: p(2, 0) }]);

    let goal_record = outcome.cell_records()[&p(2, 0)];
    assert_eq!((goal_record.g, goal_record.h, goal_record.f), (6, 0, 6));
    assert_eq!(goal_record.parent, p(2, 1));
}

#[test]
fn test_diagonal_only_is_no_path() {
    let grid = Grid::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
    let outcome = search(&grid, p(0, 0), p(1, 1));

    assert!(outcome.path().is_none());
    assert!(!outcome.is_found());
    assert_eq!(outcome.visited(), &HashSet::from([p(0, 0)]));
    assert!(outcome.frontier().is_empty());
}

#[test]
fn test_start_equals_goal() {
    let grid = grid_from_text(&["...", ".#.", "..."]);
    let outcome = search(&grid, p(2, 1), p(2, 1));
    assert_eq!(outcome.path(), Some(&[p(2, 1)][..]));
    assert_eq!(outcome.cost(), Some(0));
    assert_eq!(outcome.cell_records()[&p(2, 1)].g, 0);
}

#[test]
fn test_enclosed_goal_visits_start_component() {
    let grid = grid_from_text(&[
        ".....",
        ".###.",
        ".#.#.",
        ".###.",
        ".....",
    ]);
    let start = p(0, 0);
    let outcome = search(&grid, start, p(2, 2));

    println!("{}", format_map(&grid, start, p(2, 2), outcome.path()));
    assert!(outcome.path().is_none());
    assert_eq!(outcome.visited(), &reachable_from(&grid, start));
    assert_eq!(outcome.visited().len(), 16);
}

#[test]
fn test_goal_reached_on_relaxation_not_pop() {
    // The goal is adjacent to the start: found while expanding the start
    let grid = Grid::new(1, 3);
    let outcome = search(&grid, p(0, 0), p(0, 1));
    assert_eq!(outcome.path(), Some(&[p(0, 1), p(0, 0)][..]));
    assert_eq!(outcome.visited(), &HashSet::from([p(0, 0)]));
}

#[test]
fn test_blocked_goal_is_never_reached() {
    let grid = grid_from_text(&["..#"]);
    let outcome = search(&grid, p(0, 0), p(0, 2));
    assert!(outcome.path().is_none());
    assert_eq!(outcome.visited().len(), 2);
}

#[test]
fn test_open_grid_path_length_is_manhattan() {
    for seed in 0..200 {
        let (grid, start, goal) = random_case(seed, 12, 1.0);
        assert_eq!(grid.passable_count(), grid.cells.len());

        let outcome = search(&grid, start, goal);
        let path = outcome.path().expect("open grid always has a path");
        assert_eq!(
            path.len() - 1,
            start.manhattan(&goal) as usize,
            "seed {}: {} -> {}",
            seed,
            start,
            goal
        );
        assert_valid_path(&grid, path, start, goal);
    }
}

#[test]
fn test_random_grids_give_valid_paths_or_full_exploration() {
    for seed in 0..500 {
        let (grid, start, goal) = random_case(seed, 10, 0.6);
        let outcome = search(&grid, start, goal);
        let shortest = bfs_distance(&grid, start, goal);

        match outcome.path() {
            Some(path) => {
                assert_valid_path(&grid, path, start, goal);
                let shortest = shortest.expect("search found a path that BFS did not");
                assert!(path.len() - 1 >= shortest, "seed {}: shorter than BFS", seed);
            }
            None => {
                assert!(shortest.is_none(), "seed {}: missed a reachable goal", seed);
                assert_eq!(outcome.visited(), &reachable_from(&grid, start), "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    for seed in 0..100 {
        let (grid, start, goal) = random_case(seed, 9, 0.7);
        let first = search(&grid, start, goal);
        let second = search(&grid, start, goal);

        assert_eq!(first.path(), second.path(), "seed {}", seed);
        assert_eq!(first.frontier(), second.frontier(), "seed {}", seed);
        assert_eq!(first.visited(), second.visited(), "seed {}", seed);
        assert_eq!(first.cell_records(), second.cell_records(), "seed {}", seed);
    }
}

#[test]
fn test_cell_records_are_consistent() {
    for seed in 0..100 {
        let (grid, start, goal) = random_case(seed, 10, 0.65);
        let outcome = search(&grid, start, goal);

        for (pos, record) in outcome.cell_records() {
            assert_eq!(record.f, record.g + record.h);
            assert_eq!(record.h, pos.manhattan(&goal));
            if *pos == start {
                assert_eq!(record.parent, start);
                assert_eq!(record.g, 0);
            } else {
                assert!(record.parent.is_adjacent(pos));
                assert!(outcome.visited().contains(&record.parent));
            }
        }
    }
}

#[test]
fn test_goal_on_left_stops_before_open_right_neighbour() {
    // Up and down are walls, left is the goal, right is open
    let grid = Grid::from_rows(&[vec![1, 0, 1], vec![1, 1, 1], vec![1, 0, 1]]).unwrap();
    let start = p(1, 1);
    let goal = p(1, 0);
    let outcome = search(&grid, start, goal);

    assert_eq!(outcome.path(), Some(&[goal, start][..]));
    assert_eq!(outcome.expansion_order(), &[start]);
    assert_eq!(
        outcome.frontier(),
        &[FrontierEntry {
            f: 1,
            g: 1,
            position: goal
        }]
    );

    let expected: HashMap<Position, CellRecord> = [
        (start, CellRecord { f: 1, g: 0, h: 1, parent: start }),
        (goal, CellRecord { f: 1, g: 1, h: 0, parent: start }),
    ]
    .into_iter()
    .collect();
    assert_eq!(outcome.cell_records(), &expected);
    assert!(!outcome.cell_records().contains_key(&p(1, 2)));
}

#[test]
fn test_each_cell_is_expanded_at_most_once() {
    for seed in 0..100 {
        let (grid, start, goal) = random_case(seed, 10, 0.65);
        let outcome = search(&grid, start, goal);

        let order = outcome.expansion_order();
        let unique: HashSet<Position> = order.iter().copied().collect();
        assert_eq!(unique.len(), order.len(), "seed {}", seed);
        assert_eq!(&unique, outcome.visited(), "seed {}", seed);
        if start != goal {
            assert_eq!(order.first(), Some(&start), "seed {}", seed);
        }
    }
}
