#![allow(dead_code)]

use gridpath::{Grid, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashSet, VecDeque};

/// Build a grid from rows of text: '#' blocked, anything else passable
pub fn grid_from_text(lines: &[&str]) -> Grid {
    let rows: Vec<Vec<i32>> = lines
        .iter()
        .map(|line| line.chars().map(|c| if c == '#' { 0 } else { 1 }).collect())
        .collect();
    Grid::from_rows(&rows).expect("test grid must be rectangular")
}

/// Seeded random grid with a random passable start and goal
pub fn random_case(seed: u64, max_side: i32, passable_ratio: f64) -> (Grid, Position, Position) {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = rng.random_range(1..=max_side);
    let cols = rng.random_range(1..=max_side);
    let mut grid = Grid::random(rows, cols, passable_ratio, &mut rng);

    let start = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
    let goal = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
    grid.set_cell(start.row, start.col, 1);
    grid.set_cell(goal.row, goal.col, 1);

    (grid, start, goal)
}

/// Passable cells reachable from `start`, by breadth-first flood fill
pub fn reachable_from(grid: &Grid, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(pos) = queue.pop_front() {
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = Position::new(pos.row + dr, pos.col + dc);
            if grid.is_passable(next.row, next.col) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}

/// Shortest 4-connected distance by breadth-first search
pub fn bfs_distance(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    let mut dist = std::collections::HashMap::from([(start, 0usize)]);
    let mut queue = VecDeque::from([start]);

    while let Some(pos) = queue.pop_front() {
        if pos == goal {
            return dist.get(&pos).copied();
        }
        let d = dist[&pos];
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = Position::new(pos.row + dr, pos.col + dc);
            if grid.is_passable(next.row, next.col) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Assert a goal-to-start path is a simple chain of adjacent passable cells
pub fn assert_valid_path(grid: &Grid, path: &[Position], start: Position, goal: Position) {
    assert_eq!(path.first(), Some(&goal), "path must begin at the goal");
    assert_eq!(path.last(), Some(&start), "path must end at the start");

    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path repeats a cell: {:?}", path);

    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]), "{} and {} are not adjacent", pair[0], pair[1]);
    }
    // The start is not required to be passable, every other cell is
    for pos in &path[..path.len() - 1] {
        assert!(grid.is_passable(pos.row, pos.col), "{} is blocked", pos);
    }
}
