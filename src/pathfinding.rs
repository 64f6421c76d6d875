use crate::Grid;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

/// Axis-aligned moves: up, down, left, right
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell coordinate on the grid, ordered by row then column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Manhattan distance to another position
    pub fn manhattan(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the two positions share an edge
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Heuristic used by the search
pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.manhattan(&b)
}

/// Bookkeeping for a cell that has been reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRecord {
    /// Total estimated cost, g + h
    pub f: u32,
    /// Steps from the start
    pub g: u32,
    /// Manhattan estimate to the goal
    pub h: u32,
    /// Cell this one was reached from; the start points at itself
    pub parent: Position,
}

/// A frontier candidate. Ordered ascending by (f, g, position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub f: u32,
    pub g: u32,
    pub position: Position,
}

impl FrontierEntry {
    fn key(&self) -> (u32, u32, Position) {
        (self.f, self.g, self.position)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other.key().cmp(&self.key())
    }
}

pub type Frontier = BinaryHeap<FrontierEntry>;
pub type CellRecords = HashMap<Position, CellRecord>;

/// Record `candidate` as reached from `parent` if that is cheaper than anything seen so far.
///
/// Earlier frontier entries for `candidate` stay in the heap and become stale.
/// Returns true when the record was inserted or replaced.
pub fn relax(
    goal: Position,
    current_g: u32,
    frontier: &mut Frontier,
    candidate: Position,
    cell_records: &mut CellRecords,
    parent: Position,
) -> bool {
    let g = current_g + 1;
    let h = manhattan_distance(candidate, goal);
    let f = g + h;

    let improves = match cell_records.get(&candidate) {
        Some(existing) => existing.f > f,
        None => true,
    };

    if improves {
        cell_records.insert(candidate, CellRecord { f, g, h, parent });
        frontier.push(FrontierEntry {
            f,
            g,
            position: candidate,
        });
    }

    improves
}

/// Everything a search leaves behind: the path, if any, plus its working state
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    path: Option<Vec<Position>>,
    frontier: Vec<FrontierEntry>,
    visited: HashSet<Position>,
    expanded: Vec<Position>,
    cell_records: CellRecords,
}

impl SearchOutcome {
    /// Path from goal back to start, both inclusive
    pub fn path(&self) -> Option<&[Position]> {
        self.path.as_deref()
    }

    /// Path from start to goal
    pub fn path_from_start(&self) -> Option<Vec<Position>> {
        self.path
            .as_ref()
            .map(|p| p.iter().rev().copied().collect())
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps along the path
    pub fn cost(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }

    /// Remaining frontier entries in the order they would have been popped,
    /// stale duplicates included
    pub fn frontier(&self) -> &[FrontierEntry] {
        &self.frontier
    }

    pub fn visited(&self) -> &HashSet<Position> {
        &self.visited
    }

    /// Cells in the order they were expanded
    pub fn expansion_order(&self) -> &[Position] {
        &self.expanded
    }

    pub fn cell_records(&self) -> &CellRecords {
        &self.cell_records
    }
}

/// Find a path from `start` to `goal` with A* over the 4-connected grid.
///
/// `start` and `goal` must lie inside the grid. Blocked neighbours are never
/// expanded, but the start itself is not checked.
pub fn search(grid: &Grid, start: Position, goal: Position) -> SearchOutcome {
    let h = manhattan_distance(start, goal);

    let mut frontier = Frontier::new();
    let mut cell_records = CellRecords::new();

    frontier.push(FrontierEntry {
        f: h,
        g: 0,
        position: start,
    });
    cell_records.insert(
        start,
        CellRecord {
            f: h,
            g: 0,
            h,
            parent: start,
        },
    );

    if start == goal {
        return finish(Some(vec![start]), frontier, HashSet::new(), Vec::new(), cell_records);
    }

    run(grid, start, goal, frontier, cell_records)
}

/// Main loop: pop, skip stale entries, expand, stop once the goal is relaxed
fn run(
    grid: &Grid,
    start: Position,
    goal: Position,
    mut frontier: Frontier,
    mut cell_records: CellRecords,
) -> SearchOutcome {
    let mut visited = HashSet::new();
    let mut expanded = Vec::new();

    while let Some(entry) = frontier.pop() {
        let pos = entry.position;

        // Stale duplicate of a cell that was already expanded
        if visited.contains(&pos) {
            continue;
        }
        visited.insert(pos);
        expanded.push(pos);

        for (dr, dc) in DIRECTIONS {
            let next = Position::new(pos.row + dr, pos.col + dc);

            if !grid.in_bounds(next.row, next.col) {
                continue;
            }
            if !grid.is_passable(next.row, next.col) {
                continue;
            }
            if visited.contains(&next) {
                continue;
            }

            relax(goal, entry.g, &mut frontier, next, &mut cell_records, pos);

            if next == goal {
                let path = reconstruct_path(&cell_records, start, goal);
                return finish(path, frontier, visited, expanded, cell_records);
            }
        }
    }

    finish(None, frontier, visited, expanded, cell_records)
}

fn finish(
    path: Option<Vec<Position>>,
    mut frontier: Frontier,
    visited: HashSet<Position>,
    expanded: Vec<Position>,
    cell_records: CellRecords,
) -> SearchOutcome {
    let mut remaining = Vec::with_capacity(frontier.len());
    while let Some(entry) = frontier.pop() {
        remaining.push(entry);
    }

    SearchOutcome {
        path,
        frontier: remaining,
        visited,
        expanded,
        cell_records,
    }
}

/// Follow parent links from `goal` back to `start`
fn reconstruct_path(cell_records: &CellRecords, start: Position, goal: Position) -> Option<Vec<Position>> {
    let mut path = vec![goal];
    let mut child = goal;

    while child != start {
        let parent = cell_records.get(&child)?.parent;
        // Parents always come from expanded cells, so a self-loop only occurs at the start
        if parent == child || path.len() > cell_records.len() {
            return None;
        }
        path.push(parent);
        child = parent;
    }

    Some(path)
}

/// Format path for display, e.g. `(2, 0)->(2, 1)`
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("->")
}

/// Text view of a grid: S start, G goal, * path, # blocked, . free
pub fn format_map(grid: &Grid, start: Position, goal: Position, path: Option<&[Position]>) -> String {
    let on_path: HashSet<Position> = path.unwrap_or(&[]).iter().copied().collect();
    let mut result = String::new();

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let pos = Position::new(row, col);
            let symbol = if pos == start {
                'S'
            } else if pos == goal {
                'G'
            } else if on_path.contains(&pos) {
                '*'
            } else if grid.is_blocked(row, col) {
                '#'
            } else {
                '.'
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}
