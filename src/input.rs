use crate::config::GridConfig;
use crate::error::InputError;
use crate::pathfinding::Position;
use crate::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};

/// A validated grid with its endpoints, ready to search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
}

impl SearchInput {
    /// Check that both endpoints lie inside the grid
    pub fn new(grid: Grid, start: Position, goal: Position) -> Result<Self, InputError> {
        validate_endpoint(&grid, "start", start)?;
        validate_endpoint(&grid, "goal", goal)?;
        Ok(SearchInput { grid, start, goal })
    }
}

fn validate_endpoint(grid: &Grid, what: &'static str, position: Position) -> Result<(), InputError> {
    if grid.contains(position) {
        Ok(())
    } else {
        Err(InputError::OutOfBounds {
            what,
            position,
            rows: grid.rows,
            cols: grid.cols,
        })
    }
}

/// Parse a coordinate written as `(r, c)`, `[r, c]` or `r, c`
pub fn parse_coordinate(text: &str) -> Result<Position, InputError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .or_else(|| trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')))
        .unwrap_or(trimmed);

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(InputError::Malformed(format!(
            "expected a coordinate like (row, col), got '{}'",
            trimmed
        )));
    }

    let parse = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| InputError::Malformed(format!("'{}' is not an integer", s)))
    };
    Ok(Position::new(parse(parts[0])?, parse(parts[1])?))
}

/// Parse a nested-list matrix literal such as `[[1, 0], [1, 1]]`
pub fn parse_matrix(text: &str) -> Result<Grid, InputError> {
    let rows: Vec<Vec<i32>> = serde_json::from_str(text.trim())?;
    Grid::from_rows(&rows)
}

/// Largest random grid the collector will generate
pub const MAX_CELLS: usize = 1_000_000;

/// Parse a row or column count; an empty answer takes `default`
fn parse_dimension(text: &str, what: &str, default: i32) -> Result<i32, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(default);
    }
    match text.parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::Malformed(format!(
            "{} must be a positive integer, got '{}'",
            what, text
        ))),
    }
}

fn check_size(rows: i32, cols: i32) -> Result<(), InputError> {
    if rows <= 0 || cols <= 0 {
        return Err(InputError::Malformed(format!("a {}x{} grid has no cells", rows, cols)));
    }
    match (rows as usize).checked_mul(cols as usize) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(InputError::Malformed(format!(
            "a {}x{} grid exceeds the limit of {} cells",
            rows, cols, MAX_CELLS
        ))),
    }
}

/// Terminal prompts for a grid and its endpoints
pub struct InputCollector<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        InputCollector { reader, writer }
    }

    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, question: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        match self.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(InputError::Malformed(format!(
                "input ended before answering '{}'",
                question.trim()
            ))),
        }
    }

    /// Read lines until the brackets of the matrix literal balance (or input ends)
    fn read_matrix(&mut self) -> Result<Grid, InputError> {
        let mut text = String::new();
        let mut depth = 0i32;
        let mut opened = false;

        while let Some(line) = self.read_line()? {
            for ch in line.chars() {
                match ch {
                    '[' => {
                        depth += 1;
                        opened = true;
                    }
                    ']' => depth -= 1,
                    _ => {}
                }
            }
            text.push_str(&line);
            if opened && depth <= 0 {
                break;
            }
        }

        parse_matrix(&text)
    }

    /// Ask for a grid (typed in or random) plus start and goal
    pub fn collect(&mut self, grid_config: &GridConfig) -> Result<SearchInput, InputError> {
        let mode = self.prompt("Do you want to enter the maze?(yes/no) ")?;

        let grid = if mode.eq_ignore_ascii_case("yes") {
            writeln!(self.writer, "Enter the maze in a matrix form (0 for blocked, 1 for unblocked)")?;
            self.read_matrix()?
        } else {
            let question = format!("How many rows do you want in your maze? [{}] ", grid_config.rows);
            let rows = parse_dimension(&self.prompt(&question)?, "rows", grid_config.rows)?;
            let question = format!("How many columns do you want in your maze? [{}] ", grid_config.cols);
            let cols = parse_dimension(&self.prompt(&question)?, "columns", grid_config.cols)?;
            check_size(rows, cols)?;
            let mut rng = match grid_config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Grid::random(rows, cols, grid_config.passable_ratio, &mut rng)
        };

        let start = parse_coordinate(&self.prompt("Enter the starting point : ")?)?;
        let goal = parse_coordinate(&self.prompt("Enter the destination point : ")?)?;

        SearchInput::new(grid, start, goal)
    }
}
