use crate::error::InputError;
use crate::input::SearchInput;
use crate::pathfinding::Position;
use crate::Grid;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// A grid with its endpoints, stored as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rows of cell values (0 = blocked)
    pub grid: Vec<Vec<i32>>,
    pub start: Position,
    pub goal: Position,
    /// Goal-to-start path the search should produce; `null` means no path
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_path: Option<Option<Vec<Position>>>,
}

/// Distinguish an explicit `null` from a missing field
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<Vec<Position>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Position>>::deserialize(deserializer).map(Some)
}

impl Scenario {
    /// Create a scenario from collected input
    pub fn from_input(input: &SearchInput) -> Self {
        Scenario {
            name: None,
            grid: input.grid.to_rows(),
            start: input.start,
            goal: input.goal,
            expected_path: None,
        }
    }

    /// Validate into a searchable input
    pub fn to_input(&self) -> Result<SearchInput, InputError> {
        let grid = Grid::from_rows(&self.grid)?;
        SearchInput::new(grid, self.start, self.goal)
    }

    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), InputError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
