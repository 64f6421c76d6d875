pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod logging;
pub mod pathfinding;
pub mod renderer;
pub mod scenario;

pub use error::{ErrorKind, InputError};
pub use grid::Grid;
pub use input::SearchInput;
pub use pathfinding::{search, Position, SearchOutcome};
