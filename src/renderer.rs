use crate::config::{VisualConfig, WindowConfig};
use crate::pathfinding::{format_path, Position, SearchOutcome};
use crate::Grid;
use arboard::Clipboard;
use macroquad::prelude::*;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Pixel placement of the grid inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub origin_x: i32,
    pub origin_y: i32,
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Layout {
    /// Fit a `rows x cols` grid into a `width x height` window, centred
    pub fn fit(width: i32, height: i32, margin: i32, rows: i32, cols: i32) -> Self {
        let grid_size = (width.min(height) - margin).max(0);
        let cell_width = if cols > 0 { grid_size / cols } else { 0 };
        let cell_height = if rows > 0 { grid_size / rows } else { 0 };

        Layout {
            origin_x: (width - cols * cell_width) / 2,
            origin_y: (height - rows * cell_height) / 2,
            cell_width,
            cell_height,
        }
    }

    /// Top-left corner of a cell
    pub fn cell_origin(&self, pos: Position) -> (i32, i32) {
        (
            self.origin_x + pos.col * self.cell_width,
            self.origin_y + pos.row * self.cell_height,
        )
    }

    pub fn cell_center(&self, pos: Position) -> (i32, i32) {
        let (x, y) = self.cell_origin(pos);
        (x + self.cell_width / 2, y + self.cell_height / 2)
    }
}

fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Read-only snapshot of a finished search, redrawn every frame
pub struct Renderer {
    grid: Grid,
    start: Position,
    goal: Position,
    path: Option<Vec<Position>>,
    visited: HashSet<Position>,
    frontier: Vec<Position>,
    visual: VisualConfig,
    window: WindowConfig,
    show_overlay: bool,
}

impl Renderer {
    pub fn new(
        grid: Grid,
        start: Position,
        goal: Position,
        outcome: &SearchOutcome,
        visual: VisualConfig,
        window: WindowConfig,
    ) -> Self {
        let show_overlay = visual.show_search_overlay;
        Renderer {
            grid,
            start,
            goal,
            path: outcome.path().map(|p| p.to_vec()),
            visited: outcome.visited().clone(),
            frontier: outcome.frontier().iter().map(|e| e.position).collect(),
            visual,
            window,
            show_overlay,
        }
    }

    /// Window settings for `macroquad::Window::from_config`
    pub fn window_conf(window: &WindowConfig) -> Conf {
        Conf {
            window_title: window.title.clone(),
            window_width: window.width,
            window_height: window.height,
            window_resizable: false,
            ..Default::default()
        }
    }

    fn layout(&self) -> Layout {
        Layout::fit(
            screen_width() as i32,
            screen_height() as i32,
            self.window.margin,
            self.grid.rows,
            self.grid.cols,
        )
    }

    fn fill_cell(&self, layout: &Layout, pos: Position, color: Color) {
        let (x, y) = layout.cell_origin(pos);
        draw_rectangle(
            x as f32,
            y as f32,
            layout.cell_width as f32,
            layout.cell_height as f32,
            color,
        );
    }

    fn draw_grid_lines(&self, layout: &Layout) {
        let color = rgb(self.visual.grid_lines);
        let thickness = self.visual.grid_line_thickness;
        let top = layout.origin_y as f32;
        let bottom = (layout.origin_y + self.grid.rows * layout.cell_height) as f32;
        let left = layout.origin_x as f32;
        let right = (layout.origin_x + self.grid.cols * layout.cell_width) as f32;

        for i in 0..=self.grid.cols {
            let x = (layout.origin_x + i * layout.cell_width) as f32;
            draw_line(x, top, x, bottom, thickness, color);
        }
        for i in 0..=self.grid.rows {
            let y = (layout.origin_y + i * layout.cell_height) as f32;
            draw_line(left, y, right, y, thickness, color);
        }
    }

    fn draw_overlay(&self, layout: &Layout) {
        let visited = Color::from_rgba(70, 70, 120, 255);
        let frontier = Color::from_rgba(120, 100, 40, 255);
        for &pos in &self.visited {
            self.fill_cell(layout, pos, visited);
        }
        for &pos in &self.frontier {
            self.fill_cell(layout, pos, frontier);
        }
    }

    fn draw_path(&self, layout: &Layout, path: &[Position]) {
        let color = rgb(self.visual.path);
        for pair in path.windows(2) {
            let (x1, y1) = layout.cell_center(pair[0]);
            let (x2, y2) = layout.cell_center(pair[1]);
            draw_line(
                x1 as f32,
                y1 as f32,
                x2 as f32,
                y2 as f32,
                self.visual.path_thickness,
                color,
            );
        }
    }

    pub fn draw(&self) {
        clear_background(rgb(self.visual.background));
        let layout = self.layout();

        if self.show_overlay {
            self.draw_overlay(&layout);
        }

        self.draw_grid_lines(&layout);

        // Blocked cells
        let blocked = rgb(self.visual.blocked);
        for row in 0..self.grid.rows {
            for col in 0..self.grid.cols {
                if self.grid.is_blocked(row, col) {
                    self.fill_cell(&layout, Position::new(row, col), blocked);
                }
            }
        }

        self.fill_cell(&layout, self.start, rgb(self.visual.start));
        self.fill_cell(&layout, self.goal, rgb(self.visual.goal));

        if let Some(path) = &self.path {
            self.draw_path(&layout, path);
        }

        let status = match &self.path {
            Some(path) => format!("Path: {} steps", path.len() - 1),
            None => "No path found".to_string(),
        };
        draw_text(&status, 10.0, 20.0, 20.0, WHITE);
        draw_text("V: search overlay  C: copy path  Esc: close", 10.0, 40.0, 20.0, WHITE);
    }

    fn path_text(&self) -> String {
        match &self.path {
            Some(path) => format_path(path),
            None => "No path".to_string(),
        }
    }

    fn copy_to_clipboard(&self) {
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(self.path_text()) {
                    log::warn!("Failed to copy to clipboard: {}", e);
                } else {
                    log::info!("Path copied to clipboard");
                    // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
            Err(e) => {
                log::warn!("Failed to access clipboard: {}", e);
            }
        }
    }

    /// Redraw until the window is closed or Escape is pressed
    pub async fn run(mut self) {
        prevent_quit();
        let frame_budget = Duration::from_secs_f64(1.0 / self.window.fps.max(1) as f64);

        loop {
            let frame_start = Instant::now();

            if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
                log::debug!("Renderer closing");
                break;
            }
            if is_key_pressed(KeyCode::V) {
                self.show_overlay = !self.show_overlay;
            }
            if is_key_pressed(KeyCode::C) {
                self.copy_to_clipboard();
            }

            self.draw();

            // macroquad has no frame limiter; sleep out the rest of the frame budget
            if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
            next_frame().await
        }
    }
}
