//! Character grid used by the text renderer

use std::fmt;

/// A growable grid of characters
#[derive(Debug, Clone)]
pub struct TextCanvas {
    pub width: usize,
    pub height: usize,
    grid: Vec<Vec<char>>,
}

impl TextCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let grid = vec![vec![' '; width.max(1)]; height.max(1)];
        Self {
            width: width.max(1),
            height: height.max(1),
            grid,
        }
    }

    /// Grow the canvas so that it is at least `min_width` x `min_height`
    pub fn ensure_size(&mut self, min_width: usize, min_height: usize) {
        if min_width > self.width {
            for row in &mut self.grid {
                row.resize(min_width, ' ');
            }
            self.width = min_width;
        }
        if min_height > self.height {
            let width = self.width;
            self.grid
                .extend((self.height..min_height).map(|_| vec![' '; width]));
            self.height = min_height;
        }
    }

    pub fn set_char(&mut self, x: usize, y: usize, c: char) {
        self.ensure_size(x + 1, y + 1);
        self.grid[y][x] = c;
    }

    pub fn get_char(&self, x: usize, y: usize) -> char {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(' ')
    }

    pub fn is_blank(&self, x: usize, y: usize) -> bool {
        self.get_char(x, y) == ' '
    }

    /// Write `c` only if the cell is blank; returns whether it was written
    pub fn set_if_blank(&mut self, x: usize, y: usize, c: char) -> bool {
        if self.is_blank(x, y) {
            self.set_char(x, y, c);
            true
        } else {
            false
        }
    }

    /// Draw text left-aligned at `(x, y)`, one character per cell
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        for (i, c) in text.chars().enumerate() {
            self.set_char(x + i, y, c);
        }
    }

    /// Draw text centered on column `center_x`
    pub fn draw_text_centered(&mut self, center_x: usize, y: usize, text: &str) {
        let start_x = center_x.saturating_sub(text.chars().count() / 2);
        self.draw_text(start_x, y, text);
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<String> = self
            .grid
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();

        while rows.first().is_some_and(|row| row.is_empty()) {
            rows.remove(0);
        }
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }

        write!(f, "{}", rows.join("\n"))
    }
}
