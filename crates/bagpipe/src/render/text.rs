//! Terminal drawing of the render plan
//!
//! One operation per line with a blank line between rows, one fixed-width
//! column per distinct cycle. Node labels are drawn first; edges are routed
//! orthogonally (across, then up or down) through the remaining blank cells
//! and end in an arrowhead.
//!
//! ```text
//! 0: a │   D─────E
//!      │         ▼
//! 1: b │         D
//!      │
//!      └────────────
//!          0     1
//! ```

use anyhow::Result;
use tracing::{debug, span, trace, Level};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::Renderer;
use crate::core::{CharacterSet, RenderConfig, TextCanvas};
use crate::layout::{RenderPlan, Segment};

/// Characters used for axes and edge paths
#[derive(Debug, Clone, Copy)]
struct LineChars {
    horizontal: char,
    vertical: char,
    /// Corners named by the two sides they connect
    left_down: char,
    left_up: char,
    right_down: char,
    right_up: char,
    arrow_up: char,
    arrow_down: char,
    arrow_left: char,
    arrow_right: char,
}

impl LineChars {
    fn for_style(style: CharacterSet) -> Self {
        if style.is_ascii() {
            Self::ascii()
        } else {
            Self::unicode()
        }
    }

    fn ascii() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
            left_down: '+',
            left_up: '+',
            right_down: '+',
            right_up: '+',
            arrow_up: '^',
            arrow_down: 'v',
            arrow_left: '<',
            arrow_right: '>',
        }
    }

    fn unicode() -> Self {
        Self {
            horizontal: '─',
            vertical: '│',
            left_down: '┐',
            left_up: '┘',
            right_down: '┌',
            right_up: '└',
            arrow_up: '▲',
            arrow_down: '▼',
            arrow_left: '◀',
            arrow_right: '▶',
        }
    }
}

/// One cell of a routed path: where, which line glyph, which arrowhead
type PathCell = (usize, usize, char, char);

/// Maps plan coordinates to canvas cells
///
/// Columns are the plan's distinct cycles in order, so gaps in time take no
/// space. A coordinate halfway between two cells goes to the side named by
/// `prefer_low`.
#[derive(Debug, Clone, Copy)]
struct Grid<'a> {
    cycles: &'a [i64],
    rows: usize,
    gutter: usize,
    cell_width: usize,
}

impl<'a> Grid<'a> {
    fn new(plan: &'a RenderPlan, gutter: usize, cell_width: usize) -> Self {
        Self {
            cycles: &plan.cycles,
            rows: plan.y_axis.ticks.len(),
            gutter,
            cell_width,
        }
    }

    fn cycle_index(&self, x: f64, prefer_low: bool) -> usize {
        let above = self.cycles.partition_point(|&time| (time as f64) < x);
        if above == 0 {
            return 0;
        }
        if above == self.cycles.len() {
            return above - 1;
        }
        let low_gap = x - self.cycles[above - 1] as f64;
        let high_gap = self.cycles[above] as f64 - x;
        if low_gap < high_gap || (low_gap == high_gap && prefer_low) {
            above - 1
        } else {
            above
        }
    }

    fn column_at(&self, index: usize) -> usize {
        self.gutter + index * self.cell_width + self.cell_width / 2
    }

    fn line_at(&self, index: usize) -> usize {
        index * 2
    }

    fn line(&self, y: f64, prefer_low: bool) -> usize {
        let row = if prefer_low {
            (y - 0.5).ceil()
        } else {
            (y + 0.5).floor()
        };
        let row = (row.max(1.0) as usize).min(self.rows.max(1));
        self.line_at(self.rows.saturating_sub(row))
    }

    fn cell(&self, point: (f64, f64), prefer_low: (bool, bool)) -> (usize, usize) {
        let column = self.column_at(self.cycle_index(point.0, prefer_low.0));
        (column, self.line(point.1, prefer_low.1))
    }

    fn ruler_line(&self) -> usize {
        self.rows * 2
    }

    fn right_edge(&self) -> usize {
        self.gutter + self.cycles.len().max(1) * self.cell_width
    }
}

/// Draws the render plan as text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    config: RenderConfig,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn with_style(style: CharacterSet) -> Self {
        Self::with_config(RenderConfig::new(style))
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn draw_axes(&self, canvas: &mut TextCanvas, plan: &RenderPlan, grid: &Grid, chars: &LineChars) {
        let label_width = grid.gutter.saturating_sub(2);
        for (index, label) in plan.y_axis.ticks.labels.iter().enumerate() {
            canvas.draw_text(0, grid.line_at(index), &fit(label, label_width));
        }

        let axis_x = grid.gutter - 1;
        for line in 0..grid.ruler_line() {
            canvas.set_char(axis_x, line, chars.vertical);
        }
        canvas.set_char(axis_x, grid.ruler_line(), chars.right_up);
        for x in grid.gutter..grid.right_edge() {
            canvas.set_char(x, grid.ruler_line(), chars.horizontal);
        }

        let label_width = grid.cell_width - 1;
        for (index, time) in grid.cycles.iter().enumerate() {
            let label = fit(&time.to_string(), label_width);
            canvas.draw_text_centered(grid.column_at(index), grid.ruler_line() + 1, &label);
        }
    }

    fn draw_nodes(&self, canvas: &mut TextCanvas, plan: &RenderPlan, grid: &Grid) {
        let label_width = grid.cell_width - 1;
        for node in &plan.nodes {
            let (column, line) = grid.cell((node.x, node.y), (true, true));
            canvas.draw_text_centered(column, line, &fit(&node.label, label_width));
        }
    }

    fn draw_segment(&self, canvas: &mut TextCanvas, segment: &Segment, grid: &Grid, chars: &LineChars) {
        // Ends sitting exactly between two cells belong to their own slot
        let rightward = segment.x2 >= segment.x1;
        let upward = segment.y2 >= segment.y1;
        let from = grid.cell(segment.start(), (rightward, upward));
        let to = grid.cell(segment.end(), (!rightward, !upward));

        let mut last_drawn = None;
        for (x, y, glyph, arrow) in route(from, to, chars) {
            if canvas.set_if_blank(x, y, glyph) {
                last_drawn = Some((x, y, arrow));
            }
        }
        if let Some((x, y, arrow)) = last_drawn {
            canvas.set_char(x, y, arrow);
        }
    }

    fn legend(&self, plan: &RenderPlan) -> String {
        plan.legend()
            .into_iter()
            .map(|(color, legend)| format!("  {}: {}", color, legend))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, plan: &RenderPlan) -> Result<String> {
        let render_span = span!(
            Level::INFO,
            "render_text",
            node_count = plan.nodes.len(),
            edge_count = plan.edges.len()
        );
        let _enter = render_span.enter();

        let chars = LineChars::for_style(self.config.style);
        let label_width = plan
            .y_axis
            .ticks
            .labels
            .iter()
            .map(|label| label.width())
            .max()
            .unwrap_or(0);
        let grid = Grid::new(plan, label_width + 2, self.config.cell_width.max(3));
        trace!(?grid, "Computed text grid");

        let mut canvas = TextCanvas::new(grid.right_edge(), grid.ruler_line() + 2);
        self.draw_axes(&mut canvas, plan, &grid, &chars);
        self.draw_nodes(&mut canvas, plan, &grid);
        for edge in &plan.edges {
            for segment in &edge.segments {
                self.draw_segment(&mut canvas, segment, &grid, &chars);
            }
        }

        let mut output = canvas.to_string();
        if self.config.show_legend {
            let legend = self.legend(plan);
            if !legend.is_empty() {
                output.push_str("\n\n");
                output.push_str(&legend);
            }
        }

        debug!(
            width = canvas.width,
            height = canvas.height,
            "Text rendering completed"
        );
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "text"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "text"
    }
}

/// Cells strictly between `from` and `to`: across along `from`'s line, then
/// up or down along `to`'s column
fn route(from: (usize, usize), to: (usize, usize), chars: &LineChars) -> Vec<PathCell> {
    let (x1, y1) = from;
    let (x2, y2) = to;
    let mut cells = Vec::new();

    let going_down = y2 > y1;
    let vertical_arrow = if going_down {
        chars.arrow_down
    } else {
        chars.arrow_up
    };

    if x1 != x2 {
        let going_right = x2 > x1;
        let arrow = if going_right {
            chars.arrow_right
        } else {
            chars.arrow_left
        };
        let across: Vec<usize> = if going_right {
            (x1 + 1..x2).collect()
        } else {
            (x2 + 1..x1).rev().collect()
        };
        cells.extend(across.into_iter().map(|x| (x, y1, chars.horizontal, arrow)));

        if y1 != y2 {
            let corner = match (going_right, going_down) {
                (true, true) => chars.left_down,
                (true, false) => chars.left_up,
                (false, true) => chars.right_down,
                (false, false) => chars.right_up,
            };
            cells.push((x2, y1, corner, vertical_arrow));
        }
    }

    if y1 != y2 {
        let along: Vec<usize> = if going_down {
            (y1 + 1..y2).collect()
        } else {
            (y2 + 1..y1).rev().collect()
        };
        cells.extend(along.into_iter().map(|y| (x2, y, chars.vertical, vertical_arrow)));
    }

    cells
}

/// Truncate `label` to at most `width` display columns
fn fit(label: &str, width: usize) -> String {
    let mut used = 0;
    label
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}
