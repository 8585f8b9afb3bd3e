//! Rendering collaborators.
//!
//! The engine never renders. Hosts pick a `GridRenderer` and feed it grid
//! snapshots taken from a `Session` or a `Turn`.

use std::borrow::Cow;

use crate::core::Grid;

/// Turns a grid snapshot into display text.
pub trait GridRenderer {
    /// Label for a single cell value.
    fn label(&self, value: u32) -> Cow<'static, str>;

    /// Cell width in characters, used for alignment.
    fn cell_width(&self) -> usize {
        5
    }

    /// Render the whole grid, one line per row.
    fn render(&self, grid: &Grid) -> String {
        let width = self.cell_width();
        grid.rows()
            .iter()
            .map(|line| {
                line.iter()
                    .map(|&v| format!("{:>width$}", self.label(v)))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the grid with a score line underneath.
    fn render_with_score(&self, grid: &Grid, score: u64) -> String {
        format!("{}\nScore: {score}", self.render(grid))
    }
}

/// Plain numbers, `.` for empty cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl GridRenderer for TextRenderer {
    fn label(&self, value: u32) -> Cow<'static, str> {
        if value == 0 {
            Cow::Borrowed(".")
        } else {
            Cow::Owned(value.to_string())
        }
    }
}

/// The air-quality icon set: pollution at the low ranks, a plant at 128.
#[derive(Clone, Copy, Debug, Default)]
pub struct IconRenderer;

impl IconRenderer {
    const ICONS: [(u32, &'static str); 7] = [
        (2, "🌫️"),
        (4, "🚗"),
        (8, "🏭"),
        (16, "😶‍🌫️"),
        (32, "⚡"),
        (64, "🫁"),
        (128, "🌱"),
    ];
}

impl GridRenderer for IconRenderer {
    fn label(&self, value: u32) -> Cow<'static, str> {
        if value == 0 {
            return Cow::Borrowed("");
        }
        Self::ICONS
            .iter()
            .find(|(rank, _)| *rank == value)
            .map_or_else(|| Cow::Owned(value.to_string()), |(_, icon)| Cow::Borrowed(*icon))
    }

    fn cell_width(&self) -> usize {
        4
    }
}
