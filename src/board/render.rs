use super::domain::{Aspirant, ViewStatus};
use super::AspirantBoard;

const HEADERS: [&str; 6] = ["Photo", "Name", "Species", "House", "Patronus", "Action"];
const LOADING_PLACEHOLDER: &str = "Loading...";
const NO_DATA_PLACEHOLDER: &str = "No data to display...";

/// Knobs the renderer takes from configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Asset path substituted for aspirants without an image of their own.
    pub default_image: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_image: "/pngegg.png".to_string(),
        }
    }
}

/// Renders the board as a plain-text table following the view contract:
/// while charging a single loading row spans all columns, an empty visible
/// list yields a single no-data row, and otherwise each visible aspirant
/// gets one row with its hide command in the action column.
pub fn render_table(board: &AspirantBoard, options: &RenderOptions) -> String {
    let rows: Vec<[String; 6]> = if board.status() == ViewStatus::Charging {
        Vec::new()
    } else {
        board
            .visible_aspirants()
            .into_iter()
            .map(|aspirant| row_cells(aspirant, options))
            .collect()
    };

    let widths = column_widths(&rows);
    let total_width = widths.iter().sum::<usize>() + 3 * (HEADERS.len() - 1);

    let mut out = String::new();
    out.push_str(&format_row(
        &HEADERS.map(|header| header.to_string()),
        &widths,
    ));
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    if board.status() == ViewStatus::Charging {
        out.push_str(&format!("{LOADING_PLACEHOLDER:<total_width$}\n"));
    } else if rows.is_empty() {
        out.push_str(&format!("{NO_DATA_PLACEHOLDER:<total_width$}\n"));
    } else {
        for cells in &rows {
            out.push_str(&format_row(cells, &widths));
        }
    }

    out
}

fn row_cells(aspirant: &Aspirant, options: &RenderOptions) -> [String; 6] {
    [
        aspirant.image_or(&options.default_image).to_string(),
        aspirant.name.clone(),
        aspirant.species.clone(),
        aspirant.house.clone(),
        aspirant.patronus.clone(),
        format!("hide {}", aspirant.id),
    ]
}

fn column_widths(rows: &[[String; 6]]) -> [usize; 6] {
    let mut widths = HEADERS.map(str::len);
    for cells in rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }
    widths
}

fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let mut line = String::new();
    for (index, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str(" | ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    line.push('\n');
    line
}
