use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Column alignment for tabular output.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Render rows as a borderless, whitespace-aligned table on stdout.
///
/// Columns are sized to the widest entry, with a 2-space gap between columns and no
/// outer padding.
pub fn print_table(columns: &[(&str, Align)], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    table.set_header(headers);

    let last = columns.len().saturating_sub(1);
    for (i, (_, align)) in columns.iter().enumerate() {
        let cell_align = match align {
            Align::Left => CellAlignment::Left,
            Align::Right => CellAlignment::Right,
        };
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(cell_align);
            let pad_left = if i == 0 { 0 } else { 1 };
            let pad_right = if i == last { 0 } else { 1 };
            col.set_padding((pad_left, pad_right));
        }
    }

    for row in rows {
        table.add_row(row);
    }

    for line in table.to_string().lines() {
        println!("{}", line.trim_end());
    }
}
