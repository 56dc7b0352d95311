//! Tabular display of roll sets.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use dicesim_core::{sum, RollSet};
use std::io::{self, Write};

use crate::ui::output_format::{print_info_message, print_section_footer, print_section_header};
use crate::ui::theme::ThemeMap;

/// Builds the results table. Rows are numbered from `first_index`.
pub fn build_roll_table(sets: &[RollSet], first_index: usize, enable_colors: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Roll", "Dice", "Total"]);

    if enable_colors {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    for (offset, set) in sets.iter().enumerate() {
        let dice = set.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
        let mut total = Cell::new(sum(set)).set_alignment(CellAlignment::Right);
        if enable_colors {
            total = total.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(first_index + offset).set_alignment(CellAlignment::Right),
            Cell::new(format!("[{}]", dice)),
            total,
        ]);
    }
    table
}

/// Prints the "ROLL RESULTS" section for `sets`.
pub fn print_rolls<W: Write + ?Sized>(
    writer: &mut W,
    sets: &[RollSet],
    first_index: usize,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    if sets.is_empty() {
        writeln!(writer)?;
        return print_info_message(writer, "No rolls to display.", theme, enable_colors);
    }

    print_section_header(writer, "ROLL RESULTS", theme, enable_colors)?;
    writeln!(writer, "{}", build_roll_table(sets, first_index, enable_colors))?;
    print_section_footer(writer, theme, enable_colors)
}
