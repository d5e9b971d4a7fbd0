use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Write a plain-text table: padded header, divider, then one line per row.
/// Column widths follow the widest cell. Rows must have one cell per header.
pub(crate) fn display_table(
    headers: &[&str],
    rows: &[Vec<String>],
    mut output: impl Write,
) -> io::Result<()> {
    let mut column_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (column_index, cell) in row.iter().enumerate() {
            column_widths[column_index] =
                std::cmp::max(cell.width(), column_widths[column_index]);
        }
    }

    output_row(&mut output, &column_widths, headers.iter().copied())?;

    let mut first = true;
    for width in &column_widths {
        if first {
            first = false;
        } else {
            write!(&mut output, "  ")?;
        }
        for _ in 0..*width {
            write!(&mut output, "─")?;
        }
    }
    writeln!(&mut output)?;

    for row in rows {
        output_row(&mut output, &column_widths, row.iter().map(String::as_str))?;
    }

    Ok(())
}

fn output_row<'a>(
    mut output: impl Write,
    column_widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    for (column_index, cell) in cells.enumerate() {
        if column_index > 0 {
            write!(&mut output, "  ")?;
        }
        write!(&mut output, "{}", cell)?;
        let padding = column_widths[column_index].saturating_sub(cell.width());
        for _ in 0..padding {
            write!(&mut output, " ")?;
        }
    }
    writeln!(&mut output)?;
    Ok(())
}
