use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::grid::SamplingGrid;

/// Column names of the long-format grid export.
pub const CSV_HEADER: [&str; 4] = ["volatility", "spot", "call", "put"];

/// Write the grid in long format, one row per cell in row-major order.
pub fn write_csv<W: Write>(grid: &SamplingGrid, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for (vol, spot, prices) in grid.cells() {
        wtr.write_record(&[
            format!("{vol:.2}"),
            format!("{spot:.2}"),
            format!("{:.2}", prices.call_price),
            format!("{:.2}", prices.put_price),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_csv`] to a file, creating or truncating it.
pub fn write_csv_file(grid: &SamplingGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(grid, file).with_context(|| format!("failed to write grid to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{sample, Range};

    #[test]
    fn csv_has_header_and_one_row_per_cell() {
        let heatmap = sample(
            100.0,
            100.0,
            1.0,
            0.05,
            0.2,
            Range::new(90.0, 110.0),
            Range::new(0.1, 0.3),
        )
        .unwrap();

        let mut buf = Vec::new();
        write_csv(&heatmap.grid, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "volatility,spot,call,put");
        assert_eq!(lines.len(), 1 + 100);
        let first = heatmap.grid.cell(0, 0).unwrap();
        assert_eq!(
            lines[1],
            format!("0.10,90.00,{:.2},{:.2}", first.call_price, first.put_price)
        );
        assert!(lines[100].starts_with("0.30,110.00,"));
    }
}
