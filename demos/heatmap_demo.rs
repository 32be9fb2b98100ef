// demos/heatmap_demo.rs
// Samples a spot x volatility grid the way the input form would submit it and writes
// heatmap.svg and heatmap.csv to the working directory.
//
// Usage:
//     cargo run --example heatmap_demo

use anyhow::Result;
use bsm_heatmap::render::write_csv_file;
use bsm_heatmap::{generate, render_svg, HeatmapStyle, RawInputs};

fn main() -> Result<()> {
    let raw = RawInputs {
        spot: "50".into(),
        strike: "50".into(),
        time_to_maturity: "0.5".into(),
        risk_free_rate: "0.03".into(),
        volatility: "0.35".into(),
        ..RawInputs::default()
    };

    let heatmap = match generate(&raw) {
        Ok(heatmap) => heatmap,
        Err(e) => {
            eprintln!("{}: {}", e.title(), e.user_message());
            return Ok(());
        }
    };

    println!("{}", heatmap.current);

    let grid = &heatmap.grid;
    print!("{:>6}", "vol\\S");
    for spot in &grid.spot_axis {
        print!(" {spot:>7.2}");
    }
    println!();
    for (vol, row) in grid.vol_axis.iter().zip(&grid.call_matrix) {
        print!("{vol:>6.2}");
        for call in row {
            print!(" {call:>7.2}");
        }
        println!();
    }

    render_svg(&heatmap, &HeatmapStyle::default(), "heatmap.svg")?;
    write_csv_file(grid, "heatmap.csv")?;
    println!("Chart saved to heatmap.svg, grid saved to heatmap.csv");
    Ok(())
}
