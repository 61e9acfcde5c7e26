//! `flipform stars`: list the decorative point set.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use flipform_core::{DecorativePoint, generate_points};

pub fn run(count: usize, json: bool) -> Result<()> {
    let points = generate_points(count);
    if json {
        let out = serde_json::to_string_pretty(&points).context("serialize points")?;
        println!("{out}");
    } else {
        println!("{}", points_table(&points));
    }
    Ok(())
}

fn points_table(points: &[DecorativePoint]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["id", "top", "left", "delay"]);
    for point in points {
        table.add_row(vec![
            point.id.to_string(),
            point.vertical_position(),
            point.horizontal_position(),
            point.animation_delay(),
        ]);
    }
    table
}
