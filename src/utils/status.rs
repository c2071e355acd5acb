use crate::models::{AreaUnit, Tile};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Print a per-tile table plus totals for a partition run.
pub fn print_tile_summary(tiles: &[Tile], unit: AreaUnit) {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Tile")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Depth")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("MinX")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("MinY")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("MaxX")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("MaxY")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new(format!("Area ({})", unit.code()))
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for tile in tiles {
        table.add_row(vec![
            Cell::new(tile.id).set_alignment(CellAlignment::Center),
            Cell::new(tile.depth).set_alignment(CellAlignment::Center),
            Cell::new(tile.extent.minx).set_alignment(CellAlignment::Right),
            Cell::new(tile.extent.miny).set_alignment(CellAlignment::Right),
            Cell::new(tile.extent.maxx).set_alignment(CellAlignment::Right),
            Cell::new(tile.extent.maxy).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", tile_area(tile, unit))).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("\nTile summary:\n{}", table);

    let total: f64 = tiles.iter().map(|t| tile_area(t, unit)).sum();
    let max_depth = tiles.iter().map(|t| t.depth).max().unwrap_or(0);
    println!("📦 Total tiles: {}", tiles.len());
    println!("📐 Total area: {:.2} {}", total, unit.code());
    println!("🪓 Deepest split: {}", max_depth);
    println!();
}

fn tile_area(tile: &Tile, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeters => tile.area_m2,
        AreaUnit::Hectares => tile.area_ha,
        AreaUnit::SquareKilometers => tile.area_km2,
    }
}
