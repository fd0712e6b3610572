//! Tables and text views of the catalog and the current snapshot.

use std::fmt::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use themekit_catalog::{FontOption, ThemeCatalog, ThemeEntry};
use themekit_store::EffectiveSnapshot;

/// Marker shown next to the active row.
pub const ACTIVE_MARKER: &str = "●";

/// One row per theme, in catalog order.
pub fn themes_table(catalog: &ThemeCatalog, active: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Theme"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Dark"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for entry in catalog.themes() {
        table.add_row(vec![
            marker_cell(entry.id == active),
            id_cell(entry.id.as_str()),
            Cell::new(&entry.metadata.label),
            Cell::new(entry.metadata.category.label()),
            dark_cell(entry),
            dim_cell(&entry.metadata.description),
        ]);
    }
    table
}

/// One row per font, in display order.
pub fn fonts_table(catalog: &ThemeCatalog, active: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Font"),
        header_cell("Name"),
        header_cell("Family"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for font in catalog.fonts() {
        table.add_row(vec![
            marker_cell(font.id == active),
            id_cell(&font.id),
            Cell::new(&font.label),
            dim_cell(&font.family),
        ]);
    }
    table
}

/// Plain-text description of a snapshot.
pub fn snapshot_text(snapshot: &EffectiveSnapshot, theme: &ThemeEntry, font: &FontOption) -> String {
    let mut out = String::new();
    let mode = if snapshot.dark_mode { "dark" } else { "light" };
    let _ = writeln!(out, "Theme: {} ({})", theme.metadata.label, snapshot.theme);
    let _ = writeln!(out, "Mode:  {mode}");
    let _ = writeln!(out, "Font:  {} ({})", font.label, snapshot.font);
    out.push('\n');
    for (field, value) in snapshot.colors.entries() {
        let _ = writeln!(out, "{:<16}{value}", field.path());
    }
    out
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn id_cell(id: &str) -> Cell {
    Cell::new(id).fg(Color::Blue).add_attribute(Attribute::Bold)
}

fn marker_cell(active: bool) -> Cell {
    if active {
        Cell::new(ACTIVE_MARKER).fg(Color::Green)
    } else {
        Cell::new("")
    }
}

fn dark_cell(entry: &ThemeEntry) -> Cell {
    if entry.has_dark_variant() {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
