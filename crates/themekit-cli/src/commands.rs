use std::path::PathBuf;

use anyhow::{Context, Result};
use themekit_catalog::ThemeCatalog;
use themekit_store::{EffectiveSnapshot, StoreBuilder, ThemeStore, TomlFileStorage};
use tracing::debug;

use themekit_cli::listing::{fonts_table, snapshot_text, themes_table};

use crate::cli::{DarkArgs, ShowFormatArg};

/// Build the process-wide store backed by the selection file.
pub fn open_store(state_file: Option<PathBuf>) -> ThemeStore {
    let storage = state_file.map_or_else(TomlFileStorage::open_default, TomlFileStorage::new);
    debug!(path = %storage.path().display(), "using selection file");

    let builder = StoreBuilder::new(ThemeCatalog::builtin(), storage);
    builder.subscribe(|snapshot| {
        debug!(
            theme = %snapshot.theme,
            dark_mode = snapshot.dark_mode,
            font = %snapshot.font,
            "snapshot delivered"
        );
    });
    builder.initialize()
}

pub fn run_themes(store: &ThemeStore) -> Result<()> {
    let table = themes_table(store.catalog(), store.snapshot().theme.as_str());
    println!("{table}");
    Ok(())
}

pub fn run_fonts(store: &ThemeStore) -> Result<()> {
    let table = fonts_table(store.catalog(), &store.snapshot().font);
    println!("{table}");
    Ok(())
}

pub fn run_show(store: &ThemeStore, format: ShowFormatArg) -> Result<()> {
    let snapshot = store.snapshot();
    match format {
        ShowFormatArg::Text => {
            print!(
                "{}",
                snapshot_text(&snapshot, store.current_theme(), store.current_font())
            );
        }
        ShowFormatArg::Json => {
            let json = serde_json::to_string_pretty(&snapshot).context("serialize snapshot")?;
            println!("{json}");
        }
        ShowFormatArg::Css => println!("{}", store.style().to_css()),
    }
    Ok(())
}

pub fn run_use(store: &ThemeStore, theme: &str) -> Result<()> {
    let snapshot = store.select_theme(theme)?;
    print_selection(store, &snapshot);
    Ok(())
}

pub fn run_dark(store: &ThemeStore, args: &DarkArgs) -> Result<()> {
    let snapshot = match args.requested() {
        Some(dark_mode) => store.set_dark_mode(dark_mode),
        None => store.toggle_dark_mode(),
    };
    print_selection(store, &snapshot);
    Ok(())
}

pub fn run_font(store: &ThemeStore, font: &str) -> Result<()> {
    let snapshot = store.select_font(font)?;
    print_selection(store, &snapshot);
    Ok(())
}

pub fn run_css(store: &ThemeStore) -> Result<()> {
    println!("{}", store.style().to_css());
    Ok(())
}

fn print_selection(store: &ThemeStore, snapshot: &EffectiveSnapshot) {
    let mode = if snapshot.dark_mode { "dark" } else { "light" };
    println!(
        "{} ({mode}), {}",
        store.current_theme().metadata.label,
        store.current_font().label
    );
}
