use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use folio_editor::{load_theme, save_theme, JsonFilePreferences, Theme};
use std::path::Path;

#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// `light` or `dark`; prints the stored theme when omitted
    pub value: Option<String>,

    /// Switch to the other theme
    #[arg(short, long, conflicts_with = "value")]
    pub toggle: bool,
}

pub fn theme(args: ThemeArgs, cwd: &Path) -> Result<Theme> {
    let config = Config::load(cwd)?;
    let mut store = JsonFilePreferences::new(config.preferences_path(cwd));
    let current = load_theme(&store)?;

    let next = match (args.value, args.toggle) {
        (Some(value), _) => value.parse::<Theme>().map_err(|err| anyhow!(err))?,
        (None, true) => current.toggle(),
        (None, false) => {
            println!("{}", current.as_str().bright_white());
            return Ok(current);
        }
    };

    save_theme(&mut store, next)?;
    println!("  {} Theme set to {}", "✓".green(), next.as_str().bright_white());
    Ok(next)
}
