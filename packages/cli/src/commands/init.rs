use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_render::PortfolioData;
use std::fs;
use std::path::Path;

/// Template shipped with the binary
const BUNDLED_TEMPLATE: &str = include_str!("../../../../templates/template-prestige.html");

/// Demo content with its placeholder `#` links left empty
pub fn starter_content() -> PortfolioData {
    let mut data = PortfolioData::demo();
    for link in [
        &mut data.facebook,
        &mut data.instagram,
        &mut data.linkedin,
        &mut data.tiktok,
    ] {
        link.clear();
    }
    for project in &mut data.projects {
        project.link.clear();
    }
    data
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Content file to create
    #[arg(short, long, default_value = "portfolio.json")]
    pub content_file: String,

    /// Output directory for exports
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing portfolio...".bright_blue().bold());

    let config = Config {
        content_file: args.content_file.clone(),
        out_dir: args.out_dir.clone(),
        ..Config::default()
    };

    let template_path = cwd.join(&config.template_path);
    if !template_path.exists() || args.force {
        fs::write(&template_path, BUNDLED_TEMPLATE)?;
        println!("  {} Created {}", "✓".green(), config.template_path);
    }

    let content_path = config.content_path(cwd);
    if !content_path.exists() || args.force {
        let starter = serde_json::to_string_pretty(&starter_content())?;
        fs::write(&content_path, starter)?;
        println!("  {} Created {}", "✓".green(), config.content_file);
    }

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Portfolio initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", config.content_file);
    println!("  2. Run: folio check");
    println!("  3. Run: folio export");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_project() {
        let dir = tempfile::tempdir().unwrap();
        init(
            InitArgs {
                content_file: "portfolio.json".into(),
                out_dir: "dist".into(),
                force: false,
            },
            dir.path(),
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.out_dir, "dist");
        assert!(dir.path().join("template-prestige.html").exists());

        let content = crate::commands::load_content(&dir.path().join("portfolio.json")).unwrap();
        assert_eq!(content, starter_content());
    }
}
