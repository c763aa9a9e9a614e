use super::load_content;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_common::FsTemplateSource;
use folio_editor::{
    load_theme, EditSession, ExportOutcome, FormEdit, FsDownloadSink, JsonFilePreferences,
    SessionOptions, Theme,
};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Content file (defaults to the configured one)
    pub input: Option<PathBuf>,

    /// Output directory (defaults to the configured one)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Re-indent the exported page
    #[arg(long)]
    pub pretty: bool,

    /// Apply the stored theme preference to the page
    #[arg(long)]
    pub themed: bool,
}

pub async fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let content_path = args.input.unwrap_or_else(|| config.content_path(cwd));
    let out_dir = args.out_dir.unwrap_or_else(|| config.out_dir(cwd));

    println!("📦 {} {}", "Exporting".green().bold(), content_path.display());

    let data = load_content(&content_path)?;
    let source = FsTemplateSource::new(cwd);
    let options = SessionOptions {
        render: config.render_options(),
        pretty: args.pretty || config.pretty,
        ..SessionOptions::default()
    };
    let mut session = EditSession::start(&source, &config.template_path, options).await;

    let edits = FormEdit::typing(&data);
    tracing::debug!(edits = edits.len(), "Typing content into the session");
    for edit in edits {
        session.handle_input(edit)?;
    }
    if args.themed {
        let store = JsonFilePreferences::new(config.preferences_path(cwd));
        let theme = load_theme(&store)?;
        if theme != Theme::Light {
            session.apply_theme(theme);
        }
    }

    let mut sink = FsDownloadSink::new(&out_dir);
    match session.export(&mut sink)? {
        ExportOutcome::Delivered { file_name, bytes } => {
            println!(
                "   {} {} ({} bytes)",
                "✓".green(),
                out_dir.join(file_name).display(),
                bytes
            );
            Ok(())
        }
        ExportOutcome::Blocked { field } => {
            let detail = field
                .as_ref()
                .and_then(|at| session.form().field(at).map(|input| (at, input)))
                .map(|(at, input)| format!("{} ({}): {}", input.spec.label, at, input.error_message))
                .unwrap_or_else(|| "the form is invalid".to_string());
            Err(anyhow::anyhow!("Export blocked, {}", detail))
        }
    }
}
