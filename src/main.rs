//! Annotext - word-level rich-text annotation in the terminal.
//!
//! # Usage
//!
//! ```bash
//! annotext notes.txt
//! annotext --carry-styles --log-file annotext.log
//! annotext --script session.jsonl
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use annotext::app::App;
use annotext::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use annotext::logging::{init_file_logging, init_stderr_logging};
use annotext::script::{load_script, run_script};

/// Word-level bold/italic/underline annotation with a live markup preview
#[derive(Parser, Debug)]
#[command(name = "annotext", version, about, long_about = None)]
struct Cli {
    /// Text file to seed the editor with
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Replay a JSON-lines event script and print the resulting markup
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Keep styles of unchanged words across edits
    #[arg(long)]
    carry_styles: bool,

    /// Start with the raw markup line hidden
    #[arg(long)]
    no_markup: bool,

    /// Write tracing output to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // The TUI owns the terminal, so interactive runs only log to a file.
    match (&effective.log_file, &cli.script) {
        (Some(path), _) => init_file_logging(path)?,
        (None, Some(_)) => init_stderr_logging(),
        (None, None) => {}
    }

    if let Some(script_path) = &cli.script {
        let events = load_script(script_path)?;
        let session = run_script(&events, effective.carry_styles);
        println!("{}", session.preview());
        return Ok(());
    }

    if let Some(file) = &cli.file
        && !file.exists()
    {
        anyhow::bail!("File not found: {}", file.display());
    }

    let mut app = App::new(cli.file)
        .with_carry_styles(effective.carry_styles)
        .with_markup_visible(!effective.no_markup)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
