//! CLI entry point for promptguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `promptguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use promptguard_app::{
    run_check, runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
    CheckInput,
};
use promptguard_render::{render_markdown, render_text};
use promptguard_settings::Overrides;
use promptguard_types::PromptguardReport;

#[derive(Parser, Debug)]
#[command(
    name = "promptguard",
    version,
    about = "Hygiene checks for JSON prompt repositories"
)]
struct Cli {
    /// Validation root (defaults to the working directory).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Path to promptguard config TOML, relative to the root.
    #[arg(long, default_value = "promptguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|lenient).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Where to write the JSON report artifact.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Where to write a Markdown report.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let root = cli
        .root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.root.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !root.exists() {
            anyhow::bail!("validation root does not exist: {root}");
        }

        // Load config if present; missing file is allowed (defaults apply).
        let cfg_path = root.join(&cli.config);
        let cfg_text = std::fs::read_to_string(&cfg_path).unwrap_or_default();

        let overrides = Overrides {
            profile: cli.profile.clone(),
            max_findings: cli.max_findings,
        };

        let output = run_check(CheckInput {
            repo_root: &root,
            config_text: &cfg_text,
            overrides,
        })?;

        if let Some(path) = &cli.report_out {
            write_report_file(path, &output.report).context("write report json")?;
        }

        let renderable = to_renderable(&output.report);
        if let Some(path) = &cli.markdown_out {
            write_text_file(path, &render_markdown(&renderable)).context("write markdown")?;
        }

        print!("{}", render_text(&renderable));

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            // Still emit a failing artifact so CI consumers see the run.
            if let Some(path) = &cli.report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                let _ = write_report_file(path, &report);
            }
            eprintln!("promptguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &PromptguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}
