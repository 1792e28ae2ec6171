mod config_cmd;
mod export_cmd;
mod output;
mod selection;
mod summary_cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tagsight",
    about = "Summarize JSONL tag datasets and export charts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize tag counts across dataset files
    Summary {
        /// Dataset files (.jsonl)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Narrow to one tag value (JSON accepted: 3, true; bare text is a string tag)
        #[arg(long)]
        tag: Option<String>,

        /// Narrow to one source file name
        #[arg(long)]
        file: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: output::OutputFormat,
    },

    /// Export the filtered chart/summary as a downloadable artifact
    Export {
        /// Artifact kind
        #[arg(long, value_enum)]
        format: export_cmd::ExportFormat,

        /// Dataset files (.jsonl)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Narrow to one tag value (JSON accepted: 3, true; bare text is a string tag)
        #[arg(long)]
        tag: Option<String>,

        /// Narrow to one source file name
        #[arg(long)]
        file: Option<String>,

        /// Output path; defaults to the artifact's standard name in the
        /// current directory
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Identity stamped into the PDF header (default: configured user id)
        #[arg(long)]
        user: Option<String>,
    },

    /// Show or set configuration
    Config {
        /// Set the user id used for PDF branding
        #[arg(long)]
        user_id: Option<String>,

        /// Set the logo image path used for PDF branding
        #[arg(long)]
        logo: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary {
            files,
            tag,
            file,
            format,
        } => summary_cmd::run_summary(&files, tag.as_deref(), file.as_deref(), &format),
        Commands::Export {
            format,
            files,
            tag,
            file,
            output,
            user,
        } => export_cmd::run_export(format, &files, tag.as_deref(), file.as_deref(), output, user),
        Commands::Config { user_id, logo } => {
            if user_id.is_none() && logo.is_none() {
                config_cmd::show_config()
            } else {
                config_cmd::set_config(user_id, logo)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
