use access_audit_tools::commands;
use access_audit_tools::config::{
    AnalysisConfig, DEFAULT_FAILED_LOGIN_THRESHOLD, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_CSV,
};
use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "access-audit")]
#[command(about = "Web server access log analysis", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze: AnalyzeArgs,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Path to the access log file (plain text, .gz, or .zst)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Output CSV report path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_CSV)]
    output: PathBuf,

    /// Flag IPs with more than this many failed login attempts
    #[arg(long, default_value_t = DEFAULT_FAILED_LOGIN_THRESHOLD)]
    threshold: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::GenerateCompletion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "access-audit", &mut std::io::stdout());
            Ok(())
        }
        None => {
            let config = AnalysisConfig {
                log_file: cli.analyze.log_file,
                output_csv: cli.analyze.output,
                failed_login_threshold: cli.analyze.threshold,
            };
            commands::analyze::run(&config)
        }
    }
}
