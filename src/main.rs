use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use prwm::AppError;
use prwm::app::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, RunOptions};
use prwm::app::output::{MATCHED_WORKFLOWS_OUTPUT, write_step_output};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "prwm")]
#[command(version)]
#[command(
    about = "Report which workflows would be triggered by the current pull request event",
    long_about = None
)]
struct Cli {
    /// Workflow file globs, one per line; `!` lines exclude earlier matches
    #[arg(short, long, default_value = ".github/workflows/*.y*ml")]
    workflows: String,
    /// Path to the pull request event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,
    /// Repository in owner/repo form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: String,
    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: Url,
    /// Token used to authenticate API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
    /// Step output file; defaults to GITHUB_OUTPUT when set
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_file: Option<PathBuf>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let token = cli.token.or_else(|| std::env::var("GH_TOKEN").ok());
    let options = RunOptions {
        workflows: cli.workflows,
        event_path: cli.event_path,
        repository: cli.repository,
        api_url: cli.api_url,
        token,
        timeout_secs: cli.timeout_secs,
    };

    let result = prwm::match_workflows(&options)?;
    let json = result.to_json()?;
    if let Some(output_file) = cli.output_file.filter(|p| !p.as_os_str().is_empty()) {
        write_step_output(&output_file, MATCHED_WORKFLOWS_OUTPUT, &json)?;
    }
    println!("{}", json);
    Ok(())
}
