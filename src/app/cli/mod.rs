//! CLI Adapter.

use std::io::{self, Write};

use clap::Parser;
use tracing::debug;

use crate::adapters::{ComposeCommandAdapter, FilesystemWorkloadStore, binary_name};
use crate::app::commands::{environment, help, lifecycle, list, status};
use crate::app::{AppConfig, AppContext};
use crate::domain::{AppError, Command, WORKLOADS_DIR, WorkloadLayout};
use crate::ports::{ComposePort, WorkloadStore};

#[derive(Parser)]
#[command(name = "dcm")]
#[command(version)]
#[command(
    about = "Manage docker-compose workloads stored next to the dcm binary",
    long_about = None
)]
struct Cli {
    /// Command: h (help), ls (list), s (status), u <name> (start), d <name> (stop)
    command: Option<String>,
    /// Command arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Entry point for the CLI.
///
/// Exit status is 0 for success, help, and usage hints, and 1 for any reported error.
pub fn run() {
    let config = AppConfig::from_env();
    config.init_logging();

    let cli = Cli::parse();
    let Some(token) = cli.command else {
        println!("{}", help::USAGE_HINT);
        return;
    };

    let argv0 = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dcm".to_string());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = bootstrap(&argv0, &config).and_then(|ctx| {
        let report = environment::execute(&ctx)?;
        if report.created_workloads_dir {
            writeln!(out, "{} folder not found", WORKLOADS_DIR)?;
            let dir = report.workloads_dir.display();
            writeln!(out, "creating {} folder in {}", WORKLOADS_DIR, dir)?;
            writeln!(out, "{} folder created successfully", WORKLOADS_DIR)?;
        }
        dispatch(&ctx, Command::parse(&token, &cli.args), &mut out)
    });

    if let Err(e) = result {
        let _ = out.flush();
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Resolve the installation root for `argv0` and wire the production adapters.
pub fn bootstrap(
    argv0: &str,
    config: &AppConfig,
) -> Result<AppContext<ComposeCommandAdapter, FilesystemWorkloadStore>, AppError> {
    let root = crate::adapters::resolve_installation_root(binary_name(argv0))?;
    let layout = WorkloadLayout::new(root);
    let store = FilesystemWorkloadStore::from_layout(&layout);
    Ok(AppContext::new(layout, ComposeCommandAdapter::new(&config.compose_program), store))
}

/// Run one command against a validated context, writing user-facing output to `out`.
pub fn dispatch<C, S, W>(
    ctx: &AppContext<C, S>,
    command: Command,
    out: &mut W,
) -> Result<(), AppError>
where
    C: ComposePort,
    S: WorkloadStore,
    W: Write,
{
    debug!(?command, "dispatching");
    match command {
        Command::Help => {
            write!(out, "{}", help::render(ctx.layout()))?;
        }
        Command::List => {
            for name in list::execute(ctx)? {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Status => {
            for entry in status::execute(ctx)? {
                writeln!(out, "Compose {}", entry.name)?;
                writeln!(out, "{}", entry.output)?;
            }
        }
        Command::Start(Some(name)) => {
            let outcome = lifecycle::start(ctx, &name)?;
            writeln!(out, "{}", outcome.stdout)?;
            writeln!(out, "{}", outcome.confirmation())?;
        }
        Command::Stop(Some(name)) => {
            let outcome = lifecycle::stop(ctx, &name)?;
            writeln!(out, "{}", outcome.stdout)?;
            writeln!(out, "{}", outcome.confirmation())?;
        }
        Command::Start(None) | Command::Stop(None) => {
            writeln!(out, "{}", help::MISSING_NAME_HINT)?;
        }
        Command::Unknown(_) => {
            writeln!(out, "{}", help::USAGE_HINT)?;
        }
    }
    Ok(())
}
