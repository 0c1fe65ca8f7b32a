use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use mazetrace::{
    app,
    config::{Cli, Command, MazeConfig, RunArgs},
    generators::Generator,
    solvers::Solver,
};

/// Installs the global subscriber. Logs go to stderr unless a file is given; the
/// returned guard must be held until exit so buffered file logs are flushed.
fn init_tracing(
    level: tracing::Level,
    log_file: Option<&Path>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("log file path '{}' has no file name", path.display()))?;
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_level.into(), cli.log_file.as_deref())?;

    match cli.command {
        Some(Command::Generators) => {
            for generator in Generator::ALL {
                println!("{:<10} {}", generator.name(), generator);
            }
        }
        Some(Command::Solvers) => {
            for solver in Solver::ALL {
                let note = if solver.is_optimal() { "shortest path" } else { "any path" };
                println!("{:<18} {} ({})", solver.name(), solver, note);
            }
        }
        Some(Command::Run(args)) => run(&args)?,
        None => run(&cli.run)?,
    }

    Ok(())
}

fn run(args: &RunArgs) -> anyhow::Result<()> {
    let config = MazeConfig::from_args(args)?;
    tracing::debug!("Running with {:?}", config);
    let summaries = app::run(&config, &mut std::io::stdout())?;
    for summary in &summaries {
        println!("{summary}");
    }
    Ok(())
}
