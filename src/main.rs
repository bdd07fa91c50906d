use anyhow::Context;
use clap::Parser;
use slotkeeper::config::Config;
use slotkeeper::logging::{init_file_tracing, init_stderr_tracing};
use slotkeeper::script::{run_script, ListFormat};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "slotkeeper",
    version,
    about = "Track parking slots and allocate them to vehicles"
)]
struct Cli {
    /// Config file to use instead of ~/.config/slotkeeper/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run commands from a script file ("-" for stdin) instead of the UI
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Print `list` output as JSON (script mode only)
    #[arg(long, requires = "script")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match &cli.script {
        Some(path) => {
            init_stderr_tracing(&config.logging);
            let mut registry = config
                .build_registry()
                .context("Failed to seed slots from configuration")?;
            let format = if cli.json {
                ListFormat::Json
            } else {
                ListFormat::Table
            };
            let mut stdout = io::stdout().lock();
            let finished = if path.as_os_str() == "-" {
                run_script(io::stdin().lock(), &mut stdout, &mut registry, format)
            } else {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open script '{}'", path.display()))?;
                run_script(BufReader::new(file), &mut stdout, &mut registry, format)
            };
            finished.context("Failed to run script")?;
        }
        None => {
            init_file_tracing(&config.logging).context("Failed to open log file")?;
            let registry = config
                .build_registry()
                .context("Failed to seed slots from configuration")?;
            slotkeeper::ui::runtime::run(registry, config.ui.tick_rate())
                .context("Terminal UI failed")?;
        }
    }

    Ok(())
}
