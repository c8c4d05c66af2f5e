use std::{
    io::{self, Write},
    path::PathBuf,
};

mod add;
mod console;
mod menu;
mod terminal;
mod view;

use clap::ArgAction;
use console::Console;
use roster::{Config, Directory};
use terminal::Palette;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(short, long, default_value = "roster.toml")]
    config: PathBuf,

    /// The directory roster files are stored in (overrides the config file)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let directory = self.open_directory()?;
        install_interrupt_handler();

        let mut console = Console::stdio(Palette::detect());
        menu::run(&mut console, &directory)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn open_directory(&self) -> anyhow::Result<Directory> {
        let mut config = Config::load_or_default(&self.config)?;
        if let Some(data_dir) = &self.data_dir {
            config.data_dir.clone_from(data_dir);
        }

        let data_dir = config.data_dir.clone();
        Directory::open(config).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create data directory {}: {e}",
                data_dir.display()
            )
        })
    }

    /// Logs go to stderr; stdout carries the interactive session.
    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Ends the session with a goodbye on Ctrl+C.
///
/// A blocked line read cannot be cancelled, so the handler exits the process
/// itself.
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let mut stdout = io::stdout().lock();
        // Nothing useful can be done if stdout is gone.
        let _ = writeln!(stdout, "{}", menu::INTERRUPTED);
        let _ = stdout.flush();
        std::process::exit(0);
    });

    if let Err(e) = result {
        tracing::warn!("Failed to install interrupt handler: {e}");
    }
}
