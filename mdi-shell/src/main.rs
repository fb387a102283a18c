use std::io;

use anyhow::Context;
use tracing::{error, info};

use mdi_core::{init_logging, init_minimal_logging, ConfigLoader};
use mdi_shell::{console, MainWindow};

fn main() -> anyhow::Result<()> {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            init_minimal_logging();
            error!("Failed to load configuration: {}", e);
            return Err(e).context("loading configuration");
        }
    };
    init_logging(&config.logging, false).context("initializing logging")?;
    info!("mdi-shell starting.");

    let mut window = MainWindow::open(&config.workspace);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    print!("{}", console::render_state(window.manager()));
    console::run(&mut window, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
        .context("reading console input")?;

    info!("mdi-shell exiting.");
    Ok(())
}
