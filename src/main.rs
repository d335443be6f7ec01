use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mackie_driver_check::config::{API_URL, CheckerConfig, FETCH_TIMEOUT_SECS, KNOWN_DRIVER};
use mackie_driver_check::driver::checker::check;
use mackie_driver_check::driver::http::HttpListingSource;
use mackie_driver_check::report::render;

#[derive(Parser)]
#[command(name = "mackie-driver-check")]
#[command(version, about = "Check whether a newer Mackie USB driver is available")]
struct Cli {
    /// Filename of the installed driver
    #[arg(long, default_value = KNOWN_DRIVER)]
    known_driver: String,

    /// File explorer listing URL
    #[arg(long, default_value = API_URL)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,
}

impl Cli {
    fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            known_driver: self.known_driver.clone(),
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..CheckerConfig::default()
        }
    }
}

fn init_logging() {
    // stdout is reserved for the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn wait_for_enter() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\nPress Enter to exit...")?;
    stdout.flush()?;
    io::stdin().lock().read_line(&mut String::new())?;
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.checker_config();

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let source = HttpListingSource::new(&config)?;
            check(&source, &config.known_driver).await
        });

    render(&result, &mut io::stdout().lock())?;

    if !cli.no_pause && io::stdin().is_terminal() {
        wait_for_enter()?;
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
