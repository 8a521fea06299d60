use who_drowning::cli::{parse_args, run_cli};
use who_drowning::config::{ClientConfig, DEFAULT_LOG_LEVEL};
use who_drowning::logging::init_logging;

use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Before reading config, so invalid values get reported.
    init_logging(DEFAULT_LOG_LEVEL);

    let args = parse_args(std::env::args());
    let config = ClientConfig::from_env();

    // Workflows run on spawned tasks; the CLI waits for them on this runtime.
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_cli(args, config))
}
