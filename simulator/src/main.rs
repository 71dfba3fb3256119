use std::io;

use simulator::{ArrivalFactory, Config, Console, ConsoleRunner, TickEngine};

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    log::info!(
        "landing interval {} minutes, seed {:?}",
        config.landing_interval,
        config.seed
    );

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let runner = ConsoleRunner::new(
        console,
        TickEngine::new(config.landing_interval),
        ArrivalFactory::seeded(config.seed),
    );
    let summary = runner.run()?;

    log::info!("{}", summary);

    Ok(())
}
