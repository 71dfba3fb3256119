mod command;
mod config;
mod console;
mod engine;
mod factory;
mod queue;
mod runner;

pub use command::{Command, MENU};
pub use config::{Config, LANDING_INTERVAL_VAR, SEED_VAR};
pub use console::{CaseConversion, Console};
pub use engine::{SimulationState, Summary, TickEngine, TickOutcome};
pub use factory::ArrivalFactory;
pub use queue::{HoldingQueue, PriorityQueue};
pub use runner::ConsoleRunner;
