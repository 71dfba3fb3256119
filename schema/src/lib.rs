mod entities;
mod events;
mod holding;

pub use entities::{Aircraft, Carrier, FLIGHT_NUMBER_RANGE, FUEL_RANGE};
pub use events::{Crash, Event, Landing};
pub use holding::HoldingPattern;

/// Ticks which must elapse between two landings on the runway
pub const DEFAULT_LANDING_INTERVAL: u64 = 2;
