use std::fmt;

use crate::{Aircraft, Carrier};

/// An aircraft touched down after holding
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landing {
    pub carrier: Carrier,
    pub flight_number: u16,
    /// Minutes of fuel left on touchdown
    pub fuel_remaining: i32,
    /// Minutes spent in the holding pattern
    pub wait: u64,
}

impl Landing {
    pub fn new(aircraft: &Aircraft, clock: u64) -> Self {
        Self {
            carrier: aircraft.carrier(),
            flight_number: aircraft.flight_number(),
            fuel_remaining: aircraft.fuel_remaining(),
            wait: aircraft.wait_duration(clock),
        }
    }
}

impl fmt::Display for Landing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} flight {} lands with {} minutes of fuel left after waiting {} min(s)",
            self.carrier, self.flight_number, self.fuel_remaining, self.wait
        )
    }
}

/// An aircraft ran out of fuel before it was given a landing slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crash {
    pub carrier: Carrier,
    pub flight_number: u16,
    /// Minutes spent in the holding pattern
    pub wait: u64,
}

impl Crash {
    pub fn new(aircraft: &Aircraft, clock: u64) -> Self {
        Self {
            carrier: aircraft.carrier(),
            flight_number: aircraft.flight_number(),
            wait: aircraft.wait_duration(clock),
        }
    }
}

impl fmt::Display for Crash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} flight {} CRASHES after waiting {} min(s)",
            self.carrier, self.flight_number, self.wait
        )
    }
}

/// Something that happened in the simulation and should be announced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A new aircraft joined the holding pattern
    Arrival(Aircraft),
    Landing(Landing),
    Crash(Crash),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrival(aircraft) => write!(
                f,
                "{} flight {} arrives at {} minutes with {} minutes of fuel left",
                aircraft.carrier(),
                aircraft.flight_number(),
                aircraft.arrival_tick(),
                aircraft.fuel_remaining()
            ),
            Self::Landing(landing) => write!(f, "{landing}"),
            // Crashes are set apart from the surrounding output
            Self::Crash(crash) => write!(f, "\n{crash}"),
        }
    }
}
