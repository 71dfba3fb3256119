use std::fmt;
use std::ops::RangeInclusive;

/// Fuel (in minutes) that a newly arrived aircraft may be carrying
pub const FUEL_RANGE: RangeInclusive<i32> = 1..=20;

/// Flight numbers handed out to newly arrived aircraft
pub const FLIGHT_NUMBER_RANGE: RangeInclusive<u16> = 1000..=9999;

/// An airline operating the flights that arrive at the airport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Carrier {
    United,
    Southwest,
    Northwest,
    Continental,
    American,
    Frontier,
    Alaska,
    Lufthansa,
}

impl Carrier {
    /// Every carrier which may be assigned to an arrival
    pub const ALL: [Carrier; 8] = [
        Self::United,
        Self::Southwest,
        Self::Northwest,
        Self::Continental,
        Self::American,
        Self::Frontier,
        Self::Alaska,
        Self::Lufthansa,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::United => "United",
            Self::Southwest => "Southwest",
            Self::Northwest => "Northwest",
            Self::Continental => "Continental",
            Self::American => "American",
            Self::Frontier => "Frontier",
            Self::Alaska => "Alaska",
            Self::Lufthansa => "Lufthansa",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An `Aircraft` circling in the holding pattern, waiting for a landing slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aircraft {
    /// The airline operating the flight
    carrier: Carrier,
    /// Flight number, only unique by chance
    flight_number: u16,
    /// Minutes of fuel left; may briefly reach zero before the aircraft runs dry
    fuel_remaining: i32,
    /// Simulation clock at the moment the aircraft joined the holding pattern
    arrival_tick: u64,
}

impl Aircraft {
    pub fn new(
        carrier: Carrier,
        flight_number: u16,
        fuel_remaining: i32,
        arrival_tick: u64,
    ) -> Self {
        Self {
            carrier,
            flight_number,
            fuel_remaining,
            arrival_tick,
        }
    }

    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    pub fn flight_number(&self) -> u16 {
        self.flight_number
    }

    pub fn fuel_remaining(&self) -> i32 {
        self.fuel_remaining
    }

    pub fn arrival_tick(&self) -> u64 {
        self.arrival_tick
    }

    /// Burns a minute of fuel, returning what is left
    pub fn burn_fuel(&mut self) -> i32 {
        self.fuel_remaining -= 1;
        self.fuel_remaining
    }

    /// An aircraft has run dry once it needed fuel it did not have
    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel_remaining < 0
    }

    /// Returns the number of minutes spent holding as of `clock`
    pub fn wait_duration(&self, clock: u64) -> u64 {
        clock.saturating_sub(self.arrival_tick)
    }
}

/// The per-aircraft line shown when listing the holding pattern
impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} flight {}: Fuel left={}; Arrival time={}",
            self.carrier, self.flight_number, self.fuel_remaining, self.arrival_tick
        )
    }
}
