use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use schema::{Aircraft, Carrier, FLIGHT_NUMBER_RANGE, FUEL_RANGE};

/// Produces the aircraft which arrive at the airport, with randomly chosen attributes
pub struct ArrivalFactory<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl ArrivalFactory<ChaCha8Rng> {
    /// Reproducible arrivals for a given seed, otherwise seeded from the OS
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self::new(rng)
    }
}

impl<R: Rng> ArrivalFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a new aircraft joining the holding pattern at `current_clock`
    pub fn create_arrival(&mut self, current_clock: u64) -> Aircraft {
        let carrier = Carrier::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Carrier::United);
        let flight_number = self.rng.gen_range(FLIGHT_NUMBER_RANGE);
        let fuel_remaining = self.rng.gen_range(FUEL_RANGE);

        Aircraft::new(carrier, flight_number, fuel_remaining, current_clock)
    }
}
