use std::fmt;

use schema::{Aircraft, Crash, Event, HoldingPattern, Landing, DEFAULT_LANDING_INTERVAL};

use crate::HoldingQueue;

/// Everything the simulation knows at a point in time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState<Q> {
    /// Minutes since the start of the simulation
    pub clock: u64,
    /// Minutes since the runway last accepted a landing
    pub ticks_since_landing: u64,
    /// Aircraft waiting to land
    pub queue: Q,
}

/// What happened to the holding pattern during a single tick
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// The runway accepts at most one aircraft per tick
    pub landing: Option<Landing>,
    pub crashes: Vec<Crash>,
}

impl TickOutcome {
    /// Returns the outcome as announcements, landing first
    pub fn events(self) -> impl Iterator<Item = Event> {
        self.landing
            .map(Event::Landing)
            .into_iter()
            .chain(self.crashes.into_iter().map(Event::Crash))
    }
}

/// Running totals for a simulation session
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Clock at the time the summary was taken
    pub clock: u64,
    pub arrivals: usize,
    pub landings: usize,
    pub crashes: usize,
    /// Aircraft still in the holding pattern
    pub holding: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Simulation ended after {} minutes: {} arrivals, {} landings, {} crashes, {} still holding",
            self.clock, self.arrivals, self.landings, self.crashes, self.holding
        )
    }
}

/// Advances the simulation clock one minute at a time, landing and ageing the aircraft
/// in the holding pattern.
///
/// The engine owns the [`SimulationState`] outright; callers may admit new arrivals and
/// request ticks, but the clock and runway timer only ever move inside
/// [`advance_one_tick`](Self::advance_one_tick).
pub struct TickEngine<Q = HoldingQueue> {
    state: SimulationState<Q>,
    /// Minimum number of ticks between two landings
    landing_interval: u64,
    arrivals: usize,
    landings: usize,
    crashes: usize,
}

impl TickEngine<HoldingQueue> {
    pub fn new(landing_interval: u64) -> Self {
        Self::with_queue(HoldingQueue::by_fuel(), landing_interval)
    }
}

impl Default for TickEngine<HoldingQueue> {
    fn default() -> Self {
        Self::new(DEFAULT_LANDING_INTERVAL)
    }
}

impl<Q: HoldingPattern + Default> TickEngine<Q> {
    /// Starts the clock at zero with the runway free, so the first tick may land an aircraft
    pub fn with_queue(queue: Q, landing_interval: u64) -> Self {
        let landing_interval = landing_interval.max(1);

        Self {
            state: SimulationState {
                clock: 0,
                ticks_since_landing: landing_interval,
                queue,
            },
            landing_interval,
            arrivals: 0,
            landings: 0,
            crashes: 0,
        }
    }

    pub fn state(&self) -> &SimulationState<Q> {
        &self.state
    }

    pub fn clock(&self) -> u64 {
        self.state.clock
    }

    pub fn ticks_since_landing(&self) -> u64 {
        self.state.ticks_since_landing
    }

    /// Returns the holding aircraft in landing order; the holding pattern is untouched
    pub fn waiting(&self) -> Q::Waiting<'_> {
        self.state.queue.waiting()
    }

    /// Adds a newly arrived aircraft to the holding pattern
    pub fn admit(&mut self, aircraft: Aircraft) {
        log::info!(
            "{} flight {} joins the holding pattern with {} minutes of fuel",
            aircraft.carrier(),
            aircraft.flight_number(),
            aircraft.fuel_remaining()
        );
        self.arrivals += 1;
        self.state.queue.insert_ordered(aircraft);
    }

    /// Lets one minute pass: the front aircraft lands if the runway is free, every other
    /// aircraft burns a minute of fuel, and those that run dry crash. Wait durations are
    /// measured against the clock before it advances.
    pub fn advance_one_tick(&mut self) -> TickOutcome {
        let clock = self.state.clock;
        let mut outcome = TickOutcome::default();

        self.state.ticks_since_landing += 1;

        if self.state.ticks_since_landing >= self.landing_interval {
            if let Some(aircraft) = self.state.queue.pop_front() {
                let landing = Landing::new(&aircraft, clock);
                log::info!("{landing}");
                self.landings += 1;
                self.state.ticks_since_landing = 0;
                outcome.landing = Some(landing);
            }
        }

        // Drain the whole pattern, then rebuild it from the survivors
        let mut holding = Q::default();
        while let Some(mut aircraft) = self.state.queue.pop_front() {
            aircraft.burn_fuel();
            if aircraft.is_out_of_fuel() {
                let crash = Crash::new(&aircraft, clock);
                log::info!("{crash}");
                outcome.crashes.push(crash);
            } else {
                holding.push_back(aircraft);
            }
        }
        while let Some(aircraft) = holding.pop_front() {
            self.state.queue.insert_ordered(aircraft);
        }
        self.crashes += outcome.crashes.len();

        self.state.clock += 1;
        log::debug!(
            "tick {} complete, {} aircraft holding",
            self.state.clock,
            self.state.queue.len()
        );

        outcome
    }

    pub fn summary(&self) -> Summary {
        Summary {
            clock: self.state.clock,
            arrivals: self.arrivals,
            landings: self.landings,
            crashes: self.crashes,
            holding: self.state.queue.len(),
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use schema::Carrier;

    use super::*;

    fn aircraft(flight_number: u16, fuel: i32, arrival_tick: u64) -> Aircraft {
        Aircraft::new(Carrier::American, flight_number, fuel, arrival_tick)
    }

    fn fuel_levels(engine: &TickEngine) -> Vec<(u16, i32)> {
        engine
            .waiting()
            .map(|a| (a.flight_number(), a.fuel_remaining()))
            .collect()
    }

    #[test]
    fn test_first_arrival_lands_immediately() {
        let mut engine = TickEngine::default();
        let arrival = Aircraft::new(Carrier::Southwest, 1234, 5, engine.clock());
        engine.admit(arrival);

        let outcome = engine.advance_one_tick();

        assert_eq!(
            outcome.landing,
            Some(Landing {
                carrier: Carrier::Southwest,
                flight_number: 1234,
                fuel_remaining: 5,
                wait: 0,
            })
        );
        assert!(outcome.crashes.is_empty());
        assert_eq!(engine.ticks_since_landing(), 0);
        assert_eq!(engine.clock(), 1);
        assert_eq!(engine.waiting().count(), 0);
    }

    #[test]
    fn test_empty_tick_only_moves_clocks() {
        let mut engine = TickEngine::default();
        let before = engine.state().clone();

        let outcome = engine.advance_one_tick();

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(engine.clock(), before.clock + 1);
        assert_eq!(engine.ticks_since_landing(), before.ticks_since_landing + 1);
        assert_eq!(engine.state().queue.len(), 0);
    }

    #[test]
    fn test_no_landing_right_after_landing() {
        let mut engine = TickEngine::default();
        engine.admit(aircraft(1000, 10, 0));
        assert!(engine.advance_one_tick().landing.is_some());

        engine.admit(aircraft(1001, 1, 1));
        engine.admit(aircraft(1002, 3, 1));
        let outcome = engine.advance_one_tick();

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(engine.ticks_since_landing(), 1);
        assert_eq!(fuel_levels(&engine), vec![(1001, 0), (1002, 2)]);
    }

    #[test]
    fn test_landings_spaced_by_interval() {
        let mut engine = TickEngine::default();
        for n in 0..6 {
            engine.admit(aircraft(1000 + n, 20, 0));
        }

        let landed = (0..6)
            .map(|_| engine.advance_one_tick().landing.is_some())
            .collect::<Vec<_>>();

        assert_eq!(landed, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_longer_landing_interval() {
        let mut engine = TickEngine::new(3);
        for n in 0..4 {
            engine.admit(aircraft(1000 + n, 20, 0));
        }

        let landed = (0..7)
            .map(|_| engine.advance_one_tick().landing.is_some())
            .collect::<Vec<_>>();

        assert_eq!(landed, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn test_empty_fuel_tank_crashes() {
        let mut engine = TickEngine::default();
        engine.admit(aircraft(1000, 10, 0));
        engine.advance_one_tick();

        engine.admit(aircraft(1001, 0, 1));
        engine.admit(aircraft(1002, 4, 1));
        let outcome = engine.advance_one_tick();

        assert!(outcome.landing.is_none());
        assert_eq!(
            outcome.crashes,
            vec![Crash {
                carrier: Carrier::American,
                flight_number: 1001,
                wait: 0,
            }]
        );
        assert_eq!(fuel_levels(&engine), vec![(1002, 3)]);
        assert_eq!(engine.summary().crashes, 1);
    }

    #[test]
    fn test_zero_fuel_survives_one_tick() {
        let mut engine = TickEngine::default();
        engine.admit(aircraft(1000, 10, 0));
        engine.advance_one_tick();

        // Holding with a single minute of fuel, behind nobody but unable to land
        engine.admit(aircraft(1001, 1, 1));
        let first = engine.advance_one_tick();
        assert!(first.crashes.is_empty());
        assert_eq!(fuel_levels(&engine), vec![(1001, 0)]);

        // Runway is free again, so the empty aircraft lands rather than crashing
        let second = engine.advance_one_tick();
        assert_eq!(second.landing.map(|l| l.fuel_remaining), Some(0));
        assert!(second.crashes.is_empty());
    }

    #[test]
    fn test_landing_and_crash_in_same_tick() {
        let mut engine = TickEngine::default();
        engine.admit(aircraft(1000, 0, 0));
        engine.admit(aircraft(1001, 0, 0));
        engine.admit(aircraft(1002, 6, 0));

        let outcome = engine.advance_one_tick();

        assert_eq!(outcome.landing.map(|l| l.flight_number), Some(1000));
        assert_eq!(
            outcome.crashes.iter().map(|c| c.flight_number).collect::<Vec<_>>(),
            vec![1001]
        );
        assert_eq!(fuel_levels(&engine), vec![(1002, 5)]);
    }

    #[test]
    fn test_equal_fuel_keeps_arrival_order_across_ticks() {
        let mut engine = TickEngine::new(5);
        engine.admit(aircraft(1, 3, 0));
        engine.admit(aircraft(2, 0, 0));
        engine.admit(aircraft(3, 3, 0));
        engine.admit(aircraft(4, 0, 0));
        engine.admit(aircraft(5, 3, 0));

        let outcome = engine.advance_one_tick();

        assert_eq!(outcome.landing.map(|l| l.flight_number), Some(2));
        assert_eq!(
            outcome.crashes,
            vec![Crash {
                carrier: Carrier::American,
                flight_number: 4,
                wait: 0,
            }]
        );
        assert_eq!(fuel_levels(&engine), vec![(1, 2), (3, 2), (5, 2)]);

        engine.advance_one_tick();
        assert_eq!(fuel_levels(&engine), vec![(1, 1), (3, 1), (5, 1)]);
    }

    #[test]
    fn test_crash_wait_uses_clock_before_tick() {
        let mut engine = TickEngine::default();
        engine.admit(aircraft(1000, 20, 0));
        engine.admit(aircraft(1001, 20, 0));
        engine.advance_one_tick();
        engine.advance_one_tick();
        assert_eq!(engine.clock(), 2);

        engine.admit(aircraft(1002, 0, 2));
        let outcome = engine.advance_one_tick();

        // The low-fuel arrival is at the front and takes the runway instead
        assert_eq!(outcome.landing.map(|l| (l.flight_number, l.wait)), Some((1002, 0)));

        engine.admit(aircraft(1003, 0, 1));
        let outcome = engine.advance_one_tick();
        assert_eq!(outcome.crashes.iter().map(|c| c.wait).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_outcome_events_order() {
        let mut engine = TickEngine::default();
        engine.admit(aircraft(1000, 0, 0));
        engine.admit(aircraft(1001, 0, 0));

        let events = engine.advance_one_tick().events().collect::<Vec<_>>();

        assert!(matches!(events.as_slice(), [Event::Landing(_), Event::Crash(_)]));
    }

    #[test]
    fn test_summary() {
        let mut engine = TickEngine::default();
        engine.admit(aircraft(1000, 0, 0));
        engine.admit(aircraft(1001, 0, 0));
        engine.admit(aircraft(1002, 9, 0));
        engine.advance_one_tick();

        assert_eq!(
            engine.summary(),
            Summary {
                clock: 1,
                arrivals: 3,
                landings: 1,
                crashes: 1,
                holding: 1,
            }
        );
    }

    proptest! {
        #[test]
        fn waiting_is_side_effect_free(fuels in prop::collection::vec(0i32..=20, 0..32)) {
            let mut engine = TickEngine::default();
            for (i, fuel) in fuels.iter().enumerate() {
                engine.admit(aircraft(i as u16, *fuel, 0));
            }
            let before = engine.state().clone();

            for _ in 0..3 {
                let _ = engine.waiting().count();
            }

            prop_assert_eq!(engine.state(), &before);
        }

        #[test]
        fn tick_keeps_pattern_ordered(fuels in prop::collection::vec(0i32..=20, 0..32), ticks in 1usize..8) {
            let mut engine = TickEngine::default();
            for (i, fuel) in fuels.iter().enumerate() {
                engine.admit(aircraft(i as u16, *fuel, 0));
            }

            for _ in 0..ticks {
                let outcome = engine.advance_one_tick();
                let waiting = engine.waiting().collect::<Vec<_>>();
                for pair in waiting.windows(2) {
                    prop_assert!(pair[0].fuel_remaining() <= pair[1].fuel_remaining());
                    if pair[0].fuel_remaining() == pair[1].fuel_remaining() {
                        prop_assert!(pair[0].flight_number() < pair[1].flight_number());
                    }
                }
                prop_assert!(waiting.iter().all(|a| a.fuel_remaining() >= 0));
                prop_assert!(outcome.crashes.len() + usize::from(outcome.landing.is_some()) <= fuels.len());
            }
        }
    }
}
