use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use schema::Event;

use crate::{ArrivalFactory, CaseConversion, Command, Console, Summary, TickEngine, MENU};

const PROMPT: &str = "\nNext Action:";

/// Interactive simulation driven by commands typed at a [`Console`]
pub struct ConsoleRunner<R, W, G: Rng = ChaCha8Rng> {
    console: Console<R, W>,
    engine: TickEngine,
    arrivals: ArrivalFactory<G>,
}

impl<R: BufRead, W: Write, G: Rng> ConsoleRunner<R, W, G> {
    pub fn new(console: Console<R, W>, engine: TickEngine, arrivals: ArrivalFactory<G>) -> Self {
        Self {
            console,
            engine,
            arrivals,
        }
    }

    /// Runs commands until the user exits or the input runs out, returning the totals
    /// for the session
    pub fn run(mut self) -> io::Result<Summary> {
        log::info!("simulation started");
        self.console.say(&*MENU)?;

        loop {
            let Some(key) = self.console.read_character(
                Command::DEFAULT.key(),
                &Command::keys(),
                CaseConversion::Upper,
                PROMPT,
            )?
            else {
                log::info!("input closed");
                break;
            };

            let command = Command::try_from(key)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            if let ControlFlow::Break(()) = self.execute(command)? {
                break;
            }
        }

        let summary = self.engine.summary();
        self.console.say(summary)?;
        Ok(summary)
    }

    /// Carries out a single command
    pub fn execute(&mut self, command: Command) -> io::Result<ControlFlow<()>> {
        log::debug!("executing {:?} at {} minutes", command, self.engine.clock());

        match command {
            Command::AdvanceTime => {
                self.tick()?;
            }

            Command::NewArrival => {
                let aircraft = self.arrivals.create_arrival(self.engine.clock());
                self.engine.admit(aircraft.clone());
                self.console.say(Event::Arrival(aircraft))?;
                self.tick()?;
            }

            Command::ShowQueue => {
                for aircraft in self.engine.waiting() {
                    self.console.say(aircraft)?;
                }
            }

            Command::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    pub fn engine(&self) -> &TickEngine {
        &self.engine
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn tick(&mut self) -> io::Result<()> {
        for event in self.engine.advance_one_tick().events() {
            self.console.say(event)?;
        }
        Ok(())
    }
}
