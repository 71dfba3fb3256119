use itertools::Itertools;
use once_cell::sync::Lazy;

/// The menu shown when the simulator starts
pub static MENU: Lazy<String> = Lazy::new(|| {
    let title = "Airport Simulation Program";
    let entries = Command::ALL.iter().map(|command| {
        let key = match command {
            command if *command == Command::DEFAULT => "ENTER".to_string(),
            command => format!(" {}   ", command.key()),
        };
        format!("{key} = {}", command.description())
    });

    std::iter::once(title.to_string())
        .chain(std::iter::once("-".repeat(title.len())))
        .chain(entries)
        .join("\n")
});

/// An action requested at the console
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Let a minute pass
    AdvanceTime,
    /// A new aircraft arrives, then a minute passes
    NewArrival,
    /// List the holding pattern; the clock does not move
    ShowQueue,
    Exit,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Self::AdvanceTime,
        Self::NewArrival,
        Self::ShowQueue,
        Self::Exit,
    ];

    /// Chosen when the user just presses ENTER
    pub const DEFAULT: Command = Self::AdvanceTime;

    pub fn key(&self) -> char {
        match self {
            Self::AdvanceTime => 'D',
            Self::NewArrival => 'P',
            Self::ShowQueue => 'S',
            Self::Exit => 'X',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::AdvanceTime => "increment the simulation clock only (default)",
            Self::NewArrival => "generate a new arrival (and increment the clock)",
            Self::ShowQueue => "show priority queue contents (clock does not change)",
            Self::Exit => "exit simulation program",
        }
    }

    /// Every key accepted at the prompt
    pub fn keys() -> String {
        Self::ALL.iter().map(Command::key).collect()
    }
}

impl TryFrom<char> for Command {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|command| command.key() == c.to_ascii_uppercase())
            .ok_or_else(|| format!("invalid command: {c}"))
    }
}
