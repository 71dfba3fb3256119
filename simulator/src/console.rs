use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// How a typed character is normalized before it is validated
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseConversion {
    #[default]
    None,
    Upper,
}

impl CaseConversion {
    fn apply(&self, c: char) -> char {
        match self {
            Self::None => c,
            Self::Upper => c.to_ascii_uppercase(),
        }
    }
}

/// Line-oriented prompts over any input/output pair.
///
/// Every `read_*` method returns `Ok(None)` once the input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes a line of output
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prompts for a line of input, returning it without its line ending
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts until the first character entered is one of `valid`. An empty entry
    /// chooses `default`, which is always accepted.
    pub fn read_character(
        &mut self,
        default: char,
        valid: &str,
        conversion: CaseConversion,
        prompt: &str,
    ) -> io::Result<Option<char>> {
        let default = conversion.apply(default);
        let mut valid = valid.chars().map(|c| conversion.apply(c)).collect::<String>();
        if !valid.contains(default) {
            valid.insert(0, default);
        }

        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            let entry = line.chars().next().map_or(default, |c| conversion.apply(c));
            if valid.contains(entry) {
                return Ok(Some(entry));
            }

            log::warn!("rejected entry {:?}", line);
            self.say(format!(
                "Invalid entry. Select an entry from the characters shown in brackets: [{valid}]"
            ))?;
        }
    }

    /// Prompts until an integer is entered. An empty entry chooses `default`, which is
    /// accepted even when it lies outside `allowed`.
    pub fn read_integer(
        &mut self,
        default: i64,
        allowed: RangeInclusive<i64>,
        prompt: &str,
    ) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            let entry = match line.trim() {
                "" => default,
                s => match s.parse::<i64>() {
                    Ok(n) => n,
                    Err(e) => {
                        log::warn!("rejected entry {:?}: {}", line, e);
                        self.say("Invalid entry...")?;
                        continue;
                    }
                },
            };

            if entry == default || allowed.contains(&entry) {
                return Ok(Some(entry));
            }

            log::warn!("rejected entry {} outside {:?}", entry, allowed);
            self.say(format!(
                "Invalid entry. Allowable range is {}...{} (default = {}).",
                allowed.start(),
                allowed.end(),
                default
            ))?;
        }
    }

    /// Prompts for free text, choosing `default` on an empty entry
    pub fn read_string(&mut self, default: &str, prompt: &str) -> io::Result<Option<String>> {
        Ok(self
            .read_line(prompt)?
            .map(|line| if line.is_empty() { default.to_string() } else { line }))
    }
}
