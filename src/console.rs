//! Interactive console: a small command loop over lookup and enrichment.
//!
//! Commands: `country <us|india|uk>`, `find <name>`, `random`, `help`, `quit`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::capitals::{self, CapitalMatch, CountryKey};
use crate::enrich::Enricher;
use crate::report;

const HELP: &str = "Commands:
  country [US|India|UK]   - switch country
  find <state name>       - lookup capital for state
  random                  - pick a random state and show capital
  quit/exit               - exit
";

pub struct Console<'a> {
    enricher: &'a mut Enricher,
    country: CountryKey,
    rng: StdRng,
}

impl<'a> Console<'a> {
    pub fn new(enricher: &'a mut Enricher, country: CountryKey) -> Self {
        Self {
            enricher,
            country,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn country(&self) -> CountryKey {
        self.country
    }

    /// Run until `quit`/`exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "Capital Quest (CLI) — US, India, UK")?;
        writeln!(out, "Type commands or \"help\" for instructions.")?;

        let mut lines = input.lines();
        loop {
            write!(out, "[{}]> ", self.country.display_name())?;
            out.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    writeln!(out)?;
                    return Ok(());
                }
            };
            if !self.execute(line.trim(), out)? {
                return Ok(());
            }
        }
    }

    /// Execute one command line. Returns `false` when the session should end.
    pub fn execute<W: Write>(&mut self, cmd: &str, out: &mut W) -> io::Result<bool> {
        if cmd.is_empty() {
            return Ok(true);
        }
        debug!("console command: {}", cmd);

        let lower = cmd.to_lowercase();
        if lower == "quit" || lower == "exit" {
            writeln!(out, "Goodbye!")?;
            return Ok(false);
        }
        if lower == "help" || lower == "?" {
            write!(out, "{}", HELP)?;
            return Ok(true);
        }

        let (verb, arg) = match cmd.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb.to_lowercase(), Some(rest.trim()).filter(|a| !a.is_empty())),
            None => (lower, None),
        };

        match (verb.as_str(), arg) {
            ("country", Some(arg)) => match CountryKey::parse(arg) {
                Some(country) => {
                    self.country = country;
                    writeln!(out, "Switched to {}", country.display_name())?;
                }
                None => writeln!(out, "Unknown country. Use us, india, or uk.")?,
            },
            ("find", Some(arg)) => match capitals::resolve(arg, self.country) {
                Some(found) => self.show(&found, out)?,
                None => writeln!(out, "No match found. Try a fuller name or use \"random\".")?,
            },
            ("random", _) => match capitals::random_pick(self.country, &mut self.rng) {
                Some(found) => self.show(&found, out)?,
                None => writeln!(out, "No data for that country.")?,
            },
            _ => writeln!(out, "Unknown command. Type \"help\" for instructions.")?,
        }
        Ok(true)
    }

    fn show<W: Write>(&mut self, found: &CapitalMatch, out: &mut W) -> io::Result<()> {
        let enriched = self.enricher.enrich(&found.capital);
        write!(out, "{}", report::render_inline(found, &enriched))
    }
}
