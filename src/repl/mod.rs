//! Interactive medal viewer
//!
//! A blocking menu loop over a loaded [`QueryEngine`]. Every prompt repeats
//! until it gets one of its expected tokens; running out of input ends the
//! session quietly. Each displayed view can be exported to CSV.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use std::path::PathBuf;

use crate::query::QueryEngine;
use crate::repl::commands::{MenuChoice, SaveAnswer, Scope, MAIN_MENU, SCOPE_MENU};
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{InputHandler, InputSource, ScriptedInput};
use crate::table::{export_table, Table};

const PROMPT: &str = "> ";

/// Which view was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    CountryRanking,
    SportsByCountry,
    AthletesBySport,
}

/// What one menu action ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    /// A table was shown and the save prompt answered
    Shown {
        kind: ViewKind,
        rows: usize,
        saved: Option<PathBuf>,
    },
    /// A specific-country athletes query matched nothing
    NoMedalists { country: String, sport: String },
    Exit,
}

/// Viewer session coordinator
///
/// Owns the input source and display; borrows the query engine.
pub struct MedalViewer<'a, I: InputSource> {
    engine: &'a QueryEngine,
    input: I,
    display: DisplayManager,
    export_dir: PathBuf,
}

impl<'a, I: InputSource> MedalViewer<'a, I> {
    pub fn new(engine: &'a QueryEngine, input: I, export_dir: PathBuf) -> Self {
        Self {
            engine,
            input,
            display: DisplayManager::new(),
            export_dir,
        }
    }

    pub fn with_display(mut self, display: DisplayManager) -> Self {
        self.display = display;
        self
    }

    /// Give back the input source (scripted input is inspected by tests)
    pub fn into_input(self) -> I {
        self.input
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// Returns the outcome of every completed action, in order.
    pub fn run(&mut self) -> Result<Vec<ViewOutcome>> {
        self.display
            .show_banner(env!("CARGO_PKG_VERSION"), self.engine.records().len());

        let mut outcomes = Vec::new();
        loop {
            let choice = match self.prompt_menu(
                "Select the viewing method:",
                &MAIN_MENU,
                MenuChoice::parse,
                "Invalid choice. Please select a valid method (1, 2, 3) or 4 to exit.",
            )? {
                Some(choice) => choice,
                None => break,
            };

            let outcome = match choice {
                MenuChoice::CountryRanking => self.country_ranking()?,
                MenuChoice::SportsByCountry => self.sports_by_country()?,
                MenuChoice::AthletesBySport => self.athletes_by_sport()?,
                MenuChoice::Exit => Some(ViewOutcome::Exit),
            };

            match outcome {
                Some(ViewOutcome::Exit) => {
                    outcomes.push(ViewOutcome::Exit);
                    break;
                }
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }

        tracing::debug!(actions = outcomes.len(), "viewer session ended");
        Ok(outcomes)
    }

    fn country_ranking(&mut self) -> Result<Option<ViewOutcome>> {
        let table = Table::country_ranking(&self.engine.rank_countries());
        self.show_and_offer_save(ViewKind::CountryRanking, "Country Ranking", table)
    }

    fn sports_by_country(&mut self) -> Result<Option<ViewOutcome>> {
        let country = match self.prompt_country(
            "Please enter the name of a country to see all sports with medalists:",
        )? {
            Some(country) => country,
            None => return Ok(None),
        };

        let tallies = self.engine.sports_by_country(&country)?;
        let table = Table::sport_tallies(&tallies);
        self.show_and_offer_save(ViewKind::SportsByCountry, &country, table)
    }

    fn athletes_by_sport(&mut self) -> Result<Option<ViewOutcome>> {
        let scope = match self.prompt_menu(
            "Do you want to see all medalists of a sport or just from a specific country?",
            &SCOPE_MENU,
            Scope::parse,
            "Invalid option, please choose 1 or 2.",
        )? {
            Some(scope) => scope,
            None => return Ok(None),
        };

        let country = match scope {
            Scope::All => None,
            Scope::Specific => match self.prompt_country(
                "Please enter the name of a country to see the medalists from that country:",
            )? {
                Some(country) => Some(country),
                None => return Ok(None),
            },
        };

        let sport = match self.prompt_sport()? {
            Some(sport) => sport,
            None => return Ok(None),
        };

        let records = self.engine.athletes_by_sport(&sport, country.as_deref());
        if records.is_empty() {
            if let Some(country) = country {
                self.display.show_warning(&format!(
                    "No medalists found from {} in {}",
                    country, sport
                ));
                return Ok(Some(ViewOutcome::NoMedalists { country, sport }));
            }
        }

        let title = match &country {
            Some(country) => format!("{} medalists from {}", sport, country),
            None => format!("{} medalists", sport),
        };
        let table = Table::medalists(&records);
        self.show_and_offer_save(ViewKind::AthletesBySport, &title, table)
    }

    fn show_and_offer_save(
        &mut self,
        kind: ViewKind,
        title: &str,
        table: Table,
    ) -> Result<Option<ViewOutcome>> {
        self.display.show_table(title, &table);
        let rows = table.len();

        Ok(self.offer_save(&table)?.map(|saved| ViewOutcome::Shown { kind, rows, saved }))
    }

    /// Ask whether to export; `None` when input ran out
    fn offer_save(&mut self, table: &Table) -> Result<Option<Option<PathBuf>>> {
        loop {
            self.display
                .show_choices("Would you like to save this data to a CSV file? (yes/no)", &[]);
            let answer = match self.input.next_token(PROMPT)? {
                Some(answer) => answer,
                None => return Ok(None),
            };

            match SaveAnswer::parse(&answer) {
                Some(SaveAnswer::No) => {
                    self.display.show_info("Data will not be saved.");
                    return Ok(Some(None));
                }
                Some(SaveAnswer::Yes) => return self.save_table(table),
                None => self
                    .display
                    .show_error("Invalid response. Please type 'yes' or 'no'."),
            }
        }
    }

    fn save_table(&mut self, table: &Table) -> Result<Option<Option<PathBuf>>> {
        loop {
            self.display
                .show_choices("Enter the desired file name (without extension):", &[]);
            let name = match self.input.next_token(PROMPT)? {
                Some(name) => name,
                None => return Ok(None),
            };
            if name.is_empty() {
                self.display.show_error("File name must not be empty.");
                continue;
            }

            match export_table(table, &self.export_dir, &name) {
                Ok(path) => {
                    self.display
                        .show_success(&format!("Data saved successfully as {}", path.display()));
                    return Ok(Some(Some(path)));
                }
                Err(err) => {
                    self.display.show_error(&format!("Could not save file: {}", err));
                    return Ok(Some(None));
                }
            }
        }
    }

    fn prompt_menu<T: Copy>(
        &mut self,
        question: &str,
        options: &[(&str, T, &str)],
        parse: fn(&str) -> Option<T>,
        invalid: &str,
    ) -> Result<Option<T>> {
        loop {
            self.display.show_options(question, options);
            let token = match self.input.next_token(PROMPT)? {
                Some(token) => token,
                None => return Ok(None),
            };

            match parse(&token) {
                Some(value) => return Ok(Some(value)),
                None => self.display.show_error(invalid),
            }
        }
    }

    fn prompt_country(&mut self, question: &str) -> Result<Option<String>> {
        let engine = self.engine;
        let names = engine.countries();
        self.prompt_name(
            question,
            &names,
            |c| engine.has_country(c),
            "Invalid country. Please enter the name as it appears in the list.",
        )
    }

    fn prompt_sport(&mut self) -> Result<Option<String>> {
        let engine = self.engine;
        let names = engine.sports();
        self.prompt_name(
            "Please enter the name of a sport to see all medalists athletes:",
            &names,
            |s| engine.has_sport(s),
            "Invalid sport. Please enter the name as it appears in the list.",
        )
    }

    fn prompt_name(
        &mut self,
        question: &str,
        names: &[&str],
        accept: impl Fn(&str) -> bool,
        invalid: &str,
    ) -> Result<Option<String>> {
        loop {
            self.display.show_choices(question, names);
            let name = match self.input.next_token(PROMPT)? {
                Some(name) => name,
                None => return Ok(None),
            };
            if accept(&name) {
                return Ok(Some(name));
            }
            self.display.show_error(invalid);
        }
    }
}
