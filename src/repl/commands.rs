//! Menu tokens for the viewer
//!
//! Every prompt accepts a fixed set of literal tokens. Anything else is
//! rejected and the prompt repeats.

/// Top-level menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CountryRanking,
    SportsByCountry,
    AthletesBySport,
    Exit,
}

/// Dispatch table: token, choice, menu text
pub const MAIN_MENU: [(&str, MenuChoice, &str); 4] = [
    ("1", MenuChoice::CountryRanking, "Country Ranking"),
    ("2", MenuChoice::SportsByCountry, "All sports from one country"),
    ("3", MenuChoice::AthletesBySport, "All athletes from one sport"),
    ("4", MenuChoice::Exit, "Exit"),
];

/// Which medalists the athletes view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Specific,
}

pub const SCOPE_MENU: [(&str, Scope, &str); 2] = [
    ("1", Scope::All, "All"),
    ("2", Scope::Specific, "Specific"),
];

/// Answer to the save prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAnswer {
    Yes,
    No,
}

impl MenuChoice {
    pub fn parse(token: &str) -> Option<MenuChoice> {
        lookup(&MAIN_MENU, token)
    }
}

impl Scope {
    pub fn parse(token: &str) -> Option<Scope> {
        lookup(&SCOPE_MENU, token)
    }
}

impl SaveAnswer {
    /// `yes` / `no`, case-insensitive
    pub fn parse(token: &str) -> Option<SaveAnswer> {
        match token.trim().to_lowercase().as_str() {
            "yes" => Some(SaveAnswer::Yes),
            "no" => Some(SaveAnswer::No),
            _ => None,
        }
    }
}

fn lookup<T: Copy>(table: &[(&str, T, &str)], token: &str) -> Option<T> {
    let token = token.trim();
    table
        .iter()
        .find(|(key, _, _)| *key == token)
        .map(|(_, value, _)| *value)
}
