//! Display manager for the viewer terminal UI
//!
//! Renders menus, name lists and result tables with color-coded output.

use colored::*;
use crossterm::terminal;

use crate::table::Table;

/// Fallback width when the terminal size is unknown (pipes, tests)
const DEFAULT_WIDTH: usize = 80;

/// Display manager for viewer output
pub struct DisplayManager {
    width: usize,
}

impl DisplayManager {
    /// Create display manager sized to the current terminal
    pub fn new() -> Self {
        let width = terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(DEFAULT_WIDTH);
        DisplayManager { width }
    }

    pub fn with_width(width: usize) -> Self {
        DisplayManager { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, rows: usize) {
        let width = self.width.min(64);
        println!("\n{}", "=".repeat(width).cyan());
        println!(
            "{}",
            format!("  Welcome to the 2024 Olympics Medals Viewer (v{})", version)
                .bold()
                .cyan()
        );
        println!("{}", format!("  {} medal rows loaded", rows).dimmed());
        println!("{}\n", "=".repeat(width).cyan());
    }

    /// Show a numbered option list under a question
    pub fn show_options<T>(&self, question: &str, options: &[(&str, T, &str)]) {
        println!("{}", question.bold());
        for (token, _, text) in options {
            println!("  {}- {}", token.green(), text);
        }
    }

    /// Show a question followed by the accepted names
    pub fn show_choices(&self, question: &str, names: &[&str]) {
        println!("{}", question.bold());
        println!("{}", names.join(", ").dimmed());
    }

    /// Print a result table with a highlighted header
    pub fn show_table(&self, title: &str, table: &Table) {
        let lines = table.render_lines();
        let rule = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(self.width);

        self.show_section(title, rule);
        let mut iter = lines.into_iter();
        if let Some(header) = iter.next() {
            println!("{}", header.bold());
        }
        for line in iter {
            println!("{}", line);
        }
        println!();
    }

    /// Show section header
    pub fn show_section(&self, title: &str, rule: usize) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(rule.max(title.chars().count())).cyan());
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Display success message
    pub fn show_success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
