use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Color only when stdout is an interactive terminal.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

pub fn heading(text: &str) -> String {
    if use_color() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn accent(text: &str) -> String {
    if use_color() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if use_color() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn star(active: bool) -> String {
    let mark = if active { "*" } else { " " };
    if active && use_color() {
        mark.yellow().to_string()
    } else {
        mark.to_string()
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
