use anyhow::Result;
use serde_json::json;

use venue_engine::toggle_favorite;
use venue_store::{load_favorites, save_favorites};
use venue_types::{FavoriteSet, Program};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::output;

pub fn handle_toggle(ctx: &ExecutionContext, id: &str, format: OutputFormat) -> Result<()> {
    let mut store = ctx.open_store()?;
    ctx.ensure_unlocked(&store)?;

    let favorites = load_favorites(&store);
    let next = toggle_favorite(&favorites, id);
    let starred = next.contains(id);
    save_favorites(&mut store, &next)?;

    if format == OutputFormat::Json {
        return output::print_json(&json!({
            "id": id,
            "starred": starred,
            "total": next.len(),
        }));
    }

    if starred {
        println!("Starred {}", id);
    } else {
        println!("Unstarred {}", id);
    }

    // A star for an identifier that is not on the program still persists
    // (the program may be reinstalled), but it is worth a heads-up.
    if starred && !program_has_id(ctx, id) {
        println!(
            "{}",
            output::dim("note: no session on the installed program has this identifier")
        );
    }
    Ok(())
}

pub fn handle_list(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.ensure_unlocked(&store)?;

    let favorites = load_favorites(&store);
    let program = ctx.load_program()?;

    let mut resolved = Vec::new();
    for day in program.days() {
        for session in &day.sessions {
            if favorites.contains(session.id()) {
                resolved.push((day, session));
            }
        }
    }

    let matched: std::collections::HashSet<&str> =
        resolved.iter().map(|(_, s)| s.id()).collect();
    let orphaned: Vec<&str> = favorites.iter().filter(|id| !matched.contains(id)).collect();

    if format == OutputFormat::Json {
        let sessions: Vec<_> = resolved
            .iter()
            .map(|(day, session)| {
                json!({
                    "id": session.id(),
                    "day_key": day.key,
                    "time": session.time,
                    "title": session.title,
                    "location": session.location,
                })
            })
            .collect();
        return output::print_json(&json!({
            "total": favorites.len(),
            "sessions": sessions,
            "orphaned": orphaned,
        }));
    }

    if favorites.is_empty() {
        println!("No starred sessions yet. Star one with 'venue fav toggle <id>'.");
        return Ok(());
    }

    println!("{}", output::heading(&format!("Starred sessions ({})", favorites.len())));
    for (day, session) in &resolved {
        println!(
            "  {} {:<13} {}  {}",
            output::star(true),
            session.id(),
            session.title,
            output::dim(&day.title)
        );
    }
    for id in &orphaned {
        println!(
            "  {} {:<13} {}",
            output::star(true),
            id,
            output::dim("(no longer on the program)")
        );
    }
    Ok(())
}

pub fn handle_clear(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let mut store = ctx.open_store()?;
    ctx.ensure_unlocked(&store)?;

    let removed = load_favorites(&store).len();
    save_favorites(&mut store, &FavoriteSet::new())?;

    if format == OutputFormat::Json {
        return output::print_json(&json!({ "removed": removed }));
    }

    println!("Cleared {} starred sessions", removed);
    Ok(())
}

fn program_has_id(ctx: &ExecutionContext, id: &str) -> bool {
    let Ok(program) = ctx.load_program() else {
        return true;
    };
    program_contains(&program, id)
}

fn program_contains(program: &Program, id: &str) -> bool {
    program
        .days()
        .iter()
        .flat_map(|day| day.sessions.iter())
        .any(|session| session.id() == id)
}
