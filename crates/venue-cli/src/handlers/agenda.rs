use anyhow::{bail, Result};
use serde_json::json;

use venue_engine::{filtered_agenda, split_time_display, SessionFilter};
use venue_store::load_favorites;
use venue_types::{FavoriteSet, Session};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::output;

pub fn handle(
    ctx: &ExecutionContext,
    day_key: &str,
    query: Option<String>,
    theme: Option<String>,
    favorites_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.ensure_unlocked(&store)?;

    let program = ctx.load_program()?;
    let Some(day) = program.day(day_key) else {
        let known: Vec<&str> = program.day_keys().collect();
        bail!("Unknown day '{}'. Known days: {}", day_key, known.join(", "));
    };

    let favorites = load_favorites(&store);

    let mut filter = SessionFilter::new().favorites_only(favorites_only);
    if let Some(query) = &query {
        filter = filter.query(query.clone());
    }
    if let Some(theme) = &theme {
        filter = filter.theme(theme.clone());
    }

    let groups = filtered_agenda(&day.sessions, &filter, &favorites);
    let total: usize = groups.iter().map(|g| g.sessions.len()).sum();

    if format == OutputFormat::Json {
        return output::print_json(&json!({
            "day": { "key": day.key, "title": day.title, "date": day.date },
            "filters": {
                "query": query,
                "theme": theme,
                "favorites_only": favorites_only,
            },
            "total": total,
            "groups": groups,
        }));
    }

    println!("{}", output::heading(&format!("{} — {}", day.title, day.date)));
    println!();

    if groups.is_empty() {
        println!("No sessions match the current filters.");
        if !filter.is_passthrough() {
            println!(
                "{}",
                output::dim("Drop --query/--theme/--favorites to see the full agenda.")
            );
        }
        return Ok(());
    }

    for group in &groups {
        println!("{}", output::accent(&group.theme));
        for session in &group.sessions {
            print_session(session, &favorites);
        }
        println!();
    }

    println!("{}", output::dim(&format!("{} sessions shown", total)));
    Ok(())
}

fn print_session(session: &Session, favorites: &FavoriteSet) {
    let (start, end) = split_time_display(session.id());
    let when = match end {
        Some(end) => format!("{}-{}", start, end),
        None => start,
    };

    println!(
        "  {} {:<13} {}",
        output::star(favorites.contains(session.id())),
        when,
        output::heading(&session.title)
    );
    println!("                  {}", output::dim(&session.location));

    print_names("Speakers", &session.speakers);
    print_names("Moderators", &session.moderators);
    print_names("Panelists", &session.panelists);
    print_names("Chairs", &session.chairs);

    if let Some(description) = &session.description {
        println!("                  {}", description);
    }
}

fn print_names(label: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    println!("                  {}: {}", label, names.join(", "));
}
