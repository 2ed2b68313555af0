use anyhow::Result;
use serde_json::json;

use venue_store::day_date;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::output;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.ensure_unlocked(&store)?;

    let program = ctx.load_program()?;

    // Chronological when the display dates parse; days with odd date
    // strings keep their program order at the end.
    let mut days: Vec<_> = program.days().iter().enumerate().collect();
    days.sort_by_key(|(at, day)| (day_date(day).is_none(), day_date(day), *at));

    if format == OutputFormat::Json {
        let rows: Vec<_> = days
            .iter()
            .map(|(_, day)| {
                json!({
                    "key": day.key,
                    "title": day.title,
                    "date": day.date,
                    "sessions": day.sessions.len(),
                })
            })
            .collect();
        return output::print_json(&rows);
    }

    if days.is_empty() {
        println!("The installed program has no days.");
        return Ok(());
    }

    println!("{:<18} {:<14} {:<9} TITLE", "KEY", "DATE", "SESSIONS");
    println!("{}", "-".repeat(60));
    for (_, day) in days {
        println!(
            "{:<18} {:<14} {:<9} {}",
            day.key,
            day.date,
            day.sessions.len(),
            day.title
        );
    }
    Ok(())
}
