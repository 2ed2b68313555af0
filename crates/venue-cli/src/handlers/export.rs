use anyhow::{Context as _, Result};
use serde::Serialize;
use std::io::Write as _;
use std::path::Path;

use venue_engine::build_directory;
use venue_types::Program;

use crate::args::{ExportFormat, ExportTarget};
use crate::context::ExecutionContext;

#[derive(Debug, Serialize)]
struct AgendaRow {
    day: String,
    date: String,
    theme: String,
    time: String,
    block: Option<String>,
    title: String,
    location: String,
    speakers: String,
}

#[derive(Debug, Serialize)]
struct SpeakerRow {
    slug: String,
    name: String,
    sessions: usize,
}

pub fn handle(
    ctx: &ExecutionContext,
    target: ExportTarget,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.ensure_unlocked(&store)?;

    let program = ctx.load_program()?;

    let rendered = match target {
        ExportTarget::Agenda => render(&agenda_rows(&program), format)?,
        ExportTarget::Speakers => render(&speaker_rows(&program), format)?,
    };

    match out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            std::io::stdout().write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}

fn agenda_rows(program: &Program) -> Vec<AgendaRow> {
    let mut rows = Vec::new();
    for day in program.days() {
        for session in &day.sessions {
            rows.push(AgendaRow {
                day: day.key.clone(),
                date: day.date.clone(),
                theme: session.theme_or_default().to_string(),
                time: session.time.clone(),
                block: session.block.clone(),
                title: session.title.clone(),
                location: session.location.clone(),
                speakers: session.speakers.join(" / "),
            });
        }
    }
    rows
}

fn speaker_rows(program: &Program) -> Vec<SpeakerRow> {
    build_directory(program)
        .into_iter()
        .map(|profile| SpeakerRow {
            slug: profile.slug,
            name: profile.display_name,
            sessions: profile.sessions.len(),
        })
        .collect()
}

fn render<T: Serialize>(rows: &[T], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let mut rendered = serde_json::to_string_pretty(rows)?;
            rendered.push('\n');
            Ok(rendered)
        }
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in rows {
                writer.serialize(row)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}
