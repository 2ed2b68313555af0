use anyhow::{bail, Result};
use serde_json::json;

use venue_engine::{build_directory, group_by_letter};
use venue_store::{Avatar, ImageMap};
use venue_types::SpeakerProfile;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::output;

pub fn handle_list(
    ctx: &ExecutionContext,
    letter: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.ensure_unlocked(&store)?;

    let program = ctx.load_program()?;
    let images = ctx.image_map()?;

    let directory = build_directory(&program);
    let mut groups = group_by_letter(&directory);

    if let Some(letter) = letter {
        groups.retain(|g| g.letter.eq_ignore_ascii_case(letter));
        if groups.is_empty() {
            bail!("No speakers under '{}'", letter);
        }
    }

    if format == OutputFormat::Json {
        let rows: Vec<_> = groups
            .iter()
            .map(|group| {
                json!({
                    "letter": group.letter,
                    "speakers": group
                        .speakers
                        .iter()
                        .map(|profile| profile_json(profile, &images))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        return output::print_json(&json!({
            "total": directory.len(),
            "groups": rows,
        }));
    }

    let shown: usize = groups.iter().map(|g| g.speakers.len()).sum();
    println!("{}", output::heading(&format!("Speakers ({})", shown)));
    println!();

    for group in &groups {
        println!("{}", output::accent(&group.letter));
        for profile in &group.speakers {
            let mark = match images.avatar(&profile.slug, &profile.display_name) {
                Avatar::Image(_) => "+".to_string(),
                Avatar::Monogram(monogram) => monogram,
            };
            println!(
                "  [{:<2}] {:<36} {}",
                mark,
                profile.display_name,
                output::dim(&session_count_label(profile))
            );
            println!("       {}", output::dim(&profile.slug));
        }
        println!();
    }
    Ok(())
}

pub fn handle_show(ctx: &ExecutionContext, slug: &str, format: OutputFormat) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.ensure_unlocked(&store)?;

    let program = ctx.load_program()?;
    let images = ctx.image_map()?;

    let directory = build_directory(&program);
    let Some(profile) = directory.iter().find(|p| p.slug == slug) else {
        bail!("No speaker '{}' in the directory. Try 'venue speakers list'.", slug);
    };

    if format == OutputFormat::Json {
        return output::print_json(&profile_json(profile, &images));
    }

    println!("{}", output::heading(&profile.display_name));
    match images.avatar(&profile.slug, &profile.display_name) {
        Avatar::Image(path) => println!("{}", output::dim(&format!("photo: {}", path))),
        Avatar::Monogram(monogram) => println!("{}", output::dim(&format!("monogram: {}", monogram))),
    }
    println!("{}", output::dim(&session_count_label(profile)));

    for session in &profile.sessions {
        println!();
        println!("  {}", output::heading(&session.title));
        println!("  {}", output::dim(&format!("{} • {}", session.day_title, session.date)));
        if let Some(theme) = &session.theme {
            println!("  {}", output::dim(theme));
        }
        println!("  {} — {}", session.time, session.location);
    }
    Ok(())
}

fn session_count_label(profile: &SpeakerProfile) -> String {
    match profile.sessions.len() {
        1 => "1 session".to_string(),
        n => format!("{} sessions", n),
    }
}

fn profile_json(profile: &SpeakerProfile, images: &ImageMap) -> serde_json::Value {
    let avatar = match images.avatar(&profile.slug, &profile.display_name) {
        Avatar::Image(path) => json!({ "type": "image", "value": path }),
        Avatar::Monogram(monogram) => json!({ "type": "monogram", "value": monogram }),
    };

    json!({
        "slug": profile.slug,
        "display_name": profile.display_name,
        "avatar": avatar,
        "sessions": profile.sessions,
    })
}
