use anyhow::Result;

use super::args::{Cli, Commands, FavCommand, SpeakersCommand};
use super::context::ExecutionContext;
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&ctx);
        return Ok(());
    };

    match command {
        Commands::Init {
            program,
            images,
            access_code,
            force,
        } => handlers::init::handle(&ctx, &program, images.as_deref(), access_code, force),

        Commands::Days => handlers::days::handle(&ctx, cli.format),

        Commands::Agenda {
            day,
            query,
            theme,
            favorites,
        } => handlers::agenda::handle(&ctx, &day, query, theme, favorites, cli.format),

        Commands::Speakers { command } => match command {
            SpeakersCommand::List { letter } => {
                handlers::speakers::handle_list(&ctx, letter.as_deref(), cli.format)
            }
            SpeakersCommand::Show { slug } => {
                handlers::speakers::handle_show(&ctx, &slug, cli.format)
            }
        },

        Commands::Fav { command } => match command {
            FavCommand::Toggle { id } => handlers::fav::handle_toggle(&ctx, &id, cli.format),
            FavCommand::List => handlers::fav::handle_list(&ctx, cli.format),
            FavCommand::Clear => handlers::fav::handle_clear(&ctx, cli.format),
        },

        Commands::Unlock { code } => handlers::gate::handle_unlock(&ctx, &code),
        Commands::Lock => handlers::gate::handle_lock(&ctx),

        Commands::Export {
            target,
            export_format,
            out,
        } => handlers::export::handle(&ctx, target, export_format, out.as_deref()),
    }
}

fn show_guidance(ctx: &ExecutionContext) {
    println!("venue - conference program companion\n");

    if !ctx.program_path().exists() {
        println!("Get started:");
        println!("  venue init --program <program.json>\n");
        println!("Then enter the event access code:");
        println!("  venue unlock <code>\n");
    } else {
        println!("Quick commands:");
        println!("  venue days                        # List conference days");
        println!("  venue agenda --day <key>          # A day's agenda by theme");
        println!("  venue speakers list               # Speaker directory");
        println!("  venue fav toggle <id>             # Star a session\n");
    }

    println!("For more commands:");
    println!("  venue --help");
}
