use clap::Parser;
use scrapbook::cli::{
    configured_log_level, handle_export, handle_heart, handle_import, handle_init,
    handle_note_add, handle_note_delete, handle_note_list, handle_photos, handle_render,
    handle_theme, handle_timeline_add, handle_timeline_delete, handle_timeline_list, Cli, Commands,
    NoteAction, TimelineAction,
};
use scrapbook::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    init_logging(&configured_log_level());

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Note(note) => match note.action {
            NoteAction::Add { text } => handle_note_add(text),
            NoteAction::List { json } => handle_note_list(json),
            NoteAction::Delete { index } => handle_note_delete(index.get()),
        },
        Commands::Timeline(timeline) => match timeline.action {
            TimelineAction::Add { date, title, desc } => handle_timeline_add(date, title, desc),
            TimelineAction::List { json } => handle_timeline_list(json),
            TimelineAction::Delete { index } => handle_timeline_delete(index.get()),
        },
        Commands::Photos { json } => handle_photos(json),
        Commands::Theme { name } => handle_theme(name),
        Commands::Heart => handle_heart(),
        Commands::Export { output } => handle_export(output),
        Commands::Import { path } => handle_import(path),
        Commands::Render {
            output,
            show_message,
        } => handle_render(output, show_message),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
