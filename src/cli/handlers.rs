use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::{ImportOutcome, ScrapbookApp};
use crate::config::ScrapbookConfig;
use crate::entity::Theme;
use crate::error::{Result, ScrapbookError};
use crate::page::{write_page, PAGE_FILE};
use crate::storage::{SqliteStore, SCRAPBOOK_DIR};

/// Find the project root by looking for .scrapbook/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(SCRAPBOOK_DIR).exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

struct Session {
    root: PathBuf,
    app: ScrapbookApp<SqliteStore>,
    config: ScrapbookConfig,
}

fn open_session() -> Result<Session> {
    let root = find_project_root();
    let store = SqliteStore::open(&root)?;
    let config = ScrapbookConfig::load(store.scrapbook_dir())?;
    let app = ScrapbookApp::load(store)?;
    Ok(Session { root, app, config })
}

/// Log level from the project config, if one can be read.
///
/// Used before logging is up, so any problem here just yields the default;
/// the command itself reports config errors.
pub fn configured_log_level() -> String {
    let dir = find_project_root().join(SCRAPBOOK_DIR);
    ScrapbookConfig::load(&dir)
        .unwrap_or_default()
        .log_level
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let store = SqliteStore::init(&root)?;
    // Seed every key so the store mirrors the defaults from the first run.
    let mut app = ScrapbookApp::load(store)?;
    let defaults = app.export_data()?;
    app.import_data(&defaults)?;

    println!("Initialized scrapbook in {}", root.display());
    Ok(())
}

pub fn handle_note_add(text: String) -> Result<()> {
    let mut session = open_session()?;

    if session.app.add_note(&text)? {
        println!("Added note 1 - {}", session.app.notes()[0]);
    } else {
        println!("Nothing to add: note is empty.");
    }
    Ok(())
}

pub fn handle_note_list(json: bool) -> Result<()> {
    let session = open_session()?;
    let notes = session.app.notes();

    if json {
        println!("{}", serde_json::to_string_pretty(notes)?);
    } else if notes.is_empty() {
        println!("No notes yet.");
    } else {
        println!("Notes:\n");
        for (i, note) in notes.iter().enumerate() {
            println!("  {:>3}  {}", i + 1, note);
        }
    }
    Ok(())
}

pub fn handle_note_delete(position: usize) -> Result<()> {
    let mut session = open_session()?;
    let index = position - 1;
    let Some(note) = session.app.notes().get(index).cloned() else {
        println!("No note at position {}.", position);
        return Ok(());
    };

    session.app.delete_note(index)?;
    println!("Deleted note {} - {}", position, note);
    Ok(())
}

pub fn handle_timeline_add(date: String, title: String, desc: String) -> Result<()> {
    let mut session = open_session()?;

    if session.app.add_entry(&date, &title, &desc)? {
        println!("Added milestone {} - {}", date, title);
    } else {
        println!("Nothing to add: both --date and --title are required.");
    }
    Ok(())
}

pub fn handle_timeline_list(json: bool) -> Result<()> {
    let session = open_session()?;
    let timeline = session.app.timeline();

    if json {
        println!("{}", serde_json::to_string_pretty(timeline)?);
    } else if timeline.is_empty() {
        println!("No milestones yet.");
    } else {
        println!("Timeline:\n");
        for (i, entry) in timeline.iter().enumerate() {
            println!("  {:>3}  {} - {}", i + 1, entry.date, entry.title);
            if !entry.desc.is_empty() {
                println!("       {}", entry.desc);
            }
        }
    }
    Ok(())
}

pub fn handle_timeline_delete(position: usize) -> Result<()> {
    let mut session = open_session()?;
    let index = position - 1;
    let Some(entry) = session.app.timeline().get(index).cloned() else {
        println!("No milestone at position {}.", position);
        return Ok(());
    };

    session.app.delete_entry(index)?;
    println!("Deleted milestone {} - {} - {}", position, entry.date, entry.title);
    Ok(())
}

pub fn handle_photos(json: bool) -> Result<()> {
    let session = open_session()?;
    let photos = session.app.photos();

    if json {
        println!("{}", serde_json::to_string_pretty(photos)?);
    } else if photos.is_empty() {
        println!("No photos.");
    } else {
        println!("Gallery:\n");
        for (i, photo) in photos.iter().enumerate() {
            println!("  {:>3}  {}  ({})", i + 1, photo.caption, photo.src);
        }
    }
    Ok(())
}

pub fn handle_theme(name: Option<String>) -> Result<()> {
    let mut session = open_session()?;

    match name {
        None => println!("{}", session.app.theme()),
        Some(name) => {
            let theme: Theme = name
                .parse()
                .map_err(|_| ScrapbookError::InvalidTheme(name.clone()))?;
            session.app.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
    }
    Ok(())
}

pub fn handle_heart() -> Result<()> {
    let mut session = open_session()?;

    println!("❤️");
    if session.app.toggle_message() {
        println!("{}", session.config.heart_message);
    }
    Ok(())
}

pub fn handle_export(output: Option<PathBuf>) -> Result<()> {
    let session = open_session()?;
    let data = session.app.export_data()?;

    let path = output.unwrap_or_else(|| session.root.join(&session.config.export_file));
    if path == Path::new("-") {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data.as_bytes())?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    fs::write(&path, data)?;
    info!(path = %path.display(), "exported scrapbook");
    println!("Exported to {}", path.display());
    Ok(())
}

pub fn handle_import(path: Option<PathBuf>) -> Result<()> {
    let bytes = match path {
        Some(path) => fs::read(path)?,
        None => {
            if atty::is(atty::Stream::Stdin) {
                return Err(ScrapbookError::InvalidInput(
                    "No file given. Pass a path or pipe the export into stdin.".to_string(),
                ));
            }
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            bytes
        }
    };
    // Undecodable bytes become U+FFFD and fail as JSON, not as I/O.
    let contents = String::from_utf8_lossy(&bytes);

    let mut session = open_session()?;
    match session.app.import_data(&contents)? {
        ImportOutcome::Rejected { .. } => {
            println!("Nothing imported: the file is not valid scrapbook data.");
        }
        ImportOutcome::Applied(applied) if applied.is_empty() => {
            println!("Nothing imported: the file has no scrapbook fields.");
        }
        ImportOutcome::Applied(applied) => {
            println!("Imported {}", applied.names().join(", "));
        }
    }
    Ok(())
}

pub fn handle_render(output: Option<PathBuf>, show_message: bool) -> Result<()> {
    let mut session = open_session()?;

    if show_message {
        session.app.toggle_message();
    }

    let path = output.unwrap_or_else(|| session.root.join(SCRAPBOOK_DIR).join(PAGE_FILE));
    write_page(&session.app, &session.config, &path)?;
    println!("Rendered {}", path.display());
    Ok(())
}
