// src/page/mod.rs
//! Page rendering
//!
//! Renders the scrapbook as a single self-contained HTML page: header with
//! theme, heart message, notes, gallery, timeline, music and footer. Styling
//! comes only from the current theme's palette.

pub mod html;

use std::path::Path;

use chrono::Utc;

use crate::app::ScrapbookApp;
use crate::config::ScrapbookConfig;
use crate::entity::{Theme, ThemePalette};
use crate::storage::KeyValueStore;
use crate::Result;

use self::html::{escape, format_timestamp, write_page_file};

pub const PAGE_FILE: &str = "index.html";

/// Render the full page for the app's current state
pub fn render_page<S: KeyValueStore>(app: &ScrapbookApp<S>, config: &ScrapbookConfig) -> String {
    let theme = app.theme();
    let palette = theme.palette();

    let mut body = String::new();
    body.push_str(&render_header(&config.title, theme, &palette));
    body.push_str(&render_heart(app.is_message_visible(), &config.heart_message, &palette));
    body.push_str(&render_notes(app, &palette));
    body.push_str(&render_gallery(app, &palette));
    body.push_str(&render_timeline(app, &palette));
    if let Some(src) = &config.music_src {
        body.push_str(&render_music(src, &palette));
    }
    body.push_str(&render_footer(&palette));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <script src=\"https://cdn.tailwindcss.com\"></script>\n</head>\n\
         <body data-theme=\"{theme}\">\n<div class=\"min-h-screen font-sans {page}\">\n{body}</div>\n</body>\n</html>\n",
        title = escape(&config.title),
        theme = theme,
        page = palette.page,
        body = body,
    )
}

/// Render the page and write it to `path`
pub fn write_page<S: KeyValueStore>(
    app: &ScrapbookApp<S>,
    config: &ScrapbookConfig,
    path: &Path,
) -> Result<()> {
    write_page_file(path, &render_page(app, config))
}

fn section(title: &str, palette: &ThemePalette, content: &str) -> String {
    format!(
        "<section class=\"max-w-4xl mx-auto my-8 p-6 rounded-2xl shadow-xl {}\">\n\
         <h2 class=\"text-3xl font-bold mb-4 {}\">{}</h2>\n{}</section>\n",
        palette.section,
        palette.header,
        escape(title),
        content
    )
}

fn render_header(title: &str, current: Theme, palette: &ThemePalette) -> String {
    let options: String = Theme::ALL
        .iter()
        .map(|t| {
            let selected = if *t == current { " selected" } else { "" };
            format!("<option value=\"{}\"{}>{}</option>", t, selected, t.label())
        })
        .collect();

    format!(
        "<header class=\"sticky top-0 z-10 p-4 text-center backdrop-blur-sm {}\">\n\
         <h1 class=\"text-4xl font-bold mb-2\">{}</h1>\n\
         <label class=\"text-sm font-medium\">Theme: <select class=\"ml-2 p-2 rounded-lg border {}\" disabled>{}</select></label>\n\
         </header>\n",
        palette.header,
        escape(title),
        palette.select,
        options
    )
}

fn render_heart(visible: bool, message: &str, palette: &ThemePalette) -> String {
    let mut content = String::from(
        "<div class=\"flex flex-col items-center\">\n<div class=\"text-8xl p-4\">❤️</div>\n",
    );
    if visible {
        content.push_str(&format!(
            "<div class=\"mt-4 p-6 rounded-2xl shadow-lg text-center {}\">\
             <p class=\"text-2xl font-semibold text-pink-600\">{}</p></div>\n",
            palette.section,
            escape(message)
        ));
    }
    content.push_str("</div>\n");
    section("Click My Heart!", palette, &content)
}

fn render_notes<S: KeyValueStore>(app: &ScrapbookApp<S>, palette: &ThemePalette) -> String {
    let mut content = String::from("<div class=\"flex flex-col-reverse gap-3\">\n");
    for (index, note) in app.notes().iter().enumerate() {
        content.push_str(&format!(
            "<div class=\"p-4 rounded-xl shadow-md flex justify-between {}\">\
             <p class=\"flex-grow\">{}</p><span class=\"ml-4 px-3 py-1 rounded-full {}\">#{}</span></div>\n",
            palette.card,
            escape(note),
            palette.button,
            index + 1
        ));
    }
    content.push_str("</div>\n");
    section("💌 Love Notes", palette, &content)
}

fn render_gallery<S: KeyValueStore>(app: &ScrapbookApp<S>, palette: &ThemePalette) -> String {
    let mut content =
        String::from("<div class=\"grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6\">\n");
    for photo in app.photos() {
        content.push_str(&format!(
            "<figure class=\"p-4 rounded-xl shadow-md {}\">\
             <img src=\"{}\" alt=\"{}\" class=\"w-full h-48 object-cover rounded-lg mb-2\">\
             <figcaption class=\"text-center italic\">{}</figcaption></figure>\n",
            palette.card,
            escape(&photo.src),
            escape(&photo.caption),
            escape(&photo.caption)
        ));
    }
    content.push_str("</div>\n");
    section("📸 Memories Gallery", palette, &content)
}

fn render_timeline<S: KeyValueStore>(app: &ScrapbookApp<S>, palette: &ThemePalette) -> String {
    let mut content = String::from("<div class=\"flex flex-col-reverse gap-3\">\n");
    for (index, entry) in app.timeline().iter().enumerate() {
        content.push_str(&format!(
            "<div class=\"p-4 rounded-xl shadow-md {}\">\
             <h3 class=\"font-bold text-lg mb-1\">{} - {}</h3><p>{}</p>\
             <span class=\"mt-2 px-3 py-1 rounded-full {}\">#{}</span></div>\n",
            palette.card,
            escape(&entry.date),
            escape(&entry.title),
            escape(&entry.desc),
            palette.button,
            index + 1
        ));
    }
    content.push_str("</div>\n");
    section("⏳ Our Journey", palette, &content)
}

fn render_music(src: &str, palette: &ThemePalette) -> String {
    let content = format!(
        "<audio controls class=\"w-full mt-4\"><source src=\"{}\" type=\"audio/mpeg\"></audio>\n",
        escape(src)
    );
    section("🎶 Background Music", palette, &content)
}

fn render_footer(palette: &ThemePalette) -> String {
    format!(
        "<footer class=\"text-center p-6 {}\">\n<p class=\"mb-4\">Made with 💖 | Everything saves automatically</p>\n\
         <p class=\"text-xs\">Rendered {}</p>\n</footer>\n",
        palette.page,
        format_timestamp(&Utc::now())
    )
}
