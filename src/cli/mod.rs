mod commands;
mod handlers;

pub use commands::{Cli, Commands, NoteAction, NoteCommand, TimelineAction, TimelineCommand};
pub use handlers::{
    configured_log_level, handle_export, handle_heart, handle_import, handle_init,
    handle_note_add, handle_note_delete, handle_note_list, handle_photos, handle_render,
    handle_theme, handle_timeline_add, handle_timeline_delete, handle_timeline_list,
};
