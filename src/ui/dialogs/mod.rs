//! Dateidialoge und modale Hinweisfenster.

mod file_dialogs;
mod notice;

pub use file_dialogs::handle_file_dialogs;
pub use notice::show_notice;
