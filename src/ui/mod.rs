//! UI-Komponenten: Menü, Status-Bar, Canvas, Input-Handling, Dialoge.

pub mod canvas;
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod status;

pub use canvas::paint_canvas;
pub use dialogs::{handle_file_dialogs, show_notice};
pub use input::InputState;
pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use status::render_status_bar;
