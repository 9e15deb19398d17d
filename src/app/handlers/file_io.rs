//! Handler für den C-Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Export-Dialog (oder warnt bei leerem Raster).
pub fn request_export(state: &mut AppState) {
    use_cases::export::request_export(state);
}

/// Exportiert das Raster nach `path`.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::export_to_file(state, path)
}
