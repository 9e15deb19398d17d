use crate::app::{AppIntent, Notice, NoticeKind};

/// Zeigt ein Hinweisfenster (Warnung oder Bestätigung) als `egui::Modal`.
///
/// Der Hintergrund nimmt währenddessen keine Eingaben an. OK, Escape oder ein
/// Klick neben das Fenster schließen den Hinweis.
pub fn show_notice(ctx: &egui::Context, notice: Option<&Notice>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(notice) = notice else {
        return events;
    };

    let icon = match notice.kind {
        NoticeKind::Warning => "⚠",
        NoticeKind::Info => "ℹ",
    };

    let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_min_width(240.0);
        ui.heading(notice.title.as_str());
        ui.separator();
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(format!("{} {}", icon, notice.message));
            ui.add_space(10.0);
            ui.button("OK").clicked()
        })
        .inner
    });

    if modal.inner || modal.should_close() {
        events.push(AppIntent::NoticeDismissed);
    }

    events
}
