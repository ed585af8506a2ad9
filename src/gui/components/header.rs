use egui::RichText;

use crate::gui::styles;

pub struct Header;

impl Header {
    /// Logo on the left, search box on the right. Returns true when the
    /// search text was edited this frame.
    pub fn show(ui: &mut egui::Ui, search_query: &mut String) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label(RichText::new("🎮").size(22.0).color(styles::EMERALD));
            ui.label(
                RichText::new("Games")
                    .size(20.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(RichText::new("Hub").size(20.0).strong().color(styles::EMERALD));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let search_edit = egui::TextEdit::singleline(search_query)
                    .hint_text("Search games...")
                    .desired_width(320.0_f32.min(ui.available_width() - 30.0).max(80.0));
                changed = ui.add(search_edit).changed();
                ui.label(RichText::new("🔍").size(16.0).color(styles::TEXT_MUTED));
            });
        });

        changed
    }
}
