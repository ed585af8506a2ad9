use chrono::Datelike;
use egui::RichText;

use crate::gui::styles;

pub struct Footer;

impl Footer {
    pub fn show(ui: &mut egui::Ui) {
        let year = chrono::Local::now().year();

        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("🎮 Games Hub")
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                RichText::new(format!(
                    "© {} Games Hub. All games are property of their respective owners.",
                    year
                ))
                .size(12.0)
                .color(styles::TEXT_MUTED),
            );
            ui.add_space(12.0);
        });
    }
}
