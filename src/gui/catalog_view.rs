use egui::{Color32, RichText, ScrollArea};

use super::components::{GameCard, CARD_WIDTH};
use super::styles;
use crate::state::{HubEvent, HubState, NO_RESULTS_MESSAGE};

const CARD_SPACING: f32 = 20.0;

pub struct CatalogView;

impl CatalogView {
    /// Hero text plus the grid of games matching the current query.
    pub fn show(ui: &mut egui::Ui, state: &HubState) -> Option<HubEvent> {
        let mut event = None;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .enable_scrolling(!state.overlay().blocks_background())
            .show(ui, |ui| {
                Self::hero(ui);

                if state.is_loading() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        ui.spinner();
                    });
                    return;
                }

                if let Some(message) = state.error_message() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        let label =
                            ui.label(RichText::new(message).size(16.0).color(styles::ERROR_RED));
                        if let Some(detail) = state.load_error_detail() {
                            label.on_hover_text(detail);
                        }
                    });
                    return;
                }

                if state.show_no_results() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(80.0);
                        ui.label(
                            RichText::new(NO_RESULTS_MESSAGE)
                                .size(18.0)
                                .color(styles::TEXT_MUTED),
                        );
                    });
                    return;
                }

                let visible = state.visible();
                let available_width = ui.available_width();
                let cards_per_row = ((available_width + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING))
                    .floor()
                    .max(1.0) as usize;

                for row in visible.entries().chunks(cards_per_row) {
                    ui.horizontal_top(|ui| {
                        for game in row {
                            if GameCard::show(ui, game) {
                                event = Some(HubEvent::CardClicked(game.id.clone()));
                            }
                            ui.add_space(CARD_SPACING);
                        }
                    });
                    ui.add_space(CARD_SPACING);
                }
            });

        event
    }

    fn hero(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.horizontal(|ui| {
                // Center the two-tone heading by hand, horizontal layouts start left.
                let heading_width = 520.0;
                ui.add_space(((ui.available_width() - heading_width) / 2.0).max(0.0));
                ui.label(
                    RichText::new("Play Anywhere,")
                        .size(40.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.label(
                    RichText::new("Anytime.")
                        .size(40.0)
                        .strong()
                        .color(styles::EMERALD),
                );
            });
            ui.label(
                RichText::new(
                    "A curated collection of web games. No downloads, just pick one and play.",
                )
                .color(styles::TEXT_SECONDARY),
            );
            ui.add_space(36.0);
        });
    }
}
