use egui::text::LayoutJob;
use egui::{Color32, FontId, RichText, Rounding, Sense, Stroke, TextFormat, Vec2};

use crate::catalog::GameEntry;
use crate::gui::styles;

pub const CARD_WIDTH: f32 = 280.0;
const THUMBNAIL_HEIGHT: f32 = CARD_WIDTH * 9.0 / 16.0;
const CARD_PADDING: f32 = 14.0;

pub struct GameCard;

impl GameCard {
    /// Draws one catalog card. Returns true when the card was clicked.
    pub fn show(ui: &mut egui::Ui, game: &GameEntry) -> bool {
        let frame = egui::Frame::none()
            .fill(styles::SLATE_900)
            .stroke(Stroke::new(1.0, styles::SLATE_800))
            .rounding(Rounding::same(16.0))
            .inner_margin(egui::Margin::same(0.0));

        let inner = frame.show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            ui.vertical(|ui| {
                let thumbnail_rounding = Rounding {
                    nw: 16.0,
                    ne: 16.0,
                    sw: 0.0,
                    se: 0.0,
                };
                ui.add(
                    egui::Image::new(game.thumbnail.as_str())
                        .fit_to_exact_size(Vec2::new(CARD_WIDTH, THUMBNAIL_HEIGHT))
                        .rounding(thumbnail_rounding)
                        .show_loading_spinner(true),
                );

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.add_space(CARD_PADDING);
                    ui.vertical(|ui| {
                        ui.set_width(CARD_WIDTH - 2.0 * CARD_PADDING);
                        ui.label(
                            RichText::new(&game.title)
                                .size(17.0)
                                .strong()
                                .color(Color32::WHITE),
                        );

                        let mut description = LayoutJob::single_section(
                            game.description.clone(),
                            TextFormat {
                                font_id: FontId::proportional(13.0),
                                color: styles::TEXT_SECONDARY,
                                ..Default::default()
                            },
                        );
                        description.wrap.max_width = CARD_WIDTH - 2.0 * CARD_PADDING;
                        description.wrap.max_rows = 2;
                        ui.label(description);
                    });
                });
                ui.add_space(CARD_PADDING);
            });
        });

        let response = inner
            .response
            .interact(Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.hovered() {
            ui.painter().rect_stroke(
                response.rect,
                Rounding::same(16.0),
                Stroke::new(1.5, styles::EMERALD),
            );
        }

        response.clicked()
    }
}
