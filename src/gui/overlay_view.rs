use egui::{Color32, Id, Order, RichText, Rounding, Sense, Stroke, Vec2};

use super::styles;
use crate::catalog::GameEntry;
use crate::overlay::{EmbeddedFrame, Overlay, OverlayLayout};
use crate::state::HubEvent;

const MODAL_MARGIN: Vec2 = Vec2::new(24.0, 16.0);

pub struct OverlayView;

impl OverlayView {
    /// Draws the backdrop and the game modal when a game is selected.
    pub fn show(ctx: &egui::Context, overlay: &Overlay) -> Option<HubEvent> {
        let game = overlay.selected()?;
        let screen = ctx.screen_rect();
        let mut event = None;

        egui::Area::new(Id::new("overlay_backdrop"))
            .order(Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen, Sense::click());
                ui.painter().rect_filled(screen, 0.0, styles::BACKDROP);
                if response.clicked() {
                    event = Some(HubEvent::BackdropClicked);
                }
            });

        let layout = overlay.layout();
        let modal = layout.modal_rect(screen);

        egui::Area::new(Id::new("overlay_modal"))
            .order(Order::Foreground)
            .fixed_pos(modal.min)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(styles::SLATE_900)
                    .stroke(Stroke::new(1.0, styles::SLATE_800))
                    .rounding(Rounding::same(24.0))
                    .inner_margin(egui::Margin::symmetric(MODAL_MARGIN.x, MODAL_MARGIN.y))
                    .show(ui, |ui| {
                        let inner_size = (modal.size() - 2.0 * MODAL_MARGIN).max(Vec2::ZERO);
                        ui.set_min_size(inner_size);
                        ui.set_max_size(inner_size);

                        if let Some(header_event) = Self::header(ui, game, layout) {
                            event = Some(header_event);
                        }
                        ui.separator();
                        if let Some(frame_event) = Self::frame(ui, game, overlay.frame()) {
                            event = Some(frame_event);
                        }
                    });
            });

        event
    }

    fn header(ui: &mut egui::Ui, game: &GameEntry, layout: OverlayLayout) -> Option<HubEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&game.title)
                    .size(20.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            if ui
                .small_button(RichText::new("↗").color(styles::TEXT_MUTED))
                .on_hover_text("Open in browser")
                .clicked()
            {
                event = Some(HubEvent::ExternalLinkClicked);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(RichText::new("✕").size(18.0)).clicked() {
                    event = Some(HubEvent::CloseClicked);
                }

                let (icon, hint) = match layout {
                    OverlayLayout::Windowed => ("⛶", "Fullscreen"),
                    OverlayLayout::Fullscreen => ("🗗", "Exit Fullscreen"),
                };
                if ui
                    .button(RichText::new(icon).size(16.0))
                    .on_hover_text(hint)
                    .clicked()
                {
                    event = Some(HubEvent::FullscreenToggled);
                }
            });
        });

        event
    }

    /// The embedded content area. Web content is handed to the system
    /// browser, the frame itself shows what is loaded.
    fn frame(ui: &mut egui::Ui, game: &GameEntry, frame: &EmbeddedFrame) -> Option<HubEvent> {
        let src = frame.src()?;
        let mut event = None;

        egui::Frame::none()
            .fill(Color32::BLACK)
            .rounding(Rounding::same(12.0))
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                ui.vertical_centered(|ui| {
                    let preview_width = (ui.available_width() * 0.6).clamp(160.0, 640.0);
                    ui.add_space(24.0);
                    ui.add(
                        egui::Image::new(game.thumbnail.as_str())
                            .fit_to_exact_size(Vec2::new(preview_width, preview_width * 9.0 / 16.0))
                            .rounding(Rounding::same(12.0))
                            .show_loading_spinner(true),
                    );
                    ui.add_space(16.0);

                    let play = egui::Button::new(
                        RichText::new("▶ Play")
                            .size(16.0)
                            .strong()
                            .color(styles::SLATE_950),
                    )
                    .fill(styles::EMERALD)
                    .min_size(Vec2::new(160.0, 40.0));
                    if ui.add(play).clicked() {
                        event = Some(HubEvent::PlayClicked);
                    }

                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(src)
                            .monospace()
                            .size(12.0)
                            .color(styles::EMERALD_LIGHT),
                    );

                    if frame.handed_off() {
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(
                                "Playing in your browser. Closing this window does not stop it there.",
                            )
                            .size(12.0)
                            .color(styles::TEXT_MUTED),
                        );
                    }
                });
            });

        event
    }
}
