use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    // Slate background with an emerald accent
    style.visuals.window_fill = SLATE_900;
    style.visuals.panel_fill = SLATE_900;
    style.visuals.faint_bg_color = SLATE_800;
    style.visuals.extreme_bg_color = SLATE_950;

    style.visuals.override_text_color = Some(Color32::from_rgb(226, 232, 240));

    style.visuals.widgets.inactive.bg_fill = SLATE_800;
    style.visuals.widgets.inactive.weak_bg_fill = SLATE_800;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.inactive.rounding = Rounding::same(8.0);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(51, 65, 85);
    style.visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(51, 65, 85);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.hovered.rounding = Rounding::same(8.0);

    style.visuals.widgets.active.bg_fill = EMERALD;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, SLATE_950);
    style.visuals.widgets.active.rounding = Rounding::same(8.0);

    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(16, 185, 129, 77);
    style.visuals.selection.stroke = Stroke::new(1.5, EMERALD);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    ctx.set_style(style);
}

pub const SLATE_950: Color32 = Color32::from_rgb(2, 6, 23);
pub const SLATE_900: Color32 = Color32::from_rgb(15, 23, 42);
pub const SLATE_800: Color32 = Color32::from_rgb(30, 41, 59);
pub const EMERALD: Color32 = Color32::from_rgb(16, 185, 129);
pub const EMERALD_LIGHT: Color32 = Color32::from_rgb(52, 211, 153);
pub const ERROR_RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 116, 139);
pub const BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 230);
