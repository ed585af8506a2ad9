use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

use crate::catalog::{Catalog, CatalogClient, CatalogSource};
use crate::config::Config;
use crate::state::{HubEffect, HubEvent, HubState};
use crate::Result;

use super::catalog_view::CatalogView;
use super::components::{Footer, Header};
use super::overlay_view::OverlayView;
use super::styles;

pub struct HubApp {
    state: HubState,
    catalog_promise: Option<Promise<Result<Catalog>>>,
}

impl HubApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        styles::setup_custom_style(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let source = CatalogSource::parse(&config.catalog);
        let timeout = Duration::from_secs(config.request_timeout_secs);

        let promise = Promise::spawn_async(async move {
            let client = CatalogClient::new(timeout)?;
            client.fetch(&source).await
        });

        Self {
            state: HubState::new(),
            catalog_promise: Some(promise),
        }
    }

    fn poll_catalog(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.catalog_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(result) => {
                self.state.handle(HubEvent::CatalogLoaded(result));
                ctx.request_repaint();
            }
            Err(pending) => {
                self.catalog_promise = Some(pending);
                ctx.request_repaint_after(Duration::from_millis(100));
            }
        }
    }
}

impl eframe::App for HubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_catalog(ctx);

        let mut events = Vec::new();

        if self.state.overlay().is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(HubEvent::EscapePressed);
        }

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(styles::SLATE_900)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                // Edit buffer only, the query itself lives in the view-model
                let mut query = self.state.query().to_string();
                if Header::show(ui, &mut query) {
                    events.push(HubEvent::QueryChanged(query));
                }
            });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            Footer::show(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(event) = CatalogView::show(ui, &self.state) {
                events.push(event);
            }
        });

        if let Some(event) = OverlayView::show(ctx, self.state.overlay()) {
            events.push(event);
        }

        for event in events {
            if let Some(HubEffect::OpenInBrowser(url)) = self.state.handle(event) {
                open_in_browser(&url);
            }
        }
    }
}

fn open_in_browser(url: &str) {
    log::info!("Opening {} in the system browser", url);
    if let Err(e) = webbrowser::open(url) {
        log::warn!("Failed to open browser for {}: {}", url, e);
    }
}
