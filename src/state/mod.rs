//! The hub view-model.
//!
//! `HubState` is the single owner of everything the UI shows. Event handlers
//! never touch the catalog or the overlay directly, they describe what
//! happened as a [`HubEvent`] and hand it to [`HubState::handle`].

use crate::catalog::{Catalog, GameId};
use crate::filter::{self, FilteredView};
use crate::overlay::{CloseReason, Overlay};
use crate::Result;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load games list. Please try again later.";
pub const NO_RESULTS_MESSAGE: &str = "No games found matching your search.";

#[derive(Debug, Clone, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(String),
}

#[derive(Debug)]
pub enum HubEvent {
    CatalogLoaded(Result<Catalog>),
    QueryChanged(String),
    CardClicked(GameId),
    CloseClicked,
    EscapePressed,
    BackdropClicked,
    FullscreenToggled,
    PlayClicked,
    ExternalLinkClicked,
}

/// Work the UI has to carry out after an event, outside the view-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubEffect {
    OpenInBrowser(String),
}

#[derive(Debug, Default)]
pub struct HubState {
    catalog: CatalogStatus,
    query: String,
    overlay: Overlay,
}

impl HubState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: HubEvent) -> Option<HubEffect> {
        match event {
            HubEvent::CatalogLoaded(result) => self.finish_loading(result),
            HubEvent::QueryChanged(query) => self.query = query,
            HubEvent::CardClicked(id) => {
                let CatalogStatus::Ready(catalog) = &self.catalog else {
                    return None;
                };
                if let Err(e) = self.overlay.select(catalog, &id) {
                    log::warn!("Ignoring click: {}", e);
                }
            }
            HubEvent::CloseClicked => self.overlay.close(CloseReason::Button),
            HubEvent::EscapePressed => self.overlay.close(CloseReason::Escape),
            HubEvent::BackdropClicked => self.overlay.close(CloseReason::Backdrop),
            HubEvent::FullscreenToggled => self.overlay.toggle_fullscreen(),
            HubEvent::PlayClicked => {
                return self.overlay.launch_external().map(HubEffect::OpenInBrowser);
            }
            HubEvent::ExternalLinkClicked => {
                return self
                    .overlay
                    .selected()
                    .map(|game| HubEffect::OpenInBrowser(game.url.clone()));
            }
        }

        None
    }

    fn finish_loading(&mut self, result: Result<Catalog>) {
        if !matches!(self.catalog, CatalogStatus::Loading) {
            log::warn!("Catalog already loaded, ignoring second result");
            return;
        }

        self.catalog = match result {
            Ok(catalog) => {
                log::info!("{} games available", catalog.len());
                CatalogStatus::Ready(catalog)
            }
            Err(e) => {
                log::error!("Failed to load games: {}", e);
                CatalogStatus::Failed(e.to_string())
            }
        };
    }

    pub fn catalog(&self) -> &CatalogStatus {
        &self.catalog
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.catalog, CatalogStatus::Loading)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Games matching the current query. Empty until the catalog is ready.
    pub fn visible(&self) -> FilteredView<'_> {
        match &self.catalog {
            CatalogStatus::Ready(catalog) => filter::filter(catalog.entries(), &self.query),
            _ => filter::filter(&[], &self.query),
        }
    }

    pub fn show_no_results(&self) -> bool {
        matches!(self.catalog, CatalogStatus::Ready(_)) && self.visible().is_empty()
    }

    /// The message shown in place of the grid when loading failed.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.catalog {
            CatalogStatus::Failed(_) => Some(LOAD_ERROR_MESSAGE),
            _ => None,
        }
    }

    /// Why loading failed, for anyone who wants more than the static message.
    pub fn load_error_detail(&self) -> Option<&str> {
        match &self.catalog {
            CatalogStatus::Failed(detail) => Some(detail),
            _ => None,
        }
    }
}
