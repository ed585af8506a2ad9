//! Overlay controller.
//!
//! Tracks which game is open and whether the overlay is in its fullscreen
//! layout. Opening a game points the embedded frame at the game's URL and
//! closing always blanks it again.

use egui::{Rect, Vec2};

use crate::catalog::{Catalog, GameEntry, GameId};
use crate::{Error, Result};

const MODAL_MAX_WIDTH: f32 = 1024.0;
const MODAL_HEIGHT_FRACTION: f32 = 0.8;
const SCREEN_PADDING: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open,
    OpenFullscreen,
}

/// What dismissed the overlay. All of them behave the same, the reason is
/// only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Escape,
    Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayout {
    Windowed,
    Fullscreen,
}

impl OverlayLayout {
    /// Where the modal sits on a screen of the given size.
    pub fn modal_rect(self, screen: Rect) -> Rect {
        let available = screen.shrink(SCREEN_PADDING);
        if available.width() <= 0.0 || available.height() <= 0.0 {
            return screen;
        }

        match self {
            OverlayLayout::Fullscreen => available,
            OverlayLayout::Windowed => {
                let size = Vec2::new(
                    available.width().min(MODAL_MAX_WIDTH),
                    available.height().min(screen.height() * MODAL_HEIGHT_FRACTION),
                );
                Rect::from_center_size(screen.center(), size)
            }
        }
    }
}

/// The content area of the overlay.
///
/// egui cannot render web pages, so playing a game hands the source over to
/// the system browser. Once handed off, the page lives in a browser tab this
/// process does not own: clearing the frame drops the source here but cannot
/// stop media already playing there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedFrame {
    src: Option<String>,
    handed_off: bool,
}

impl EmbeddedFrame {
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// True once the current source was opened in the system browser.
    pub fn handed_off(&self) -> bool {
        self.handed_off
    }

    fn load(&mut self, url: &str) {
        log::debug!("Embedded frame loading {}", url);
        self.src = Some(url.to_string());
        self.handed_off = false;
    }

    fn hand_off(&mut self) -> Option<String> {
        let src = self.src.clone()?;
        self.handed_off = true;
        Some(src)
    }

    fn clear(&mut self) {
        let Some(src) = self.src.take() else {
            return;
        };

        if std::mem::take(&mut self.handed_off) {
            log::warn!(
                "{} keeps running in the system browser, closing the overlay does not stop it",
                src
            );
        } else {
            log::debug!("Embedded frame cleared");
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Overlay {
    selected: Option<GameEntry>,
    fullscreen: bool,
    frame: EmbeddedFrame,
}

impl Overlay {
    pub fn state(&self) -> OverlayState {
        match (&self.selected, self.fullscreen) {
            (None, _) => OverlayState::Closed,
            (Some(_), false) => OverlayState::Open,
            (Some(_), true) => OverlayState::OpenFullscreen,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&GameEntry> {
        self.selected.as_ref()
    }

    pub fn frame(&self) -> &EmbeddedFrame {
        &self.frame
    }

    pub fn layout(&self) -> OverlayLayout {
        match self.state() {
            OverlayState::OpenFullscreen => OverlayLayout::Fullscreen,
            _ => OverlayLayout::Windowed,
        }
    }

    /// The catalog underneath must not scroll or react while a game is open.
    pub fn blocks_background(&self) -> bool {
        self.is_open()
    }

    /// Open the game with `id`. Only members of `catalog` can be selected.
    ///
    /// Selecting while already open swaps the game and keeps the current
    /// layout.
    pub fn select(&mut self, catalog: &Catalog, id: &GameId) -> Result<()> {
        let entry = catalog
            .get(id)
            .ok_or_else(|| Error::GameNotFound(id.to_string()))?;

        log::info!("Opening {} ({})", entry.title, entry.id);
        self.frame.load(&entry.url);
        self.selected = Some(entry.clone());
        Ok(())
    }

    pub fn close(&mut self, reason: CloseReason) {
        let Some(entry) = self.selected.take() else {
            return;
        };

        log::info!("Closing {} ({:?})", entry.title, reason);
        self.frame.clear();
        self.fullscreen = false;
    }

    /// Hand the open game to the system browser. `None` while closed.
    pub fn launch_external(&mut self) -> Option<String> {
        let url = self.frame.hand_off()?;
        log::info!("Handing {} to the system browser", url);
        Some(url)
    }

    /// No-op while closed.
    pub fn toggle_fullscreen(&mut self) {
        if self.is_open() {
            self.fullscreen = !self.fullscreen;
            log::debug!("Overlay fullscreen: {}", self.fullscreen);
        }
    }
}
