use tokio::sync::mpsc;
use tracing::info;

use crate::action::Action;
use crate::album::Album;
use crate::detail::DetailState;
use crate::home::HomeState;
use crate::nav::{Navigator, Screen};
use crate::source::AlbumSource;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub user_name: String,

    pub nav: Navigator,
    pub home: HomeState,
    pub detail: DetailState,

    source: AlbumSource,
    action_tx: mpsc::UnboundedSender<Action>,

    // Drives the loading spinner
    tick_count: usize,
}

impl App {
    pub fn new(
        source: AlbumSource,
        user_name: impl Into<String>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            running: true,
            show_help: false,
            user_name: user_name.into(),
            nav: Navigator::new(),
            home: HomeState::new(),
            detail: DetailState::default(),
            source,
            action_tx,
            tick_count: 0,
        }
    }

    pub fn init(&mut self) {
        self.home.mount(&self.source, &self.action_tx);
    }

    pub fn shutdown(&mut self) {
        self.home.unmount();
        self.running = false;
    }

    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.tick_count % SPINNER.len()]
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::AlbumsLoaded { generation, result } => {
                self.home
                    .finish_load(generation, result, &mut rand::thread_rng());
            }
        }
    }

    /// Reloads the home feed. Ignored while an album is open or a load is
    /// still in flight.
    pub fn reload(&mut self) {
        if self.nav.screen() != Screen::Home || self.home.is_fetching() {
            return;
        }
        self.home.mount(&self.source, &self.action_tx);
    }

    pub fn select_focused(&mut self) {
        if let Some(album) = self.home.focused_album().cloned() {
            self.open_album(album);
        }
    }

    pub fn open_album(&mut self, album: Album) {
        let id = album.id;
        if self.nav.select_album(album) {
            self.detail.enter();
            info!(album_id = id, "opened album");
        }
    }

    pub fn back(&mut self) {
        if self.nav.back() {
            info!("back to home");
        }
    }

    /// Play/pause on whichever mini player is visible.
    pub fn toggle_playback(&mut self) {
        match self.nav.screen() {
            Screen::Home => self.home.toggle_playback(),
            Screen::Detail => self.detail.toggle_playback(),
        }
    }

    pub fn toggle_focus(&mut self) {
        if self.nav.screen() == Screen::Home {
            self.home.toggle_focus();
        }
    }

    pub fn move_up(&mut self) {
        match self.nav.screen() {
            Screen::Home => self.home.move_up(),
            Screen::Detail => self.detail.move_up(),
        }
    }

    pub fn move_down(&mut self) {
        match self.nav.screen() {
            Screen::Home => self.home.move_down(),
            Screen::Detail => self.detail.move_down(),
        }
    }

    pub fn move_left(&mut self) {
        if self.nav.screen() == Screen::Home {
            self.home.move_left();
        }
    }

    pub fn move_right(&mut self) {
        if self.nav.screen() == Screen::Home {
            self.home.move_right();
        }
    }
}
