use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::action::Action;
use crate::album::Album;
use crate::error::NetworkError;
use crate::source::AlbumSource;

/// Load status of the home feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Empty,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Albums,
    Recent,
}

pub struct HomeState {
    pub phase: Phase,
    pub albums: Vec<Album>,
    pub recently_played: Vec<Album>,
    pub focus: Focus,
    pub album_index: usize,
    pub recent_index: usize,
    pub is_playing: bool,

    // Bumped on every mount/unmount; results tagged with an older value are dropped.
    generation: u64,
    load_task: Option<JoinHandle<()>>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            albums: Vec::new(),
            recently_played: Vec::new(),
            focus: Focus::Albums,
            album_index: 0,
            recent_index: 0,
            is_playing: true,
            generation: 0,
            load_task: None,
        }
    }
}

impl Drop for HomeState {
    fn drop(&mut self) {
        if let Some(handle) = self.load_task.take() {
            handle.abort();
        }
    }
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_fetching(&self) -> bool {
        self.load_task
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Starts a fresh load. Any fetch still running from a previous mount is cancelled.
    pub fn mount(&mut self, source: &AlbumSource, tx: &mpsc::UnboundedSender<Action>) {
        self.unmount();
        self.generation += 1;

        self.phase = Phase::Loading;
        self.albums.clear();
        self.recently_played.clear();
        self.album_index = 0;
        self.recent_index = 0;
        self.is_playing = true;

        let generation = self.generation;
        let source = source.clone();
        let tx = tx.clone();
        info!(generation, source = %source.describe(), "loading albums");

        self.load_task = Some(tokio::spawn(async move {
            let result = source.fetch_albums().await;
            let _ = tx.send(Action::AlbumsLoaded { generation, result });
        }));
    }

    /// Cancels the in-flight fetch, if any, and invalidates its result.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.load_task.take() {
            if !handle.is_finished() {
                debug!(generation = self.generation, "cancelling album fetch");
            }
            handle.abort();
        }
        self.generation += 1;
    }

    /// Applies the outcome of a fetch. Returns false when the result belongs
    /// to a mount that has since been cancelled.
    pub fn finish_load<R: Rng + ?Sized>(
        &mut self,
        generation: u64,
        result: Result<Vec<Album>, NetworkError>,
        rng: &mut R,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale album load");
            return false;
        }
        self.load_task = None;

        match result {
            Ok(albums) if albums.is_empty() => {
                info!("album source returned no albums");
                self.phase = Phase::Empty;
            }
            Ok(albums) => {
                let mut recently_played = albums.clone();
                recently_played.shuffle(rng);
                info!(count = albums.len(), "albums loaded");
                self.albums = albums;
                self.recently_played = recently_played;
                self.phase = Phase::Loaded;
            }
            Err(e) => {
                // Shown to the user exactly like an empty result.
                error!(error = %e, "failed to load albums");
                self.phase = Phase::Empty;
            }
        }
        true
    }

    /// Album shown in the home mini player.
    pub fn current_album(&self) -> Option<&Album> {
        match self.phase {
            Phase::Loaded => self.albums.first(),
            _ => None,
        }
    }

    pub fn focused_album(&self) -> Option<&Album> {
        if self.phase != Phase::Loaded {
            return None;
        }
        match self.focus {
            Focus::Albums => self.albums.get(self.album_index),
            Focus::Recent => self.recently_played.get(self.recent_index),
        }
    }

    pub fn toggle_playback(&mut self) {
        if self.current_album().is_some() {
            self.is_playing = !self.is_playing;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Albums => Focus::Recent,
            Focus::Recent => Focus::Albums,
        };
    }

    pub fn move_left(&mut self) {
        if self.focus == Focus::Albums {
            self.album_index = self.album_index.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if self.focus == Focus::Albums && self.album_index + 1 < self.albums.len() {
            self.album_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Albums => {}
            Focus::Recent if self.recent_index == 0 => self.focus = Focus::Albums,
            Focus::Recent => self.recent_index -= 1,
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Albums => {
                if !self.recently_played.is_empty() {
                    self.focus = Focus::Recent;
                }
            }
            Focus::Recent => {
                if self.recent_index + 1 < self.recently_played.len() {
                    self.recent_index += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{sample_albums, ApiClient};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn sorted_ids(albums: &[Album]) -> Vec<i64> {
        let mut ids: Vec<i64> = albums.iter().map(|a| a.id).collect();
        ids.sort();
        ids
    }

    fn network_error() -> NetworkError {
        NetworkError::Decode(serde_json::from_str::<Vec<Album>>("{").unwrap_err())
    }

    #[test]
    fn starts_loading() {
        let home = HomeState::new();
        assert_eq!(home.phase, Phase::Loading);
        assert!(home.current_album().is_none());
        assert!(home.focused_album().is_none());
    }

    #[test]
    fn loaded_albums_keep_order_and_shuffle_recents() {
        let mut home = HomeState::new();
        let albums = sample_albums();

        assert!(home.finish_load(home.generation(), Ok(albums.clone()), &mut rng()));
        assert_eq!(home.phase, Phase::Loaded);
        assert_eq!(home.albums, albums);
        assert_eq!(home.recently_played.len(), albums.len());
        assert_eq!(sorted_ids(&home.recently_played), sorted_ids(&albums));
        assert_eq!(home.current_album(), albums.first());
    }

    #[test]
    fn permutation_holds_with_duplicate_ids() {
        let mut home = HomeState::new();
        let mut albums = sample_albums();
        albums.push(albums[0].clone());

        home.finish_load(home.generation(), Ok(albums.clone()), &mut rng());
        assert_eq!(sorted_ids(&home.recently_played), sorted_ids(&albums));
    }

    #[test]
    fn empty_result_is_empty_phase() {
        let mut home = HomeState::new();
        assert!(home.finish_load(home.generation(), Ok(vec![]), &mut rng()));
        assert_eq!(home.phase, Phase::Empty);
        assert!(home.albums.is_empty());
        assert!(home.recently_played.is_empty());
        assert!(home.current_album().is_none());
    }

    #[test]
    fn failure_is_empty_phase_with_one_error_log() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(count.clone()));

        let mut home = HomeState::new();
        tracing::subscriber::with_default(subscriber, || {
            home.finish_load(home.generation(), Err(network_error()), &mut rng());
        });

        assert_eq!(home.phase, Phase::Empty);
        assert!(home.albums.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut home = HomeState::new();
        let stale = home.generation();
        home.unmount();

        assert!(!home.finish_load(stale, Ok(sample_albums()), &mut rng()));
        assert_eq!(home.phase, Phase::Loading);
        assert!(home.albums.is_empty());
    }

    #[test]
    fn focus_and_cursor_navigation() {
        let mut home = HomeState::new();
        home.finish_load(home.generation(), Ok(sample_albums()), &mut rng());

        home.move_left();
        assert_eq!(home.album_index, 0);
        for _ in 0..10 {
            home.move_right();
        }
        assert_eq!(home.album_index, 4);
        assert_eq!(home.focused_album().map(|a| a.id), Some(5));

        home.move_down();
        assert_eq!(home.focus, Focus::Recent);
        assert_eq!(home.focused_album(), home.recently_played.first());
        home.move_down();
        assert_eq!(home.recent_index, 1);
        home.move_up();
        home.move_up();
        assert_eq!(home.focus, Focus::Albums);

        home.toggle_focus();
        assert_eq!(home.focus, Focus::Recent);
    }

    #[test]
    fn playback_toggle_needs_a_current_album() {
        let mut home = HomeState::new();
        home.toggle_playback();
        assert!(home.is_playing);

        home.finish_load(home.generation(), Ok(sample_albums()), &mut rng());
        home.toggle_playback();
        assert!(!home.is_playing);
    }

    #[tokio::test]
    async fn mount_fetches_once_and_reports_back() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut home = HomeState::new();
        home.mount(&AlbumSource::Static, &tx);
        assert_eq!(home.phase, Phase::Loading);

        let Action::AlbumsLoaded { generation, result } = rx.recv().await.unwrap();
        assert_eq!(generation, home.generation());
        assert!(home.finish_load(generation, result, &mut rng()));
        assert_eq!(home.phase, Phase::Loaded);
        assert!(!home.is_fetching());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn remount_discards_previous_result() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut home = HomeState::new();
        home.mount(&AlbumSource::Static, &tx);
        let first = home.generation();
        home.mount(&AlbumSource::Static, &tx);
        assert_ne!(first, home.generation());

        // The first task may or may not have finished before it was aborted.
        let mut applied = 0;
        while let Ok(Some(Action::AlbumsLoaded { generation, result })) =
            tokio::time::timeout(Duration::from_millis(200), rx.recv()).await
        {
            if home.finish_load(generation, result, &mut rng()) {
                applied += 1;
            }
        }
        assert_eq!(applied, 1);
        assert_eq!(home.phase, Phase::Loaded);
    }

    #[tokio::test]
    async fn unmount_cancels_in_flight_fetch() {
        // Accepts the connection but never answers, so the fetch hangs.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _conn = listener.accept().await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        });
        let base = url::Url::parse(&format!("http://{}/", addr)).unwrap();
        let source = AlbumSource::Remote(ApiClient::new(base).unwrap());

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut home = HomeState::new();
        home.mount(&source, &tx);
        assert!(home.is_fetching());

        home.unmount();
        assert!(!home.is_fetching());
        let outcome = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
        assert!(outcome.is_err(), "cancelled fetch still reported a result");
    }
}
