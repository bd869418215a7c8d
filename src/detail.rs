use crate::album::Album;

pub const TRACK_COUNT: usize = 10;

/// Placeholder track list shown for every album.
pub fn track_titles(album: &Album) -> Vec<String> {
    (1..=TRACK_COUNT)
        .map(|n| format!("{} • Track {}", album.title, n))
        .collect()
}

/// Local state of the detail screen. Reset every time an album is opened.
#[derive(Debug, Default)]
pub struct DetailState {
    pub is_playing: bool,
    pub track_index: usize,
}

impl DetailState {
    pub fn enter(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn move_up(&mut self) {
        self.track_index = self.track_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.track_index + 1 < TRACK_COUNT {
            self.track_index += 1;
        }
    }
}
