use crate::album::Album;
use crate::error::NetworkError;

/// Events sent from the event handler to the main loop.
#[derive(Debug)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Results sent from background tasks back to the main loop.
#[derive(Debug)]
pub enum Action {
    /// Outcome of the fetch started by home mount number `generation`.
    AlbumsLoaded {
        generation: u64,
        result: Result<Vec<Album>, NetworkError>,
    },
}
