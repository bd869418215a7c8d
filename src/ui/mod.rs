pub mod detail;
pub mod help;
pub mod home;
pub mod layout;
pub mod mini_player;

use ratatui::Frame;

use crate::app::App;
use crate::nav::Screen;

pub fn render(f: &mut Frame, app: &App) {
    let chunks = layout::main_layout(f.area());

    layout::render_title(f, app, chunks[0]);

    // Body and mini player
    match app.nav.screen() {
        Screen::Home => home::render(f, app, chunks[1], chunks[2]),
        Screen::Detail => detail::render(f, app, chunks[1], chunks[2]),
    }

    // Help overlay
    if app.show_help {
        help::render(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::album::Album;
    use crate::source::{sample_albums, AlbumSource};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(AlbumSource::Static, "Stella Casillas", tx)
    }

    fn load(app: &mut App, albums: Vec<Album>) {
        let generation = app.home.generation();
        app.update(Action::AlbumsLoaded {
            generation,
            result: Ok(albums),
        });
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn loading_screen_has_no_mini_player() {
        let screen = draw(&app());
        assert!(screen.contains("Loading albums..."));
        assert!(!screen.contains("Now Playing"));
    }

    #[test]
    fn empty_feed_says_so() {
        let mut app = app();
        load(&mut app, vec![]);
        let screen = draw(&app);
        assert!(screen.contains("No albums found"));
    }

    #[test]
    fn loaded_feed_shows_sections_and_player() {
        let mut app = app();
        load(&mut app, sample_albums());
        let screen = draw(&app);
        assert!(screen.contains("Stella Casillas"));
        assert!(screen.contains("Albums"));
        assert!(screen.contains("Recently Played"));
        assert!(screen.contains("Now Playing"));
        assert!(screen.contains("Abbey Road"));
    }

    #[test]
    fn detail_screen_lists_tracks() {
        let mut app = app();
        load(&mut app, sample_albums());
        let awake = sample_albums().into_iter().find(|a| a.title == "Awake").unwrap();
        app.open_album(awake);

        let screen = draw(&app);
        assert!(screen.contains("About this album"));
        assert!(screen.contains("Artist: Dream Theater"));
        assert!(screen.contains("Awake • Track 1"));
        assert!(screen.contains("Awake • Track 10"));
    }

    #[test]
    fn detail_without_selection_draws_nothing() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|f| {
                let chunks = layout::main_layout(f.area());
                detail::render(f, &app, chunks[1], chunks[2]);
            })
            .unwrap();
        let blank = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .all(|cell| cell.symbol() == " ");
        assert!(blank);
    }

    #[test]
    fn help_overlay_lists_bindings() {
        let mut app = app();
        app.show_help = true;
        let screen = draw(&app);
        assert!(screen.contains("Keybindings"));
        assert!(screen.contains("Reload albums"));
    }
}
