mod action;
mod album;
mod app;
mod config;
mod detail;
mod error;
mod event;
mod home;
mod logging;
mod nav;
mod source;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;

use action::{Action, Event};
use app::App;
use config::AppConfig;
use event::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    let _log_guard = logging::init(&AppConfig::config_dir()?)?;
    let source = config.album_source()?;
    info!(source = %source.describe(), "starting albumdeck");

    set_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut app = App::new(source, config.user_name.clone(), action_tx);
    app.init();

    let mut events = EventHandler::new(Duration::from_millis(250));

    let result = async {
        loop {
            terminal.draw(|f| ui::render(f, &app))?;

            tokio::select! {
                event = events.next() => {
                    match event? {
                        Event::Key(key) => handle_key_event(&mut app, key),
                        Event::Tick => app.on_tick(),
                        Event::Resize(_, _) => {
                            // Terminal will re-draw automatically
                        }
                    }
                }
                Some(action) = action_rx.recv() => {
                    app.update(action);
                }
            }

            if !app.running {
                break;
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    app.shutdown();
    restore_terminal().context("Failed to restore terminal")?;
    terminal.show_cursor()?;
    info!("exiting");

    result
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Leaves the alternate screen before the default hook prints the panic.
fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        hook(panic_info);
    }));
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Help overlay
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        // Navigation between screens
        KeyCode::Enter => {
            app.select_focused();
        }
        KeyCode::Esc | KeyCode::Backspace => {
            app.back();
        }

        // Cursor movement
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.move_left();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.move_right();
        }

        // Mini player
        KeyCode::Char(' ') => {
            app.toggle_playback();
        }

        KeyCode::Char('r') => {
            app.reload();
        }

        _ => {}
    }
}
