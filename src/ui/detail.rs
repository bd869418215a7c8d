use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::album::Album;
use crate::app::App;
use crate::detail::track_titles;
use crate::ui::layout::{truncate, ACCENT, ACCENT_DARK};
use crate::ui::mini_player::MiniPlayer;

pub fn render(f: &mut Frame, app: &App, body: Rect, footer: Rect) {
    // Without a selection there is nothing to show.
    let Some(album) = app.nav.selected() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Header art
            Constraint::Length(5), // About
            Constraint::Length(3), // Artist
            Constraint::Min(4),    // Tracks
        ])
        .split(body);

    render_header(f, album, chunks[0]);
    render_about(f, &album.description, chunks[1]);
    render_artist(f, &album.artist, chunks[2]);
    render_tracks(f, app, album, chunks[3]);

    f.render_widget(MiniPlayer::new(album, app.detail.is_playing), footer);
}

fn render_header(f: &mut Frame, album: &Album, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled("← Esc", Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled("♡", Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            truncate(&album.title, width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&album.artist, width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate(&album.image_url, width),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(ACCENT_DARK)),
    );
    f.render_widget(header, area);
}

fn render_about(f: &mut Frame, description: &str, area: Rect) {
    let about = Paragraph::new(description.to_string())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(
                    " About this album ",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(about, area);
}

fn render_artist(f: &mut Frame, artist: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Artist: ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(artist.to_string(), Style::default().fg(Color::White)),
    ]);
    let card = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(card, area);
}

fn render_tracks(f: &mut Frame, app: &App, album: &Album, area: Rect) {
    let header = Row::new(vec!["#", "Title", "Artist"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = track_titles(album)
        .into_iter()
        .enumerate()
        .map(|(i, title)| Row::new(vec![format!("{}", i + 1), title, album.artist.clone()]))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(60),
            Constraint::Percentage(35),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Tracks "),
    )
    .row_highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    state.select(Some(app.detail.track_index));
    f.render_stateful_widget(table, area, &mut state);
}
