use chrono::Timelike;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::home::{Focus, HomeState, Phase};
use crate::ui::layout::{centered, truncate, ACCENT, ACCENT_DARK};
use crate::ui::mini_player::MiniPlayer;

const CARD_WIDTH: u16 = 26;

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning!",
        12..=17 => "Good Afternoon!",
        _ => "Good Evening!",
    }
}

pub fn render(f: &mut Frame, app: &App, body: Rect, footer: Rect) {
    let home = &app.home;
    match home.phase {
        Phase::Loading => {
            let text = format!("{} Loading albums...", app.spinner());
            render_centered(f, body, &text, ACCENT);
        }
        Phase::Empty => render_centered(f, body, "No albums found", Color::White),
        Phase::Loaded => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5), // Greeting
                    Constraint::Length(1), // "Albums"
                    Constraint::Length(6), // Album cards
                    Constraint::Length(1), // "Recently Played"
                    Constraint::Min(3),    // Recently played list
                ])
                .split(body);

            render_header(f, &app.user_name, chunks[0]);
            render_section_header(f, "Albums", home.focus == Focus::Albums, chunks[1]);
            render_album_row(f, home, chunks[2]);
            render_section_header(f, "Recently Played", home.focus == Focus::Recent, chunks[3]);
            render_recently_played(f, home, chunks[4]);

            if let Some(album) = home.current_album() {
                f.render_widget(MiniPlayer::new(album, home.is_playing), footer);
            }
        }
    }
}

fn render_centered(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let width = text.chars().count() as u16 + 4;
    let paragraph = Paragraph::new(text.to_string()).style(Style::default().fg(color));
    f.render_widget(paragraph, centered(area, width, 1));
}

fn render_header(f: &mut Frame, user_name: &str, area: Rect) {
    let hour = chrono::Local::now().hour();
    let lines = vec![
        Line::from(Span::styled(greeting(hour), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            user_name.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
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

fn render_section_header(f: &mut Frame, title: &str, focused: bool, area: Rect) {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let marker = if focused { "›" } else { " " };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(format!("{} {}", marker, title), style))),
        area,
    );
}

/// Index of the first card to draw so that `selected` stays on screen.
pub fn first_visible(selected: usize, visible: usize) -> usize {
    if visible == 0 || selected < visible {
        0
    } else {
        selected + 1 - visible
    }
}

fn render_album_row(f: &mut Frame, home: &HomeState, area: Rect) {
    let visible = (area.width / CARD_WIDTH).max(1) as usize;
    let first = first_visible(home.album_index, visible);
    let inner_width = CARD_WIDTH.saturating_sub(4) as usize;

    let constraints = vec![Constraint::Length(CARD_WIDTH); visible];
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (slot, (i, album)) in slots
        .iter()
        .zip(home.albums.iter().enumerate().skip(first))
    {
        let selected = home.focus == Focus::Albums && i == home.album_index;
        let border_style = if selected {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines = vec![
            Line::from(Span::styled(
                truncate(&album.title, inner_width),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&album.artist, inner_width),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled("▶", Style::default().fg(ACCENT))).right_aligned(),
        ];

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
        f.render_widget(card, *slot);
    }
}

fn render_recently_played(f: &mut Frame, home: &HomeState, area: Rect) {
    let focused = home.focus == Focus::Recent;
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = home
        .recently_played
        .iter()
        .map(|album| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate(&album.title, width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate(&album.subtitle(), width),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol(if focused { "› " } else { "  " });

    let mut state = ListState::default();
    state.select(Some(home.recent_index));
    f.render_stateful_widget(list, area, &mut state);
}
