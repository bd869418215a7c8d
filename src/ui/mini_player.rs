use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::album::Album;
use crate::ui::layout::{truncate, ACCENT};

/// Bottom-of-screen player bar. Holds no state; the owning screen decides
/// `is_playing` and handles the toggle key.
pub struct MiniPlayer<'a> {
    album: &'a Album,
    is_playing: bool,
}

impl<'a> MiniPlayer<'a> {
    pub fn new(album: &'a Album, is_playing: bool) -> Self {
        Self { album, is_playing }
    }

    /// Icon of the control, i.e. what pressing it would do.
    pub fn control_icon(&self) -> &'static str {
        if self.is_playing {
            "⏸"
        } else {
            "▶"
        }
    }
}

impl Widget for MiniPlayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(" Now Playing ")
            .title_bottom(Line::from(" space play/pause ").right_aligned());

        let width = block.inner(area).width.saturating_sub(6) as usize;

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.control_icon()),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    truncate(&self.album.title, width),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    truncate(&self.album.artist, width),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
