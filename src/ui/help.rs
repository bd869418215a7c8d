use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::{centered, ACCENT};

const BINDINGS: &[(&str, &str)] = &[
    ("q", "Quit"),
    ("← / → / h / l", "Move along albums"),
    ("↑ / ↓ / k / j", "Move up / down"),
    ("Tab", "Switch section"),
    ("Enter", "Open album"),
    ("Esc / Backspace", "Back"),
    ("Space", "Play / Pause"),
    ("r", "Reload albums"),
    ("?", "Toggle help"),
];

pub fn render(f: &mut Frame) {
    let area = centered(f.area(), 48, BINDINGS.len() as u16 + 2);
    f.render_widget(Clear, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>17}", key),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Keybindings (? to close) "),
    );

    f.render_widget(help, area);
}
