use ratatui::{prelude::*, widgets::*};
use sudori_core::Board;

/// Visual parameters for the board widget, built once in main and passed
/// down. The drawing code keeps no ambient state.
pub struct BoardStyle {
    /// Terminal columns per cell, digit centered.
    pub cell_width: u16,
    /// Gray-tint every other 3x3 box as an orientation hint.
    pub tint_alternate_boxes: bool,
}

impl Default for BoardStyle {
    fn default() -> Self { Self { cell_width: 3, tint_alternate_boxes: true } }
}

pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    revealed: &[[bool; 9]; 9],
    cfg: &BoardStyle,
    title: &str,
) {
    let w = cfg.cell_width.max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for r in 0..9 {
        let mut spans: Vec<Span> = Vec::new();
        for c in 0..9 {
            let ch = if revealed[r][c] { char::from(b'0' + board.get(r, c)) } else { ' ' };
            let mut style = Style::default();
            if cfg.tint_alternate_boxes && (r / 3 + c / 3) % 2 == 0 {
                style = style.bg(Color::DarkGray);
            }
            if revealed[r][c] {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{ch:^w$}"), style));
            if c % 3 == 2 && c != 8 {
                spans.push(Span::styled("┃", Style::default().fg(Color::White)));
            }
        }
        lines.push(Line::from(spans));
        // Heavy horizontal separator between bands
        if r % 3 == 2 && r != 8 {
            lines.push(Line::from(Span::styled(band_separator(w), Style::default().fg(Color::White))));
        }
    }
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn band_separator(cell_width: usize) -> String {
    let run = "━".repeat(cell_width * 3);
    format!("{run}╋{run}╋{run}")
}
