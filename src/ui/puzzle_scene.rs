//! Puzzle board UI rendering.

use crate::puzzle::{GameMode, GameStatus, PuzzleSession};
use crate::scores::BestScore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of one rendered tile cell in characters.
const CELL_WIDTH: u16 = 5;
/// Height of one rendered tile cell in rows.
const CELL_HEIGHT: u16 = 2;

/// Render the puzzle scene: grid on the left, info panel on the right.
pub fn render_puzzle(
    frame: &mut Frame,
    area: Rect,
    session: &PuzzleSession,
    timer_display: &str,
    message: &str,
    best: Option<&BestScore>,
) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Grid area
            Constraint::Length(30), // Info panel
        ])
        .split(area);

    render_grid(frame, chunks[0], session);
    render_info_panel(frame, chunks[1], session, timer_display, message, best);

    if matches!(session.status, GameStatus::Won | GameStatus::Lost) {
        render_game_over_overlay(frame, chunks[0], session, timer_display);
    }
}

/// Render the tile grid.
fn render_grid(frame: &mut Frame, area: Rect, session: &PuzzleSession) {
    let block = Block::default()
        .title(format!(" {0}x{0} Puzzle ", session.size()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let size = session.size() as u16;
    let grid_width = size * CELL_WIDTH;
    let grid_height = size * CELL_HEIGHT;

    // Center the grid in available space
    let x_offset = inner.x + (inner.width.saturating_sub(grid_width)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(grid_height)) / 2;

    for (index, cell) in session.board.tiles.iter().enumerate() {
        let (row, col) = session.board.position(index);
        let rect = Rect::new(
            x_offset + col as u16 * CELL_WIDTH,
            y_offset + row as u16 * CELL_HEIGHT,
            CELL_WIDTH.saturating_sub(1),
            CELL_HEIGHT.saturating_sub(1),
        );
        if rect.right() > inner.right() || rect.bottom() > inner.bottom() {
            continue;
        }

        let widget = match cell {
            Some(label) => Paragraph::new(format!("{}", label))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(tile_color(*label, session.size()))
                        .add_modifier(Modifier::BOLD),
                ),
            None => Paragraph::new("").style(Style::default().bg(Color::Reset)),
        };
        frame.render_widget(widget, rect);
    }
}

/// Tiles that sit on their solved position render brighter.
fn tile_color(label: u16, size: usize) -> Color {
    // Alternate hues by solved-position parity for a checkered look
    let solved_index = (label - 1) as usize;
    let (row, col) = (solved_index / size, solved_index % size);
    if (row + col) % 2 == 0 {
        Color::Cyan
    } else {
        Color::LightBlue
    }
}

/// Render the info panel on the right side.
fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    session: &PuzzleSession,
    timer_display: &str,
    message: &str,
    best: Option<&BestScore>,
) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Sliding Puzzle",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Mode: ", Style::default().fg(Color::DarkGray)),
            Span::styled(session.mode.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Size: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{0}x{0}", session.size()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Moves: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.moves_count),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    if let Some(remaining) = session.moves_remaining() {
        let color = if remaining <= session.moves_limit / 4 {
            Color::Red
        } else {
            Color::White
        };
        lines.push(Line::from(vec![
            Span::styled("Remaining: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", remaining), Style::default().fg(color)),
        ]));
    }

    if session.mode == GameMode::Timed {
        lines.push(Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(timer_display.to_string(), Style::default().fg(Color::Green)),
        ]));
    }

    if let Some(best) = best {
        lines.push(Line::from(""));
        let text = match best.seconds {
            Some(secs) => format!(
                "Best: {} ({} moves)",
                crate::puzzle::format_elapsed(secs),
                best.moves
            ),
            None => format!("Best: {} moves", best.moves),
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Magenta),
        )));
    }

    lines.push(Line::from(""));
    for part in message.split(". ") {
        if !part.is_empty() {
            lines.push(Line::from(Span::styled(
                part.trim_end_matches('.').to_string(),
                Style::default().fg(Color::White),
            )));
        }
    }
    lines.push(Line::from(""));

    // Controls
    lines.push(Line::from(Span::styled(
        "[Arrows] Slide tile",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "[S] Shuffle / restart",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "[M] Mode  [+/-] Size",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "[Q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the game over overlay.
fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    session: &PuzzleSession,
    timer_display: &str,
) {
    let (title, color) = match session.status {
        GameStatus::Won => ("Puzzle Solved!", Color::Green),
        GameStatus::Lost => ("Out of Moves!", Color::Red),
        _ => return,
    };

    let detail = match (session.status, session.mode) {
        (GameStatus::Won, GameMode::Timed) => {
            format!("{} moves in {}", session.moves_count, timer_display)
        }
        (GameStatus::Won, _) => format!("{} moves", session.moves_count),
        _ => format!("Limit was {} moves", session.moves_limit),
    };

    // Center overlay
    let width = 30;
    let height = 6;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            "[S] Play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
