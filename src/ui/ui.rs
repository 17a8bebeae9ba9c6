use crate::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::footer::render_footer;
use super::header::render_header;
use super::loading::render_loading;
use super::main_content::render_main_content;
use super::movie_detail::render_movie_detail;

/// Main UI rendering function that orchestrates all UI components.
pub fn ui(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();

    // Theme wash over the whole frame so light/dark applies everywhere.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    if app.loading_movies {
        render_loading(frame, app, chunks[1]);
    } else {
        render_main_content(frame, app, chunks[1]);
    }

    render_footer(frame, app, chunks[2]);

    // Overlays are drawn last so they sit on top of the grid.
    match app.current_screen {
        CurrentScreen::Detail => render_movie_detail(frame, app, frame.area()),
        CurrentScreen::Exiting => render_exit_confirm(frame, app, frame.area()),
        CurrentScreen::Main => {}
    }
}

/// Centered sub-rectangle used for modal overlays.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn render_exit_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let modal = centered_rect(36, 20, area);

    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title("Quit")
        .borders(Borders::ALL)
        .style(Style::default().bg(palette.background).fg(palette.text));

    let confirm = Paragraph::new(vec![
        Line::from(""),
        Line::from("Quit cartelera? (y/n)"),
    ])
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(confirm, modal);
}
