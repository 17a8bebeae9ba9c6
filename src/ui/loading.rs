use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders},
};
use throbber_widgets_tui::Throbber;

/// Renders the loading screen shown while the billboard fetch is in flight.
pub fn render_loading(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.theme.palette();

    let loading_block = Block::default()
        .title("Loading")
        .borders(Borders::ALL)
        .style(Style::default().fg(palette.text));

    let inner = loading_block.inner(area);
    frame.render_widget(loading_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let throbber = Throbber::default()
        .label("Fetching the billboard...")
        .style(Style::default().fg(palette.text))
        .throbber_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(throbber_widgets_tui::WhichUse::Spin);

    frame.render_stateful_widget(throbber, chunks[1], &mut app.throbber_state);
}
