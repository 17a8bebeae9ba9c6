use crate::app::{App, Tab};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
};

/// Renders the header with the app title and the two view tabs.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let title = match &app.last_updated {
        Some(at) => format!("Cartelera (updated {})", at.format("%H:%M")),
        None => "Cartelera".to_string(),
    };

    let selected = match app.active_tab {
        Tab::Billboard => 0,
        Tab::Favorites => 1,
    };

    let tabs = Tabs::new(vec!["Billboard", "Favorites"])
        .select(selected)
        .style(Style::default().fg(palette.dim))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(palette.text)),
        );

    frame.render_widget(tabs, area);
}
