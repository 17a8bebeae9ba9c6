use crate::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    if app.searching {
        "type to filter, (Enter) keep, (Esc) clear"
    } else if app.loading_movies {
        "Loading the billboard... (q) to quit"
    } else {
        match app.current_screen {
            CurrentScreen::Main => {
                if app.catalog.is_empty() && app.fetch_error.is_none() {
                    "(r) load billboard, (q) quit"
                } else {
                    "(↑↓/jk) scroll, (Enter) details, (f) favorite, (Tab) tab, (/) search, (u) location, (t) theme, (r) refresh, (q) quit"
                }
            }
            CurrentScreen::Detail => "(f) toggle favorite, (Esc/b) close, (t) theme, (q) quit",
            CurrentScreen::Exiting => "(y) to confirm, (n) to cancel",
        }
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(palette.text));

    let instruction_text = get_instruction_text(app);
    let bottom = Paragraph::new(Text::styled(
        instruction_text,
        Style::default().fg(palette.dim),
    ))
    .block(bottom_block);

    frame.render_widget(bottom, area);
}
