use crate::app::{App, Tab};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use tui_big_text::{BigText, PixelSize};

/// Renders the card grid, the empty-state placeholder, or the fetch error.
pub fn render_main_content(frame: &mut Frame, app: &mut App, area: Rect) {
    if let Some(message) = app.fetch_error.clone() {
        render_fetch_error(frame, app, area, &message);
        return;
    }

    let palette = app.theme.palette();
    let movies = app.visible_movies();
    let title = list_title(app, movies.len());

    if movies.is_empty() {
        let hint = if app.catalog.is_empty()
            && app.active_tab == Tab::Billboard
            && app.last_updated.is_none()
        {
            "Press (r) to load the billboard"
        } else {
            "No movies found."
        };

        let empty = Paragraph::new(vec![Line::from(""), Line::from(hint)])
            .style(Style::default().fg(palette.dim))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .style(Style::default().fg(palette.text)),
            );
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = movies
        .iter()
        .map(|movie| {
            let mut title_spans = Vec::new();
            if app.is_favorite(&movie.imdb_id) {
                title_spans.push(Span::styled("★ ", Style::default().fg(palette.favorite)));
            }
            title_spans.push(Span::styled(
                movie.title.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ));

            let genre = movie.genre.clone().unwrap_or_else(|| "Unknown".to_string());
            let content = vec![
                Line::from(title_spans),
                Line::from(Span::styled(
                    format!("  Genre: {}", genre),
                    Style::default().fg(palette.dim),
                )),
            ];

            ListItem::new(content)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(palette.text)),
        )
        .highlight_style(
            Style::default()
                .bg(palette.highlight)
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Block title summarizing the tab, count, and active filters.
fn list_title(app: &App, count: usize) -> String {
    let tab = match app.active_tab {
        Tab::Billboard => "Billboard",
        Tab::Favorites => "Favorites",
    };

    let mut title = format!("{} ({})", tab, count);
    if app.searching {
        title.push_str(&format!(" | search: \"{}▌\"", app.search_term));
    } else if !app.search_term.is_empty() {
        title.push_str(&format!(" | search: \"{}\"", app.search_term));
    }
    if !app.location_filter.is_empty() {
        title.push_str(&format!(" | location: {}", app.location_filter));
    }
    title
}

/// Renders the fetch failure in place of the grid.
fn render_fetch_error(frame: &mut Frame, app: &App, area: Rect, message: &str) {
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Big text
            Constraint::Min(3),    // Message
        ])
        .split(area);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )
        .lines(vec!["ERROR".into()])
        .alignment(Alignment::Center)
        .build();

    frame.render_widget(big_text, chunks[0]);

    let details = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.error),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press (r) to retry, (q) to quit",
            Style::default().fg(palette.dim),
        )),
    ];

    let details_paragraph = Paragraph::new(details)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(palette.text)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(details_paragraph, chunks[1]);
}
