use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};
use throbber_widgets_tui::Throbber;

use super::ui::centered_rect;

/// Bounds of the detail modal. Shared with the input loop so a mouse click
/// outside of it closes the modal.
pub fn detail_area(area: Rect) -> Rect {
    centered_rect(72, 84, area)
}

/// Renders the movie detail modal on top of the grid.
pub fn render_movie_detail(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(movie) = app.detail.clone() else {
        return;
    };
    let palette = app.theme.palette();

    let modal = detail_area(area);
    frame.render_widget(Clear, modal);

    let outer_block = Block::default()
        .title(format!("Movie Details - {}", movie.title))
        .borders(Borders::ALL)
        .style(Style::default().bg(palette.background).fg(palette.text));

    let inner_area = outer_block.inner(modal);
    frame.render_widget(outer_block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Poster
            Constraint::Length(3), // Title info
            Constraint::Length(5), // Description
            Constraint::Length(1), // Favorite action
        ])
        .split(inner_area);

    render_poster_section(frame, chunks[0], app);
    render_title_section(frame, chunks[1], app, &movie);
    render_description_section(frame, chunks[2], app, &movie);

    let favorite_label = if app.is_favorite(&movie.imdb_id) {
        "(f) Remove from favorites"
    } else {
        "(f) Add to favorites"
    };
    let action = Paragraph::new(Line::from(Span::styled(
        favorite_label,
        Style::default()
            .fg(palette.favorite)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(action, chunks[3]);
}

/// Renders the poster: download throbber, the decoded image, or a
/// placeholder when the record has no usable poster.
fn render_poster_section(frame: &mut Frame, area: Rect, app: &mut App) {
    let palette = app.theme.palette();
    let poster_block = Block::default()
        .borders(Borders::ALL)
        .title("Poster")
        .style(Style::default().fg(palette.text));

    if app.loading_poster {
        let inner = poster_block.inner(area);
        frame.render_widget(poster_block, area);

        let throbber = Throbber::default()
            .label("Downloading poster...")
            .style(Style::default().fg(palette.text))
            .throbber_style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);

        frame.render_stateful_widget(throbber, inner, &mut app.throbber_state);
    } else if let Some(protocol) = &mut app.poster_protocol {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));

        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
    } else {
        let placeholder_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No poster available",
                Style::default().fg(palette.dim),
            )),
        ];

        let placeholder_paragraph = Paragraph::new(placeholder_text)
            .alignment(Alignment::Center)
            .block(poster_block);

        frame.render_widget(placeholder_paragraph, area);
    }
}

fn render_title_section(frame: &mut Frame, area: Rect, app: &App, movie: &crate::app::MovieRecord) {
    let palette = app.theme.palette();

    let genre = movie.genre.as_deref().unwrap_or("Unknown");
    let year = movie.year.as_deref().unwrap_or("Unknown");
    let location = movie.ubication.as_deref().unwrap_or("Unknown");

    let title_info = vec![
        Line::from(vec![
            Span::styled(
                movie.title.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(format!("({})", year), Style::default().fg(palette.dim)),
        ]),
        Line::from(vec![
            Span::styled("Genre: ", Style::default().fg(palette.dim)),
            Span::styled(genre.to_string(), Style::default().fg(palette.text)),
            Span::raw(" | "),
            Span::styled("Location: ", Style::default().fg(palette.dim)),
            Span::styled(location.to_string(), Style::default().fg(palette.text)),
        ]),
    ];

    let title_paragraph = Paragraph::new(title_info);
    frame.render_widget(title_paragraph, area);
}

fn render_description_section(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    movie: &crate::app::MovieRecord,
) {
    let palette = app.theme.palette();

    let description = movie
        .description
        .as_deref()
        .unwrap_or("No description available");

    let content = vec![
        Line::from(Span::styled(
            "Description:",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(palette.text),
        )),
    ];

    let content_paragraph = Paragraph::new(content).wrap(Wrap { trim: true });
    frame.render_widget(content_paragraph, area);
}
