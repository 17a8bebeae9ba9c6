use std::error::Error;
use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Position, Rect};
use ratatui::prelude::{Backend, CrosstermBackend};
use ratatui_image::picker::Picker;

use cartelera_tui::app::{App, CurrentScreen};
use cartelera_tui::ui;

fn main() -> Result<(), Box<dyn Error>> {
    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // create app, start the initial billboard fetch, and run the loop
    let mut app = App::new();
    app.picker = Some(Picker::from_query_stdio().unwrap_or_else(|_| Picker::from_fontsize((8, 16))));
    app.fetch_catalog();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>>
where
    <B as Backend>::Error: 'static,
{
    loop {
        if app.loading_movies || app.loading_poster {
            app.throbber_state.calc_next();
        }

        terminal.draw(|f| ui::ui(f, app))?;

        // Check for messages from the background threads
        app.poll_catalog();
        app.poll_poster();

        // Poll for events with a timeout to allow UI updates
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Release {
                    // Skip events that are not KeyEventKind::Press
                    continue;
                }

                // Handle search input when searching is active
                if app.searching {
                    match key.code {
                        KeyCode::Char(c) => {
                            app.push_search_char(c);
                        }
                        KeyCode::Backspace => {
                            app.pop_search_char();
                        }
                        KeyCode::Enter => {
                            app.commit_search();
                        }
                        KeyCode::Esc => {
                            app.cancel_search();
                        }
                        _ => {}
                    }
                    continue;
                }

                match app.current_screen {
                    CurrentScreen::Main => match key.code {
                        KeyCode::Char('q') => {
                            app.current_screen = CurrentScreen::Exiting;
                        }
                        KeyCode::Char('/') => {
                            app.start_search();
                        }
                        KeyCode::Char('r') => {
                            app.fetch_catalog();
                        }
                        KeyCode::Char('t') => {
                            app.toggle_theme();
                        }
                        KeyCode::Char('u') => {
                            app.cycle_location();
                        }
                        KeyCode::Char('f') => {
                            app.toggle_selected_favorite();
                        }
                        KeyCode::Tab => {
                            app.toggle_tab();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.next_movie();
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.previous_movie();
                        }
                        KeyCode::Enter => {
                            app.open_detail();
                        }
                        _ => {}
                    },
                    CurrentScreen::Detail => match key.code {
                        KeyCode::Esc | KeyCode::Char('b') => {
                            app.close_detail();
                        }
                        KeyCode::Char('f') => {
                            app.toggle_detail_favorite();
                        }
                        KeyCode::Char('t') => {
                            app.toggle_theme();
                        }
                        KeyCode::Char('q') => {
                            app.current_screen = CurrentScreen::Exiting;
                        }
                        _ => {}
                    },
                    CurrentScreen::Exiting => match key.code {
                        KeyCode::Char('y') => {
                            return Ok(());
                        }
                        KeyCode::Char('n') | KeyCode::Esc => {
                            app.current_screen = if app.detail.is_some() {
                                CurrentScreen::Detail
                            } else {
                                CurrentScreen::Main
                            };
                        }
                        _ => {}
                    },
                }
            }
            Event::Mouse(mouse) => {
                // Clicks outside the modal bounds close it
                if app.current_screen == CurrentScreen::Detail
                    && matches!(mouse.kind, MouseEventKind::Down(_))
                {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    let modal = ui::detail_area(screen);
                    if !modal.contains(Position::new(mouse.column, mouse.row)) {
                        app.close_detail();
                    }
                }
            }
            _ => {}
        }
    }
}
