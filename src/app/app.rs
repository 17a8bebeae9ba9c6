use std::path::PathBuf;
use std::sync::mpsc;

use chrono::{DateTime, Local};
use ratatui::widgets::ListState;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use throbber_widgets_tui::ThrobberState;

use crate::app::catalog::{self, CatalogFetchMessage, MovieRecord};
use crate::app::filter;
use crate::app::poster::{self, PosterMessage};
use crate::app::storage;
use crate::app::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Billboard,
    Favorites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Detail,
    Exiting,
}

/// Application state. All mutation funnels through the named operations
/// below; the UI is a pull-based projection redrawn after every event, so a
/// mutation is visible on the very next frame.
pub struct App {
    pub catalog: Vec<MovieRecord>,
    pub favorites: Vec<MovieRecord>,
    pub locations: Vec<String>,

    pub current_screen: CurrentScreen,
    pub active_tab: Tab,
    pub searching: bool,
    pub search_term: String,
    pub location_filter: String,
    pub theme: ThemeMode,

    pub loading_movies: bool,
    pub fetch_error: Option<String>,
    pub catalog_receiver: Option<mpsc::Receiver<CatalogFetchMessage>>,
    pub last_updated: Option<DateTime<Local>>,

    pub detail: Option<MovieRecord>,
    pub poster_receiver: Option<mpsc::Receiver<PosterMessage>>,
    pub poster_protocol: Option<StatefulProtocol>,
    pub loading_poster: bool,
    pub picker: Option<Picker>,

    pub selected_index: usize,
    pub list_state: ListState,
    pub throbber_state: ThrobberState,

    favorites_path: PathBuf,
    theme_path: PathBuf,
}

impl App {
    pub fn new() -> Self {
        Self::with_data_dir(storage::default_data_dir())
    }

    /// Builds an app rooted at the given data directory. Favorites and the
    /// theme preference are loaded eagerly; both fail safe.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let favorites_path = data_dir.join("favorites.json");
        let theme_path = data_dir.join("theme");

        let favorites = storage::load_favorites(&favorites_path);
        let theme = storage::load_theme(&theme_path);

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            catalog: Vec::new(),
            favorites,
            locations: Vec::new(),
            current_screen: CurrentScreen::Main,
            active_tab: Tab::Billboard,
            searching: false,
            search_term: String::new(),
            location_filter: String::new(),
            theme,
            loading_movies: false,
            fetch_error: None,
            catalog_receiver: None,
            last_updated: None,
            detail: None,
            poster_receiver: None,
            poster_protocol: None,
            loading_poster: false,
            picker: None,
            selected_index: 0,
            list_state,
            throbber_state: ThrobberState::default(),
            favorites_path,
            theme_path,
        }
    }

    // --- Catalog fetch ---

    /// Kicks off the single background fetch. Ignored while a fetch is
    /// already in flight, so two fetches never overlap.
    pub fn fetch_catalog(&mut self) {
        if self.loading_movies {
            return;
        }

        let (sender, receiver) = mpsc::channel();
        self.catalog_receiver = Some(receiver);
        self.loading_movies = true;
        self.fetch_error = None;

        std::thread::spawn(move || {
            catalog::fetch_catalog_threaded(sender);
        });
    }

    /// Drains the fetch channel; called once per event-loop iteration.
    pub fn poll_catalog(&mut self) {
        let message = match &self.catalog_receiver {
            Some(receiver) => receiver.try_recv().ok(),
            None => None,
        };

        match message {
            Some(CatalogFetchMessage::Complete(movies)) => self.set_catalog(movies),
            Some(CatalogFetchMessage::Error(error)) => self.fail_fetch(error),
            None => {}
        }
    }

    /// Replaces the catalog and repopulates the location selector. The
    /// loading indicator is cleared on this path and on `fail_fetch`.
    pub fn set_catalog(&mut self, movies: Vec<MovieRecord>) {
        self.catalog = movies;
        self.locations = filter::distinct_locations(&self.catalog);
        if !self.location_filter.is_empty() && !self.locations.contains(&self.location_filter) {
            self.location_filter.clear();
        }
        self.fetch_error = None;
        self.loading_movies = false;
        self.catalog_receiver = None;
        self.last_updated = Some(Local::now());
        self.reset_selection();
    }

    pub fn fail_fetch(&mut self, message: String) {
        self.fetch_error = Some(message);
        self.loading_movies = false;
        self.catalog_receiver = None;
    }

    // --- Derived views ---

    /// The list the grid shows right now: active tab's source filtered by
    /// the current query and location.
    pub fn visible_movies(&self) -> Vec<MovieRecord> {
        let source = match self.active_tab {
            Tab::Billboard => &self.catalog,
            Tab::Favorites => &self.favorites,
        };
        filter::filter_movies(source, &self.search_term, &self.location_filter)
    }

    pub fn is_favorite(&self, imdb_id: &str) -> bool {
        self.favorites.iter().any(|movie| movie.imdb_id == imdb_id)
    }

    pub fn selected_movie(&self) -> Option<MovieRecord> {
        self.visible_movies().get(self.selected_index).cloned()
    }

    // --- Favorites ---

    /// Removes the record if already favorited (matched by `imdbID`),
    /// otherwise appends it, then persists the list synchronously. A write
    /// failure is swallowed; favorites remain usable in memory.
    pub fn toggle_favorite(&mut self, movie: &MovieRecord) {
        let exists = self.is_favorite(&movie.imdb_id);
        if exists {
            self.favorites.retain(|favorite| favorite.imdb_id != movie.imdb_id);
        } else {
            self.favorites.push(movie.clone());
        }
        let _ = storage::save_favorites(&self.favorites_path, &self.favorites);
        self.clamp_selection();
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(movie) = self.selected_movie() {
            self.toggle_favorite(&movie);
        }
    }

    pub fn toggle_detail_favorite(&mut self) {
        if let Some(movie) = self.detail.clone() {
            self.toggle_favorite(&movie);
        }
    }

    // --- Tabs, search, location ---

    /// Switches tabs. The query and location filter are intentionally kept;
    /// only the selection resets.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.reset_selection();
        }
    }

    pub fn toggle_tab(&mut self) {
        match self.active_tab {
            Tab::Billboard => self.set_tab(Tab::Favorites),
            Tab::Favorites => self.set_tab(Tab::Billboard),
        }
    }

    pub fn start_search(&mut self) {
        self.searching = true;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
        self.reset_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
        self.reset_selection();
    }

    pub fn commit_search(&mut self) {
        self.searching = false;
    }

    pub fn cancel_search(&mut self) {
        self.searching = false;
        self.search_term.clear();
        self.reset_selection();
    }

    /// Advances the location selector: all locations, then each distinct
    /// label in ascending order, wrapping back to all.
    pub fn cycle_location(&mut self) {
        if self.locations.is_empty() {
            self.location_filter.clear();
            return;
        }

        let next = match self.locations.iter().position(|l| *l == self.location_filter) {
            None => Some(0),
            Some(index) if index + 1 < self.locations.len() => Some(index + 1),
            Some(_) => None,
        };
        self.location_filter = match next {
            Some(index) => self.locations[index].clone(),
            None => String::new(),
        };
        self.reset_selection();
    }

    // --- Theme ---

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let _ = storage::save_theme(&self.theme_path, self.theme);
    }

    // --- Detail modal ---

    /// Opens the detail overlay for the selected record and starts the
    /// poster download if the record carries a poster URL.
    pub fn open_detail(&mut self) {
        let Some(movie) = self.selected_movie() else {
            return;
        };

        self.poster_protocol = None;
        self.poster_receiver = None;
        self.loading_poster = false;

        if self.picker.is_some() {
            if let Some(url) = movie.poster.clone() {
                if !url.is_empty() {
                    let (sender, receiver) = mpsc::channel();
                    self.poster_receiver = Some(receiver);
                    self.loading_poster = true;
                    let imdb_id = movie.imdb_id.clone();
                    std::thread::spawn(move || {
                        poster::download_poster_threaded(url, imdb_id, sender);
                    });
                }
            }
        }

        self.detail = Some(movie);
        self.current_screen = CurrentScreen::Detail;
    }

    /// Single close operation shared by Esc, the explicit close key, and a
    /// mouse click outside the modal. Idempotent: a no-op when no modal is
    /// open.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.poster_receiver = None;
        self.poster_protocol = None;
        self.loading_poster = false;
        if self.current_screen == CurrentScreen::Detail {
            self.current_screen = CurrentScreen::Main;
        }
    }

    /// Drains the poster channel. Results for a record the modal has moved
    /// away from are dropped.
    pub fn poll_poster(&mut self) {
        let message = match &self.poster_receiver {
            Some(receiver) => receiver.try_recv().ok(),
            None => None,
        };

        match message {
            Some(PosterMessage::Ready { imdb_id, image }) => {
                self.loading_poster = false;
                self.poster_receiver = None;
                let current = self
                    .detail
                    .as_ref()
                    .is_some_and(|movie| movie.imdb_id == imdb_id);
                if current {
                    if let Some(picker) = &mut self.picker {
                        self.poster_protocol = Some(picker.new_resize_protocol(*image));
                    }
                }
            }
            Some(PosterMessage::Failed { .. }) => {
                self.loading_poster = false;
                self.poster_receiver = None;
            }
            None => {}
        }
    }

    // --- Selection ---

    pub fn next_movie(&mut self) {
        let count = self.visible_movies().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
        self.list_state.select(Some(self.selected_index));
    }

    pub fn previous_movie(&mut self) {
        let count = self.visible_movies().len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        if self.visible_movies().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_movies().len();
        if count == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= count {
                self.selected_index = count - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn movie(id: &str, title: &str, ubication: Option<&str>) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            poster: None,
            genre: Some("Sci-Fi".to_string()),
            year: Some("2021".to_string()),
            ubication: ubication.map(str::to_string),
            description: None,
            imdb_id: id.to_string(),
        }
    }

    fn app_with_catalog(dir: &std::path::Path) -> App {
        let mut app = App::with_data_dir(dir.to_path_buf());
        app.set_catalog(vec![
            movie("tt1", "Dune", Some("North")),
            movie("tt2", "Arrival", Some("South")),
            movie("tt3", "Alien", None),
        ]);
        app
    }

    #[test]
    fn toggle_favorite_twice_restores_membership_and_persists() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());
        let dune = app.catalog[0].clone();
        let favorites_path = dir.path().join("favorites.json");

        app.toggle_favorite(&dune);
        assert!(app.is_favorite("tt1"));
        assert_eq!(storage::load_favorites(&favorites_path).len(), 1);

        app.toggle_favorite(&dune);
        assert!(!app.is_favorite("tt1"));
        assert!(storage::load_favorites(&favorites_path).is_empty());
    }

    #[test]
    fn favorites_never_hold_duplicate_identifiers() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());
        let dune = app.catalog[0].clone();
        let arrival = app.catalog[1].clone();

        app.toggle_favorite(&dune);
        app.toggle_favorite(&arrival);
        app.toggle_favorite(&dune);
        app.toggle_favorite(&dune);
        app.toggle_favorite(&arrival);
        app.toggle_favorite(&arrival);
        app.toggle_favorite(&dune);

        let mut ids: Vec<&str> = app.favorites.iter().map(|m| m.imdb_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), app.favorites.len());
    }

    #[test]
    fn visible_list_follows_active_tab() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());
        let arrival = app.catalog[1].clone();
        app.toggle_favorite(&arrival);

        assert_eq!(app.visible_movies().len(), 3);
        app.set_tab(Tab::Favorites);
        let favorites = app.visible_movies();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].title, "Arrival");
    }

    #[test]
    fn tab_switch_keeps_query_and_location() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());
        let dune = app.catalog[0].clone();
        let arrival = app.catalog[1].clone();
        app.toggle_favorite(&dune);
        app.toggle_favorite(&arrival);

        app.search_term = "du".to_string();
        app.set_tab(Tab::Favorites);

        assert_eq!(app.search_term, "du");
        let visible = app.visible_movies();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Dune");

        app.location_filter = "South".to_string();
        app.search_term.clear();
        let visible = app.visible_movies();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Arrival");
    }

    #[test]
    fn set_catalog_populates_sorted_locations_and_clears_error() {
        let dir = tempdir().unwrap();
        let mut app = App::with_data_dir(dir.path().to_path_buf());
        app.fail_fetch("Failed to load the billboard. Status code: 500".to_string());
        assert!(app.fetch_error.is_some());
        assert!(!app.loading_movies);

        app.set_catalog(vec![
            movie("tt2", "Arrival", Some("South")),
            movie("tt1", "Dune", Some("North")),
        ]);
        assert_eq!(app.locations, vec!["North", "South"]);
        assert!(app.fetch_error.is_none());
        assert!(app.last_updated.is_some());
    }

    #[test]
    fn stale_location_filter_is_cleared_on_refresh() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());
        app.location_filter = "North".to_string();

        app.set_catalog(vec![movie("tt9", "Heat", Some("East"))]);
        assert!(app.location_filter.is_empty());
    }

    #[test]
    fn cycle_location_walks_all_then_each_label() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());

        assert_eq!(app.location_filter, "");
        app.cycle_location();
        assert_eq!(app.location_filter, "North");
        app.cycle_location();
        assert_eq!(app.location_filter, "South");
        app.cycle_location();
        assert_eq!(app.location_filter, "");
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());

        app.next_movie();
        app.next_movie();
        assert_eq!(app.selected_index, 2);
        app.next_movie();
        assert_eq!(app.selected_index, 0);
        app.previous_movie();
        assert_eq!(app.selected_index, 2);

        // Narrowing the visible list pulls the selection back in range.
        app.push_search_char('d');
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn removing_last_favorite_clamps_selection() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());
        let dune = app.catalog[0].clone();
        let arrival = app.catalog[1].clone();
        app.toggle_favorite(&dune);
        app.toggle_favorite(&arrival);
        app.set_tab(Tab::Favorites);

        app.next_movie();
        assert_eq!(app.selected_index, 1);
        app.toggle_selected_favorite();
        assert_eq!(app.selected_index, 0);
        app.toggle_selected_favorite();
        assert!(app.visible_movies().is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn open_and_close_detail_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());

        app.open_detail();
        assert_eq!(app.current_screen, CurrentScreen::Detail);
        assert_eq!(app.detail.as_ref().unwrap().title, "Dune");

        app.close_detail();
        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert!(app.detail.is_none());

        // Closing again is a no-op.
        app.close_detail();
        assert_eq!(app.current_screen, CurrentScreen::Main);
    }

    #[test]
    fn detail_favorite_toggle_updates_membership_without_closing() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());
        app.open_detail();

        app.toggle_detail_favorite();
        assert!(app.is_favorite("tt1"));
        assert_eq!(app.current_screen, CurrentScreen::Detail);

        app.toggle_detail_favorite();
        assert!(!app.is_favorite("tt1"));
        assert_eq!(app.current_screen, CurrentScreen::Detail);
    }

    #[test]
    fn fetch_guard_blocks_overlapping_fetches() {
        let dir = tempdir().unwrap();
        let mut app = App::with_data_dir(dir.path().to_path_buf());
        app.loading_movies = true;

        app.fetch_catalog();
        assert!(app.catalog_receiver.is_none());
    }

    #[test]
    fn cancel_search_clears_term_and_commit_keeps_it() {
        let dir = tempdir().unwrap();
        let mut app = app_with_catalog(dir.path());

        app.start_search();
        app.push_search_char('d');
        app.push_search_char('u');
        app.commit_search();
        assert!(!app.searching);
        assert_eq!(app.search_term, "du");

        app.start_search();
        app.cancel_search();
        assert!(!app.searching);
        assert!(app.search_term.is_empty());
    }
}
