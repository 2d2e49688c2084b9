//! Ratatui garden application
//!
//! Owns the terminal, runs the event loop and draws the planner and guide
//! screens from [`AppState`].

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, GuideState, Screen};
use super::theme::Theme;
use super::widgets::{
    CARD_HEIGHT, CARD_WIDTH, GUIDE_HINTS, HelpBar, PLANNER_HINTS, PlantCard, PlantInfoCard,
    SELECTOR_HINTS, SearchBar, SelectorField, SelectorModal, StatusBar,
};
use crate::catalog::Catalog;
use crate::garden::{CardFields, SelectorTimings};
use crate::ui::error::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// How long to wait for input before ticking timers again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

const PLANNER_TITLE: &str = "🌱 Garden Planner";
const PLANNER_SUBTITLE: &str = "Choose the perfect plants for your garden";
const GUIDE_TITLE: &str = "📚 Plant Guide";
const GUIDE_SUBTITLE: &str = "Explore our comprehensive database of edible plants";
const EMPTY_TEXT: &str = "Start by selecting plants from the dropdown above";
const EMPTY_SUBTEXT: &str = "Choose from over 100 common edible garden plants";

/// Startup options for the TUI
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Selector focus and confirmation delays
    pub timings: SelectorTimings,
    /// How long status messages stay visible
    pub status_ttl: Duration,
    /// Minimum terminal width for the card grid layout
    pub wide_layout_min_width: u16,
    /// Screen shown first
    pub start_screen: Screen,
    /// Prefilled guide query
    pub guide_query: Option<String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            timings: SelectorTimings::default(),
            status_ttl: Duration::from_secs(3),
            wide_layout_min_width: 100,
            start_screen: Screen::Planner,
            guide_query: None,
        }
    }
}

/// Interactive garden planner and plant guide
pub struct GardenApp {
    theme: Theme,
    options: AppOptions,
}

impl GardenApp {
    /// Create a new app
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        Self {
            theme: Theme::default(),
            options,
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the TUI until the user quits
    ///
    /// The terminal is restored before returning, also when the loop fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, drawn to, or read
    /// from.
    pub fn run(&self, catalog: &Catalog) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, catalog);
        let cleanup = Self::cleanup_terminal();
        result.and(cleanup)
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Initial state for these options
    #[must_use]
    pub fn initial_state(&self, now: Instant) -> AppState {
        let state = AppState::new(self.options.timings, self.options.status_ttl, now)
            .with_screen(self.options.start_screen)
            .with_wide_layout_min_width(self.options.wide_layout_min_width);
        match &self.options.guide_query {
            Some(query) => state.with_guide_query(query.as_str()),
            None => state,
        }
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        catalog: &Catalog,
    ) -> Result<()> {
        let mut state = self.initial_state(Instant::now());
        tracing::info!(
            screen = ?state.screen,
            plants = catalog.len(),
            "starting garden TUI"
        );

        loop {
            state.tick(Instant::now());

            terminal.draw(|frame| self.render(frame, &mut state, catalog))?;

            let timeout = state.poll_timeout(Instant::now(), POLL_INTERVAL);
            let result = poll_and_handle(&mut state, catalog, timeout)?;
            if result == EventResult::Exit || state.should_exit {
                break;
            }
        }

        tracing::info!(
            selected = state.planner.selection().len(),
            "garden TUI closed"
        );
        Ok(())
    }

    /// Draw one frame
    ///
    /// Records the grid and selector geometry in `state` so key handling
    /// can page and move by rows.
    pub fn render(&self, frame: &mut Frame, state: &mut AppState, catalog: &Catalog) {
        let area = frame.area();

        let [tabs_area, content_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1), // Screen tabs
            Constraint::Min(5),    // Content
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .areas(area);

        let titles = Screen::ALL.iter().map(|screen| screen.title());
        let tabs = Tabs::new(titles)
            .select(state.screen.index())
            .style(self.theme.dimmed_style())
            .highlight_style(self.theme.cursor_style())
            .divider("│");
        frame.render_widget(tabs, tabs_area);

        match state.screen {
            Screen::Planner => self.render_planner(frame, state, catalog, content_area),
            Screen::Guide => self.render_guide(frame, state, catalog, content_area),
        }

        let summary = match state.screen {
            Screen::Planner => format!("{} selected", state.planner.selection().len()),
            Screen::Guide => format!("{} plants", catalog.len()),
        };
        let messages = state.active_messages();
        frame.render_widget(StatusBar::new(&messages, &summary, &self.theme), status_area);

        let hints = match state.screen {
            Screen::Planner if state.planner.selector().is_open() => SELECTOR_HINTS,
            Screen::Planner => PLANNER_HINTS,
            Screen::Guide => GUIDE_HINTS,
        };
        frame.render_widget(HelpBar::new(hints, &self.theme), help_area);

        if state.selector_open() {
            state.selector_page = SelectorModal::visible_rows(area).max(1);
            let selector = state.planner.selector();
            let matches = selector.filtered(catalog);
            frame.render_widget(SelectorModal::new(selector, &matches, &self.theme), area);
        }
    }

    fn render_header(&self, frame: &mut Frame, title: &str, subtitle: &str, area: Rect) {
        let header = Paragraph::new(vec![
            Line::styled(title, self.theme.heading_style()),
            Line::styled(subtitle, self.theme.dimmed_style()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn render_planner(&self, frame: &mut Frame, state: &mut AppState, catalog: &Catalog, area: Rect) {
        let [header_area, selector_area, body_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_header(frame, PLANNER_TITLE, PLANNER_SUBTITLE, header_area);
        frame.render_widget(
            SelectorField::new(state.planner.selector(), &self.theme),
            selector_area,
        );

        let selection = state.planner.selection();
        if selection.is_empty() {
            let empty = Paragraph::new(vec![
                Line::default(),
                Line::raw("🌾"),
                Line::styled(EMPTY_TEXT, self.theme.heading_style()),
                Line::styled(EMPTY_SUBTEXT, self.theme.dimmed_style()),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, body_area);
            return;
        }

        let [heading_area, grid_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(body_area);
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(
                format!("🌿 Your Selected Plants ({})", selection.len()),
                self.theme.heading_style(),
            )])),
            heading_area,
        );

        let wide = frame.area().width >= state.wide_layout_min_width;
        let (columns, card_width) = if wide {
            ((grid_area.width / CARD_WIDTH).max(1), CARD_WIDTH)
        } else {
            (1, grid_area.width)
        };
        let visible_rows = (grid_area.height / CARD_HEIGHT).max(1);

        state.grid_columns = usize::from(columns);
        state
            .planner
            .ensure_cursor_visible(usize::from(columns), usize::from(visible_rows));

        let first = state.planner.scroll_row() * usize::from(columns);
        let cursor = state.planner.card_cursor();
        let names = state.planner.selection().iter().enumerate().skip(first);

        for (slot, (index, name)) in names.take(usize::from(columns * visible_rows)).enumerate() {
            let slot = u16::try_from(slot).unwrap_or(u16::MAX);
            let x = grid_area.x + (slot % columns) * card_width;
            let y = grid_area.y + (slot / columns) * CARD_HEIGHT;
            let card_area = Rect::new(x, y, card_width, CARD_HEIGHT).intersection(grid_area);
            if card_area.is_empty() {
                break;
            }
            let card = PlantCard::new(CardFields::lookup(name, catalog), &self.theme)
                .focused(index == cursor);
            frame.render_widget(card, card_area);
        }
    }

    fn render_guide(&self, frame: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
        let [header_area, search_area, results_area, cards_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_header(frame, GUIDE_TITLE, GUIDE_SUBTITLE, header_area);
        frame.render_widget(SearchBar::new(&state.guide.query, &self.theme), search_area);

        let matches = state.guide.filtered(catalog);
        frame.render_widget(
            Paragraph::new(Line::styled(
                GuideState::results_label(matches.len()),
                self.theme.dimmed_style(),
            )),
            results_area,
        );

        let mut y = cards_area.y;
        for record in matches.iter().skip(state.guide.scroll) {
            if y >= cards_area.bottom() {
                break;
            }
            let fields = CardFields::from_record(record);
            let height = PlantInfoCard::height(&fields, cards_area.width);
            let card_area =
                Rect::new(cards_area.x, y, cards_area.width, height).intersection(cards_area);
            frame.render_widget(PlantInfoCard::new(fields, &self.theme), card_area);
            y = y.saturating_add(height);
        }
    }
}
