//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events, mapping them to planner, selector and
//! guide actions. Handlers take the current instant explicitly so deferred
//! selector timers can be tested without a terminal.

use super::state::{AppState, Screen};
use crate::catalog::Catalog;
use crate::search::QueryText;
use crate::ui::output::MessageLevel;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};

/// Cards skipped by PageUp/PageDown in the guide
const GUIDE_PAGE: isize = 5;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the application
    Exit,
    /// No action taken
    Ignored,
}

/// Handle a key press
pub fn handle_key(
    state: &mut AppState,
    catalog: &Catalog,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.exit();
            return EventResult::Exit;
        }
        (KeyCode::Tab, _) => {
            state.next_screen();
            return EventResult::Continue;
        }
        (KeyCode::BackTab, _) => {
            state.prev_screen();
            return EventResult::Continue;
        }
        _ => {}
    }

    let result = match state.screen {
        Screen::Planner if state.planner.selector().is_open() => {
            handle_selector_key(state, catalog, key, now)
        }
        Screen::Planner => handle_planner_key(state, key, now),
        Screen::Guide => handle_guide_key(state, catalog, key),
    };

    if result == EventResult::Exit {
        state.exit();
    }
    result
}

/// Handle keys on the planner while the selector is closed
fn handle_planner_key(state: &mut AppState, key: KeyEvent, now: Instant) -> EventResult {
    let columns = isize::try_from(state.grid_columns.max(1)).unwrap_or(1);

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => EventResult::Exit,

        // Open the selector
        KeyCode::Enter | KeyCode::Char('a' | '/' | ' ') => {
            state.planner.selector_mut().open(now);
            EventResult::Continue
        }

        // Card navigation
        KeyCode::Left | KeyCode::Char('h') => move_card_cursor(state, -1),
        KeyCode::Right | KeyCode::Char('l') => move_card_cursor(state, 1),
        KeyCode::Up | KeyCode::Char('k') => move_card_cursor(state, -columns),
        KeyCode::Down | KeyCode::Char('j') => move_card_cursor(state, columns),
        KeyCode::Home => move_card_cursor(state, isize::MIN),
        KeyCode::End => move_card_cursor(state, isize::MAX),

        // Remove the focused card
        KeyCode::Delete | KeyCode::Char('d' | 'x') => match state.planner.remove_focused() {
            Some(name) => {
                state.add_message(MessageLevel::Info, format!("Removed {name}"));
                EventResult::Continue
            }
            None => EventResult::Ignored,
        },

        _ => EventResult::Ignored,
    }
}

fn move_card_cursor(state: &mut AppState, delta: isize) -> EventResult {
    if state.planner.selection().is_empty() {
        return EventResult::Ignored;
    }
    state.planner.move_cursor(delta);
    EventResult::Continue
}

/// Handle keys while the selector overlay is open
fn handle_selector_key(
    state: &mut AppState,
    catalog: &Catalog,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    if key.code == KeyCode::Enter {
        return match state.planner.confirm_selection(catalog, now) {
            Some(outcome) if outcome.added => {
                state.add_message(
                    MessageLevel::Success,
                    format!("Added {} to your garden", outcome.name),
                );
                EventResult::Continue
            }
            Some(outcome) => {
                state.add_message(
                    MessageLevel::Warning,
                    format!("{} is already in your garden", outcome.name),
                );
                EventResult::Continue
            }
            None => EventResult::Ignored,
        };
    }

    let matches = state.planner.selector().filtered(catalog).len();
    let page = state.selector_page.max(1);
    let selector = state.planner.selector_mut();

    let changed = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            selector.close();
            true
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k' | 'p'), KeyModifiers::CONTROL) => {
            selector.highlight_prev();
            true
        }
        (KeyCode::Down, _) | (KeyCode::Char('j' | 'n'), KeyModifiers::CONTROL) => {
            selector.highlight_next(matches);
            true
        }
        (KeyCode::PageUp, _) => {
            selector.highlight_page(matches, page, false);
            true
        }
        (KeyCode::PageDown, _) => {
            selector.highlight_page(matches, page, true);
            true
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => selector.clear_query(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => selector.delete_word(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => selector.input_char(c),
        (KeyCode::Backspace, _) => selector.backspace(),
        (KeyCode::Left, _) => {
            selector.query_cursor_left();
            true
        }
        (KeyCode::Right, _) => {
            selector.query_cursor_right();
            true
        }

        _ => false,
    };

    if changed {
        EventResult::Continue
    } else {
        EventResult::Ignored
    }
}

/// Handle keys on the guide screen
fn handle_guide_key(state: &mut AppState, catalog: &Catalog, key: KeyEvent) -> EventResult {
    let changed = match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            if state.guide.query.is_empty() {
                return EventResult::Exit;
            }
            state.guide.edit(QueryText::clear)
        }

        // Scrolling
        (KeyCode::Up, _) => scroll_guide(state, catalog, -1),
        (KeyCode::Down, _) => scroll_guide(state, catalog, 1),
        (KeyCode::PageUp, _) => scroll_guide(state, catalog, -GUIDE_PAGE),
        (KeyCode::PageDown, _) => scroll_guide(state, catalog, GUIDE_PAGE),
        (KeyCode::Home, _) => {
            state.guide.scroll = 0;
            true
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => state.guide.edit(QueryText::clear),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => state.guide.edit(QueryText::delete_word),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => state.guide.edit(|query| {
            query.push(c);
            true
        }),
        (KeyCode::Backspace, _) => state.guide.edit(QueryText::backspace),
        (KeyCode::Delete, _) => state.guide.edit(QueryText::delete),
        (KeyCode::Left, _) => {
            state.guide.query.cursor_left();
            true
        }
        (KeyCode::Right, _) => {
            state.guide.query.cursor_right();
            true
        }

        _ => false,
    };

    if changed {
        EventResult::Continue
    } else {
        EventResult::Ignored
    }
}

fn scroll_guide(state: &mut AppState, catalog: &Catalog, delta: isize) -> bool {
    let matches = state.guide.filtered(catalog).len();
    let before = state.guide.scroll;
    state.guide.scroll_by(delta, matches);
    state.guide.scroll != before
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, catalog: &Catalog, mouse: MouseEvent) -> EventResult {
    let delta = match mouse.kind {
        MouseEventKind::ScrollUp => -1,
        MouseEventKind::ScrollDown => 1,
        _ => return EventResult::Ignored,
    };

    match state.screen {
        Screen::Guide => {
            scroll_guide(state, catalog, delta);
        }
        Screen::Planner if state.planner.selector().is_open() => {
            let matches = state.planner.selector().filtered(catalog).len();
            let selector = state.planner.selector_mut();
            if delta < 0 {
                selector.highlight_prev();
            } else {
                selector.highlight_next(matches);
            }
        }
        Screen::Planner => {
            let columns = isize::try_from(state.grid_columns.max(1)).unwrap_or(1);
            move_card_cursor(state, delta * columns);
        }
    }
    EventResult::Continue
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut AppState,
    catalog: &Catalog,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, catalog, key, Instant::now()),
        Event::Mouse(mouse) => handle_mouse(state, catalog, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::SelectorTimings;
    use crate::testing::sample_catalog;

    fn make_state(now: Instant) -> AppState {
        AppState::new(SelectorTimings::default(), Duration::from_secs(3), now)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut AppState, catalog: &Catalog, text: &str, now: Instant) {
        for c in text.chars() {
            handle_key(state, catalog, press(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_open_focus_and_pick() {
        let catalog = sample_catalog();
        let start = Instant::now();
        let mut state = make_state(start);

        let result = handle_key(&mut state, &catalog, press(KeyCode::Enter), start);
        assert_eq!(result, EventResult::Continue);
        assert!(state.selector_open());

        // Typed before the search field has focus
        let result = handle_key(&mut state, &catalog, press(KeyCode::Char('x')), start);
        assert_eq!(result, EventResult::Ignored);
        assert!(state.planner.selector().query().is_empty());

        let focused = start + Duration::from_millis(100);
        state.tick(focused);
        type_text(&mut state, &catalog, "bas", focused);
        assert_eq!(state.planner.selector().query().as_str(), "bas");

        let result = handle_key(&mut state, &catalog, press(KeyCode::Enter), focused);
        assert_eq!(result, EventResult::Continue);
        assert!(!state.selector_open());
        assert_eq!(state.planner.selection().as_slice(), ["Basil"]);
        assert_eq!(state.planner.selector().label(), "Basil");
        assert_eq!(state.active_messages()[0].text, "Added Basil to your garden");

        state.tick(focused + Duration::from_millis(500));
        assert!(state.planner.selector().confirmation().is_none());
    }

    #[test]
    fn test_duplicate_pick_reports_warning() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = AppState::new(
            SelectorTimings {
                focus_delay: Duration::ZERO,
                confirmation: Duration::from_millis(500),
            },
            Duration::from_secs(3),
            now,
        );

        for _ in 0..2 {
            handle_key(&mut state, &catalog, press(KeyCode::Char('a')), now);
            type_text(&mut state, &catalog, "mint", now);
            handle_key(&mut state, &catalog, press(KeyCode::Enter), now);
        }

        assert_eq!(state.planner.selection().len(), 1);
        let last = state.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Warning);
        assert_eq!(last.text, "Mint is already in your garden");
    }

    #[test]
    fn test_pick_with_no_matches_is_ignored() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = make_state(now);
        handle_key(&mut state, &catalog, press(KeyCode::Char('/')), now);
        state.tick(now + Duration::from_millis(100));
        type_text(&mut state, &catalog, "zzz", now);

        let result = handle_key(&mut state, &catalog, press(KeyCode::Enter), now);
        assert_eq!(result, EventResult::Ignored);
        assert!(state.selector_open());
        assert!(state.planner.selection().is_empty());
    }

    #[test]
    fn test_escape_closes_selector_then_exits() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = make_state(now);
        handle_key(&mut state, &catalog, press(KeyCode::Enter), now);

        let result = handle_key(&mut state, &catalog, press(KeyCode::Esc), now);
        assert_eq!(result, EventResult::Continue);
        assert!(!state.selector_open());
        assert!(!state.should_exit);

        let result = handle_key(&mut state, &catalog, press(KeyCode::Esc), now);
        assert_eq!(result, EventResult::Exit);
        assert!(state.should_exit);
    }

    #[test]
    fn test_remove_focused_card() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = make_state(now);
        state.planner.on_plant_select("Carrot");
        state.planner.on_plant_select("Kale");

        let result = handle_key(&mut state, &catalog, press(KeyCode::Right), now);
        assert_eq!(result, EventResult::Continue);
        assert_eq!(state.planner.focused_plant(), Some("Kale"));

        handle_key(&mut state, &catalog, press(KeyCode::Char('d')), now);
        assert_eq!(state.planner.selection().as_slice(), ["Carrot"]);
        assert_eq!(state.planner.focused_plant(), Some("Carrot"));
        assert_eq!(state.messages.last().unwrap().text, "Removed Kale");

        handle_key(&mut state, &catalog, press(KeyCode::Delete), now);
        assert!(state.planner.selection().is_empty());
        let result = handle_key(&mut state, &catalog, press(KeyCode::Char('x')), now);
        assert_eq!(result, EventResult::Ignored);
    }

    #[test]
    fn test_guide_query_and_escape() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = make_state(now).with_screen(Screen::Guide);

        // 'q' is text on the guide, not quit
        type_text(&mut state, &catalog, "qa", now);
        assert_eq!(state.guide.query.as_str(), "qa");
        assert!(!state.should_exit);

        let result = handle_key(&mut state, &catalog, press(KeyCode::Esc), now);
        assert_eq!(result, EventResult::Continue);
        assert!(state.guide.query.is_empty());

        let result = handle_key(&mut state, &catalog, press(KeyCode::Esc), now);
        assert_eq!(result, EventResult::Exit);
    }

    #[test]
    fn test_guide_scroll_is_clamped() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = make_state(now).with_screen(Screen::Guide);

        handle_key(&mut state, &catalog, press(KeyCode::PageDown), now);
        assert_eq!(state.guide.scroll, catalog.len() - 1);

        let result = handle_key(&mut state, &catalog, press(KeyCode::Down), now);
        assert_eq!(result, EventResult::Ignored);

        handle_key(&mut state, &catalog, press(KeyCode::Up), now);
        assert_eq!(state.guide.scroll, catalog.len() - 2);
    }

    #[test]
    fn test_tab_switches_screens() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = make_state(now);

        handle_key(&mut state, &catalog, press(KeyCode::Tab), now);
        assert_eq!(state.screen, Screen::Guide);
        handle_key(&mut state, &catalog, press(KeyCode::BackTab), now);
        assert_eq!(state.screen, Screen::Planner);
    }

    #[test]
    fn test_ctrl_c_exits_anywhere() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = make_state(now).with_screen(Screen::Guide);

        let result = handle_key(
            &mut state,
            &catalog,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now,
        );
        assert_eq!(result, EventResult::Exit);
        assert!(state.should_exit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut state = make_state(now);
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;

        assert_eq!(handle_key(&mut state, &catalog, key, now), EventResult::Ignored);
        assert!(!state.selector_open());
    }
}
