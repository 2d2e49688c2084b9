//! Ratatui widgets for the garden TUI
//!
//! Custom widgets for the planner, the selector overlay and the guide.

mod help_bar;
mod plant_card;
mod plant_info_card;
mod search_bar;
mod selector_field;
mod selector_modal;
mod status_bar;
mod wrap;

pub use help_bar::{GUIDE_HINTS, HelpBar, KeyHint, PLANNER_HINTS, SELECTOR_HINTS};
pub use plant_card::{CARD_HEIGHT, CARD_WIDTH, PlantCard};
pub use plant_info_card::PlantInfoCard;
pub use search_bar::{SEARCH_PLACEHOLDER, SearchBar};
pub use selector_field::SelectorField;
pub use selector_modal::{SELECTOR_TITLE, SelectorModal};
pub use status_bar::StatusBar;
