//! Garden planning state
//!
//! Everything the planner screen owns lives here, independent of the
//! terminal: the selection list, the plant selector state machine, the
//! deferred timers that drive its cosmetic delays, and card field
//! resolution with fallbacks for unknown plants.

pub mod card;
pub mod planner;
pub mod selection;
pub mod selector;
pub mod timer;

pub use card::{CardFields, FALLBACK_EMOJI, UNKNOWN_CATEGORY};
pub use planner::{Planner, SelectOutcome};
pub use selection::SelectionSet;
pub use selector::{PLACEHOLDER, PlantSelector, SelectorState, SelectorTimings};
pub use timer::TimerQueue;
