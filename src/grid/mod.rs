//! The layout/interaction engine for the weekly time grid.
//!
//! Everything in here is pure and synchronous apart from [`now::NowTicker`],
//! which owns the single piece of background work (the repaint timer).
//! The rendering layer in `ui_egui` consumes these modules; nothing here
//! touches egui.

pub mod axis;
pub mod buckets;
pub mod error;
pub mod lanes;
pub mod layout;
pub mod now;
pub mod selection;
pub mod time_math;

pub use axis::{DayColumn, TimeAxis};
pub use error::GridError;
pub use layout::{layout_week, LayoutRect};
pub use now::{now_position, NowPosition, NowTicker};
pub use selection::{ClickOutcome, ClickRouting, InspectorStyle, SelectionController};
pub use time_math::ClockTime;
