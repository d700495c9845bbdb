//! Rule-based design advice.
//!
//! A design event is matched against the tip catalog by a pipeline of pure
//! predicates: dismissal, trigger, climate, hemisphere, then the tip's
//! condition.  The engine never touches [`AdvisorState`]; the caller records
//! what the user did with each tip, usually through an [`AdvisorQueue`].

mod elevation;
mod engine;
mod event;
mod state;
mod tip;

pub use elevation::estimate_relative_elevation;
pub use engine::{process_event, process_event_with};
pub use event::DesignEvent;
pub use state::{AdvisorQueue, AdvisorState, MAX_QUEUE};
pub use tip::{AdvisorTip, ClimateScope, Condition, Exposure, PositionCheck, RelativeHeight, TipAction,
    TipActionType, Trigger};
