//! Data types for the timeline engine

mod event;
mod window;

pub use event::{EventDraft, TimelineEvent};
pub use window::{Direction, Window, WindowQuery};
