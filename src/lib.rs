//! Timeline Event Store
//!
//! A bidirectional windowed-pagination engine for dated events: a single
//! store owns a date-sorted collection, serves cursor-based windows in both
//! directions, anchors windows on arbitrary dates, and answers substring
//! searches, persisting the collection wholesale to a JSONL snapshot file
//! on every mutation.
//!
//! # Modules
//!
//! - `types`: core data structures (`TimelineEvent`, `Window`, `WindowQuery`)
//! - `store`: the event store - window math, search, CRUD, persistence
//! - `validation`: shared create/update payload validation
//! - `seed`: built-in dataset used when the snapshot is absent
//! - `api`: axum REST binding
//! - `utils`: atomic snapshot writes
//!
//! # Example
//!
//! ```no_run
//! use event_timeline::{EventStore, WindowQuery};
//!
//! fn main() -> Result<(), event_timeline::StoreError> {
//!     let store = EventStore::open()?;
//!     let window = store.window(WindowQuery::Centered { cursor: None }, 8)?;
//!     println!("{} events, more past: {}", window.events.len(), window.has_more_past);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use error::{StoreError, StoreResult};
pub use store::{clamp_limit, EventStore, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};
pub use types::{Direction, EventDraft, TimelineEvent, Window, WindowQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
