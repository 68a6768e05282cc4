//! Render PDDikti academic records into plain-text terminal reports.
//!
//! The crate is two layers:
//!
//! - `blocks` - shape-generic rendering primitives that turn
//!   already-fetched data into decorated text blocks (titled record
//!   dumps, numbered list projections, blob receipt lines)
//! - `catalog` - the per-endpoint report table: each [`Report`] variant
//!   binds a title, field projection, and empty-state message to one of
//!   the generic primitives, with a single dispatch point
//!
//! Data retrieval is entirely external. Callers hand in a [`Payload`]
//! (usually via `Payload::from(serde_json::Value)`) and print or log
//! the returned `String`:
//!
//! ```
//! use pddikti_report::{Payload, Report};
//!
//! let payload = Payload::from(serde_json::json!({
//!     "jumlah_mahasiswa": 1600,
//!     "jumlah_dosen": 80,
//! }));
//! let text = Report::PtRasio.render(&payload);
//! assert!(text.starts_with("--- Rasio Mahasiswa & Dosen ---"));
//! ```
//!
//! Every renderer is a pure function and total over its input: absent
//! or empty data renders the report's fixed empty-state message, a
//! missing field renders the `N/A` marker, and nothing here can fail,
//! block, or touch shared state.

pub mod blocks;
pub mod catalog;
pub mod record;

// Re-export the public surface
pub use catalog::{Mode, Report, Shape};
pub use record::{NOT_AVAILABLE, Payload, Record, RecordList};
