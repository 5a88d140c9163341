//! In-memory substitutes for the pearl-core contracts
//!
//! [`MemoryStore`] implements every data-provider trait over plain vectors;
//! [`RecordingView`] implements every view trait and counts what it is
//! told. Controllers run against them unchanged, so the full flows are
//! testable without a backing store or a screen.
//!
//! Controllers own their collaborators: clone a seeded store into each
//! controller under test.

pub mod seed;
pub mod store;
pub mod view;

// Re-exports
pub use seed::{Seed, store_from_json};
pub use store::MemoryStore;
pub use view::RecordingView;
