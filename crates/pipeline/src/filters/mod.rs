//! Filter implementations for the dashboard views.
//!
//! Both filters match on the raw `stars` text. They differ only in what an
//! empty query means, see each type.

pub mod actor;

// Re-export for convenience
pub use actor::{filter_by_actor, titles_by_actor, ActorFilter, CastContainsFilter, CastRow};
