//! movie-ui - Shared UI types and components for the movie app
//!
//! Contains display types and pure view components used by both the static
//! renderer and any app shell that mounts them.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
