//! Session and preference state.
//!
//! Replaces ambient browser storage (`access_token`, `user`, `theme`) with an
//! explicit repository that is loaded once and injected where needed.

mod model;
mod repository;

pub use model::{Preferences, SessionState, Theme};
pub use repository::SessionRepository;
