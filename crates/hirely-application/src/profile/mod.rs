//! Profile view services.
//!
//! This module contains the view model behind the profile page together
//! with the small concurrency primitives it is built from.

mod busy;
mod collaborators;
mod outcome;
mod status_board;
mod view_model;

pub use busy::{BusyFlag, BusyGuard};
pub use collaborators::{ProfileCollaborators, ProfileViewSettings};
pub use outcome::OperationOutcome;
pub use status_board::StatusBoard;
pub use view_model::{ProfileViewModel, ProfileViewSnapshot};
