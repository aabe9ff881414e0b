//! Shared study-planner domain model.
//!
//! This crate owns the subject model and URL shapes used by both the page
//! controller (`study-page`) and the server that renders the pages. It has no
//! browser or runtime dependencies so it can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`subject`] | Subject record, rating scales and progress helpers |
//! | [`routes`] | Subject URL paths shared by server and client |
//! | [`form`] | Add/edit subject form validation |
//! | [`schedule`] | Fatigue-aware daily session scheduler |

pub mod form;
pub mod routes;
pub mod schedule;
pub mod subject;

pub use form::{FormError, SubjectForm, ValidSubject};
pub use schedule::{DailyPlan, Session, plan_day};
pub use subject::{Complexity, Level, Priority, Subject};
