//! Client-state reconciliation for optimistic mutations.
//!
//! A mutation is applied tentatively, tagged with a correlation id, and
//! resolved exactly once when the server answers: committed to the
//! confirmed value or reverted to the snapshot taken at begin time.

pub mod correlation_id;
pub mod reconciler;
