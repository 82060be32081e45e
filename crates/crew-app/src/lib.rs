//! # crew-app
//!
//! The client-side core of crewdeck: given a resolved viewer identity and a
//! store handle, the [`Workbench`](workbench::Workbench) maintains the
//! transient views a host UI renders — the visible project list, the active
//! org directory, per-project membership sets, and a cumulative message
//! buffer — and performs the membership and project mutations.
//!
//! Role checks here are a UX convenience; the store deployment's row-level
//! access control remains the security boundary.

pub mod candidates;
pub mod messages;
pub mod visibility;
pub mod workbench;

pub use workbench::Workbench;
