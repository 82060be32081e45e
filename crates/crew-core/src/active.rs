//! The three-valued activity predicate.
//!
//! `is_active` columns are nullable: a row is active unless the flag is
//! explicitly `false`. `NULL` and `true` both count as active. Collapsing
//! this to a plain bool would change behavior for rows that never had the
//! flag set, so entities carry `Option<bool>` end-to-end and all code goes
//! through this predicate.

/// True unless the flag is explicitly `Some(false)`.
#[must_use]
pub const fn effectively_active(flag: Option<bool>) -> bool {
    !matches!(flag, Some(false))
}
