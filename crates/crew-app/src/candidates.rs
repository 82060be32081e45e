//! Assignment-candidate derivation.
//!
//! Pure function over current state, recomputed on every call. Order is
//! inherited from the directory (role ascending, then name ascending).

use std::collections::HashSet;

use crew_core::entities::{Membership, Profile};

/// Profiles eligible to be newly assigned to a project.
///
/// `loaded_members` is `None` when membership has not been loaded for the
/// project yet; the candidate list is then the full (optionally
/// focus-narrowed) directory. That window can transiently offer a profile
/// that is already a member — accepted behavior until the set is loaded,
/// since the picker's exclusion is the only duplicate guard.
#[must_use]
pub fn assignment_candidates<'a>(
    directory: &'a [Profile],
    loaded_members: Option<&[Membership]>,
    focus: Option<&str>,
) -> Vec<&'a Profile> {
    let member_ids: HashSet<&str> = loaded_members
        .map(|members| members.iter().map(|m| m.profile_id.as_str()).collect())
        .unwrap_or_default();

    directory
        .iter()
        .filter(|profile| focus.is_none_or(|f| profile.id == f))
        .filter(|profile| !member_ids.contains(profile.id.as_str()))
        .collect()
}
