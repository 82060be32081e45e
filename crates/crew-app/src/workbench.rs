//! The workbench: in-memory client state for one viewer.
//!
//! Holds the transient views a host UI renders — visible projects, the
//! active org directory, per-project membership sets — and performs the
//! membership and project mutations. All caches are rebuilt from the store
//! on demand; the store stays the source of truth.
//!
//! Everything is `&mut self`-driven: interleaving only happens at `.await`
//! points in the driver, so no locking is needed. The one ordering hazard —
//! a slow visibility fetch resolving after the viewer has changed — is
//! guarded by an epoch captured in [`ResolutionTicket`].

use std::collections::HashMap;

use crew_core::entities::{Membership, Profile, Project};
use crew_core::identity::ViewerIdentity;
use crew_db::error::StoreError;
use crew_db::service::CrewStore;

use crate::candidates::assignment_candidates;
use crate::messages::MessageBuffer;
use crate::visibility::VisibilityScope;

/// Snapshot of the identity a resolution was started for.
///
/// `apply` drops the result wholesale if the workbench epoch has moved on —
/// a stale privileged-path response must not overwrite a freshly computed
/// contractor-path list after a role change.
#[derive(Debug, Clone)]
pub struct ResolutionTicket {
    epoch: u64,
    org_id: String,
    profile_id: String,
    privileged: bool,
}

/// Result of the two independent resolution fetches.
///
/// Each fetch carries its own outcome: one failing must not stop the other
/// from being attempted or applied.
#[derive(Debug)]
pub struct ResolutionOutcome {
    pub directory: Result<Vec<Profile>, StoreError>,
    pub projects: Result<Vec<Project>, StoreError>,
}

/// In-memory client state for one viewer over one store.
pub struct Workbench {
    store: CrewStore,
    viewer: Option<ViewerIdentity>,
    /// Optional narrowing of the candidate list to a single profile,
    /// supplied by the host's navigation context.
    focus_profile: Option<String>,
    directory: Vec<Profile>,
    projects: Vec<Project>,
    /// Membership sets keyed by project ID. Key absence means "not yet
    /// loaded"; an empty vec means "loaded, none". Last write wins.
    members: HashMap<String, Vec<Membership>>,
    messages: MessageBuffer,
    epoch: u64,
}

impl Workbench {
    #[must_use]
    pub fn new(store: CrewStore) -> Self {
        Self {
            store,
            viewer: None,
            focus_profile: None,
            directory: Vec::new(),
            projects: Vec::new(),
            members: HashMap::new(),
            messages: MessageBuffer::default(),
            epoch: 0,
        }
    }

    /// Access the underlying store (e.g., for admin tooling around the
    /// workbench).
    #[must_use]
    pub const fn store(&self) -> &CrewStore {
        &self.store
    }

    #[must_use]
    pub const fn viewer(&self) -> Option<&ViewerIdentity> {
        self.viewer.as_ref()
    }

    /// Install the viewer resolved by the identity provider.
    ///
    /// Bumps the resolution epoch when the `(org, profile, privileged)`
    /// tuple changes, invalidating any in-flight resolution.
    pub fn set_viewer(&mut self, viewer: Option<ViewerIdentity>) {
        if Self::identity_key(self.viewer.as_ref()) != Self::identity_key(viewer.as_ref()) {
            self.epoch += 1;
        }
        self.viewer = viewer;
    }

    fn identity_key(viewer: Option<&ViewerIdentity>) -> Option<(String, Option<String>, bool)> {
        viewer.map(|v| (v.profile_id.clone(), v.org_id.clone(), v.is_privileged()))
    }

    /// Drop the viewer and every cached view. The session teardown itself
    /// belongs to the identity provider.
    pub fn sign_out(&mut self) {
        self.set_viewer(None);
        self.focus_profile = None;
        self.directory.clear();
        self.projects.clear();
        self.members.clear();
        self.messages.clear();
    }

    pub fn set_focus(&mut self, profile_id: Option<String>) {
        self.focus_profile = profile_id;
    }

    #[must_use]
    pub fn focus(&self) -> Option<&str> {
        self.focus_profile.as_deref()
    }

    /// The active org directory from the last applied resolution.
    #[must_use]
    pub fn directory(&self) -> &[Profile] {
        &self.directory
    }

    /// The visible project list from the last applied resolution.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The loaded membership set for a project. `None` = not yet loaded.
    #[must_use]
    pub fn loaded_members(&self, project_id: &str) -> Option<&[Membership]> {
        self.members.get(project_id).map(Vec::as_slice)
    }

    #[must_use]
    pub const fn messages(&self) -> &MessageBuffer {
        &self.messages
    }

    // ------------------------------------------------------------------
    // Visibility resolution
    // ------------------------------------------------------------------

    /// Start a resolution attempt for the current viewer.
    ///
    /// Returns `None` — a no-op, not an error — unless both the org and the
    /// profile ID are resolved non-empty. On a real attempt the message
    /// buffer is cleared and a ticket pinned to the current epoch is
    /// returned.
    pub fn begin_resolution(&mut self) -> Option<ResolutionTicket> {
        let viewer = self.viewer.as_ref()?;
        if viewer.profile_id.is_empty() {
            return None;
        }
        let org_id = viewer.org_id.as_deref().filter(|org| !org.is_empty())?;

        let ticket = ResolutionTicket {
            epoch: self.epoch,
            org_id: org_id.to_string(),
            profile_id: viewer.profile_id.clone(),
            privileged: viewer.is_privileged(),
        };
        self.messages.clear();
        Some(ticket)
    }

    /// Run both resolution fetches for a ticket.
    ///
    /// The directory is always fetched regardless of role (the UI needs it
    /// for name/role display and candidate derivation). The two fetches are
    /// independent: both are attempted even if one fails.
    pub async fn fetch_resolution(&self, ticket: &ResolutionTicket) -> ResolutionOutcome {
        let scope = VisibilityScope::for_privilege(ticket.privileged);
        let (directory, projects) = tokio::join!(
            self.store.active_directory(&ticket.org_id),
            scope.resolve(&self.store, &ticket.org_id, &ticket.profile_id),
        );
        ResolutionOutcome {
            directory,
            projects,
        }
    }

    /// Apply a resolution outcome, unless the ticket went stale.
    ///
    /// Returns `false` when the outcome was dropped because the identity
    /// changed after `begin_resolution`. Per-fetch failures append the
    /// store's message verbatim and leave that cache at last-known-good;
    /// the other fetch still applies.
    pub fn apply_resolution(&mut self, ticket: &ResolutionTicket, outcome: ResolutionOutcome) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "dropping stale resolution result"
            );
            return false;
        }

        match outcome.directory {
            Ok(directory) => self.directory = directory,
            Err(error) => {
                tracing::warn!(%error, "directory fetch failed");
                self.messages.push(error.to_string());
            }
        }
        match outcome.projects {
            Ok(projects) => self.projects = projects,
            Err(error) => {
                tracing::warn!(%error, "project fetch failed");
                self.messages.push(error.to_string());
            }
        }
        true
    }

    /// Begin, fetch, and apply in one call. Returns `false` if resolution
    /// was a no-op or the result went stale mid-flight.
    pub async fn resolve_visibility(&mut self) -> bool {
        let Some(ticket) = self.begin_resolution() else {
            return false;
        };
        let outcome = self.fetch_resolution(&ticket).await;
        self.apply_resolution(&ticket, outcome)
    }

    // ------------------------------------------------------------------
    // Membership management
    // ------------------------------------------------------------------

    /// Reload the active membership set for a project (top-level action).
    pub async fn refresh_members(&mut self, project_id: &str) {
        self.messages.clear();
        self.load_members(project_id).await;
    }

    /// Fetch and replace a project's membership set wholesale. On failure
    /// the prior entry (or its absence) stays untouched.
    async fn load_members(&mut self, project_id: &str) {
        match self.store.active_members(project_id).await {
            Ok(set) => {
                self.members.insert(project_id.to_string(), set);
            }
            Err(error) => {
                tracing::warn!(project_id, %error, "membership fetch failed");
                self.messages.push(error.to_string());
            }
        }
    }

    /// Assign a profile to a project.
    ///
    /// A blank profile ID is a silent no-op (the picker submitted nothing).
    /// On success the membership set is re-read from the store rather than
    /// patched locally, so store-side defaults land in the cache.
    pub async fn add_member(&mut self, project_id: &str, profile_id: &str) {
        if profile_id.trim().is_empty() {
            return;
        }
        self.messages.clear();

        let Some(org_id) = self.viewer_org() else {
            self.messages.push("Sign in to manage project members.");
            return;
        };

        match self.store.insert_member(&org_id, project_id, profile_id).await {
            Ok(_) => self.load_members(project_id).await,
            Err(error) => self.messages.push(error.to_string()),
        }
    }

    /// Revoke a membership by its row ID (soft-delete), then re-read the
    /// set.
    pub async fn remove_member(&mut self, project_id: &str, member_id: &str) {
        self.messages.clear();

        match self.store.deactivate_member(member_id).await {
            Ok(()) => self.load_members(project_id).await,
            Err(error) => self.messages.push(error.to_string()),
        }
    }

    /// Candidates for assignment to a project: active org profiles minus
    /// the project's loaded members, optionally narrowed to the focus
    /// profile. Recomputed on every call.
    #[must_use]
    pub fn candidates_for(&self, project_id: &str) -> Vec<&Profile> {
        assignment_candidates(
            &self.directory,
            self.loaded_members(project_id),
            self.focus_profile.as_deref(),
        )
    }

    // ------------------------------------------------------------------
    // Project creation
    // ------------------------------------------------------------------

    /// Create a project in the viewer's org (privileged only).
    ///
    /// A name that is empty after trimming is a silent no-op. On success the
    /// returned row is merged into the project list, which is re-sorted by
    /// name; the caller clears its input only when `Some` comes back.
    pub async fn create_project(&mut self, name: &str) -> Option<Project> {
        self.messages.clear();

        if !self.viewer.as_ref().is_some_and(ViewerIdentity::is_privileged) {
            self.messages
                .push("Only admins and managers can create projects.");
            return None;
        }
        let Some(org_id) = self.viewer_org() else {
            self.messages.push("Viewer organization is not resolved.");
            return None;
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        match self.store.create_project(&org_id, trimmed).await {
            Ok(project) => {
                self.projects.push(project.clone());
                self.projects.sort_by(|a, b| a.name.cmp(&b.name));
                Some(project)
            }
            Err(error) => {
                self.messages.push(error.to_string());
                None
            }
        }
    }

    fn viewer_org(&self) -> Option<String> {
        self.viewer
            .as_ref()
            .and_then(|v| v.org_id.clone())
            .filter(|org| !org.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crew_core::enums::Role;
    use crew_db::CrewDb;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn workbench() -> Workbench {
        let db = CrewDb::open_local(":memory:").await.unwrap();
        Workbench::new(CrewStore::from_db(db))
    }

    async fn seed_profile(bench: &Workbench, org: &str, name: &str, role: Role) -> Profile {
        bench
            .store()
            .create_profile(org, Some(name), role, None)
            .await
            .unwrap()
    }

    async fn seed_project(bench: &Workbench, org: &str, name: &str) -> Project {
        bench.store().create_project(org, name).await.unwrap()
    }

    async fn seed_member(bench: &Workbench, org: &str, project: &str, profile: &str) -> Membership {
        bench
            .store()
            .insert_member(org, project, profile)
            .await
            .unwrap()
    }

    fn identity_of(profile: &Profile) -> ViewerIdentity {
        ViewerIdentity {
            profile_id: profile.id.clone(),
            org_id: Some(profile.org_id.clone()),
            full_name: profile.full_name.clone(),
            role: Some(profile.role),
        }
    }

    async fn break_table(bench: &Workbench, table: &str) {
        bench
            .store()
            .db()
            .conn()
            .execute(&format!("ALTER TABLE {table} RENAME TO {table}_gone"), ())
            .await
            .unwrap();
    }

    async fn restore_table(bench: &Workbench, table: &str) {
        bench
            .store()
            .db()
            .conn()
            .execute(&format!("ALTER TABLE {table}_gone RENAME TO {table}"), ())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn model_b_scenario() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let assigned = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        let unassigned = seed_profile(&bench, "org-1", "Casey", Role::Contractor).await;
        let p1 = seed_project(&bench, "org-1", "Pier One").await;
        seed_project(&bench, "org-1", "Pier Two").await;
        seed_member(&bench, "org-1", &p1.id, &assigned.id).await;

        // Admin sees both, sorted by name, despite having no membership
        bench.set_viewer(Some(identity_of(&admin)));
        assert!(bench.resolve_visibility().await);
        let names: Vec<_> = bench.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Pier One", "Pier Two"]);

        // Assigned contractor sees exactly their project
        bench.set_viewer(Some(identity_of(&assigned)));
        assert!(bench.resolve_visibility().await);
        let names: Vec<_> = bench.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Pier One"]);

        // Unassigned contractor sees nothing
        bench.set_viewer(Some(identity_of(&unassigned)));
        assert!(bench.resolve_visibility().await);
        assert!(bench.projects().is_empty());

        // The directory is loaded for every role
        assert_eq!(bench.directory().len(), 3);
    }

    #[tokio::test]
    async fn contractor_does_not_see_retired_projects() {
        let mut bench = workbench().await;
        let worker = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        let live = seed_project(&bench, "org-1", "Live").await;
        let retired = seed_project(&bench, "org-1", "Retired").await;
        seed_member(&bench, "org-1", &live.id, &worker.id).await;
        seed_member(&bench, "org-1", &retired.id, &worker.id).await;
        bench
            .store()
            .db()
            .conn()
            .execute(
                "UPDATE projects SET is_active = 0 WHERE id = ?1",
                [retired.id.as_str()],
            )
            .await
            .unwrap();

        bench.set_viewer(Some(identity_of(&worker)));
        assert!(bench.resolve_visibility().await);
        let names: Vec<_> = bench.projects().iter().map(|p| p.name.as_str()).collect();
        // Membership row still active, but the project itself was retired
        assert_eq!(names, ["Live"]);
    }

    #[tokio::test]
    async fn unresolved_identity_is_a_noop() {
        let mut bench = workbench().await;

        // No viewer at all
        assert!(!bench.resolve_visibility().await);
        assert!(bench.messages().is_empty());

        // Viewer without an org
        bench.set_viewer(Some(ViewerIdentity {
            profile_id: "prf-1".to_string(),
            org_id: None,
            full_name: None,
            role: Some(Role::Admin),
        }));
        assert!(bench.begin_resolution().is_none());

        // Viewer with an empty org string
        bench.set_viewer(Some(ViewerIdentity {
            profile_id: "prf-1".to_string(),
            org_id: Some(String::new()),
            full_name: None,
            role: Some(Role::Admin),
        }));
        assert!(bench.begin_resolution().is_none());
        assert!(bench.projects().is_empty());
        assert!(bench.directory().is_empty());
    }

    #[tokio::test]
    async fn stale_resolution_is_dropped() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let worker = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        seed_project(&bench, "org-1", "Pier One").await;
        seed_project(&bench, "org-1", "Pier Two").await;

        // A contractor resolution starts but its response is slow...
        bench.set_viewer(Some(identity_of(&worker)));
        let stale_ticket = bench.begin_resolution().unwrap();
        let stale_outcome = bench.fetch_resolution(&stale_ticket).await;

        // ...meanwhile the viewer becomes the admin and resolves
        bench.set_viewer(Some(identity_of(&admin)));
        assert!(bench.resolve_visibility().await);
        assert_eq!(bench.projects().len(), 2);

        // The slow contractor response must not overwrite the admin list
        assert!(!bench.apply_resolution(&stale_ticket, stale_outcome));
        assert_eq!(bench.projects().len(), 2);
    }

    #[tokio::test]
    async fn same_identity_reresolution_is_not_stale() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        seed_project(&bench, "org-1", "Pier One").await;

        bench.set_viewer(Some(identity_of(&admin)));
        let ticket = bench.begin_resolution().unwrap();
        // Re-installing the same identity must not invalidate the ticket
        bench.set_viewer(Some(identity_of(&admin)));
        let outcome = bench.fetch_resolution(&ticket).await;
        assert!(bench.apply_resolution(&ticket, outcome));
        assert_eq!(bench.projects().len(), 1);
    }

    #[tokio::test]
    async fn fetch_failures_accumulate_and_do_not_abort_each_other() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        seed_project(&bench, "org-1", "Pier One").await;
        bench.set_viewer(Some(identity_of(&admin)));
        assert!(bench.resolve_visibility().await);
        assert_eq!(bench.directory().len(), 1);

        // Directory fetch now fails; the project fetch must still apply
        break_table(&bench, "profiles").await;
        seed_project(&bench, "org-1", "Pier Two").await;
        assert!(bench.resolve_visibility().await);
        assert_eq!(bench.messages().lines().len(), 1);
        // Projects refreshed despite the directory failure...
        assert_eq!(bench.projects().len(), 2);
        // ...and the directory stays last-known-good
        assert_eq!(bench.directory().len(), 1);

        // Both fetches failing yields both messages, newline-joined
        break_table(&bench, "projects").await;
        assert!(bench.resolve_visibility().await);
        assert_eq!(bench.messages().lines().len(), 2);
        assert!(bench.messages().as_text().contains('\n'));
        assert_eq!(bench.projects().len(), 2);

        restore_table(&bench, "profiles").await;
        restore_table(&bench, "projects").await;
    }

    #[tokio::test]
    async fn membership_map_distinguishes_not_loaded_from_loaded_empty() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        bench.set_viewer(Some(identity_of(&admin)));

        assert!(bench.loaded_members(&project.id).is_none());

        bench.refresh_members(&project.id).await;
        assert_eq!(bench.loaded_members(&project.id), Some(&[][..]));
    }

    #[tokio::test]
    async fn refresh_is_idempotent_and_replaces_wholesale() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let worker = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        seed_member(&bench, "org-1", &project.id, &worker.id).await;
        bench.set_viewer(Some(identity_of(&admin)));

        bench.refresh_members(&project.id).await;
        let first = bench.loaded_members(&project.id).unwrap().to_vec();
        bench.refresh_members(&project.id).await;
        let second = bench.loaded_members(&project.id).unwrap().to_vec();
        assert_eq!(first, second);

        // Revoke behind the workbench's back; the next refresh replaces the
        // whole set instead of merging
        bench
            .store()
            .deactivate_member(&first[0].id)
            .await
            .unwrap();
        bench.refresh_members(&project.id).await;
        assert_eq!(bench.loaded_members(&project.id), Some(&[][..]));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_known_good() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let worker = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        seed_member(&bench, "org-1", &project.id, &worker.id).await;
        bench.set_viewer(Some(identity_of(&admin)));

        bench.refresh_members(&project.id).await;
        assert_eq!(bench.loaded_members(&project.id).unwrap().len(), 1);

        break_table(&bench, "project_members").await;
        bench.refresh_members(&project.id).await;
        assert!(!bench.messages().is_empty());
        // Cache untouched
        assert_eq!(bench.loaded_members(&project.id).unwrap().len(), 1);
        restore_table(&bench, "project_members").await;
    }

    #[tokio::test]
    async fn add_member_reads_after_write() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let worker = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        bench.set_viewer(Some(identity_of(&admin)));

        bench.add_member(&project.id, &worker.id).await;
        assert!(bench.messages().is_empty());

        let members = bench.loaded_members(&project.id).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].profile_id, worker.id);
        // Store-side defaults are visible because the set was re-read
        assert!(members[0].id.starts_with("mbr-"));
        assert_eq!(members[0].is_active, Some(true));
    }

    #[tokio::test]
    async fn add_member_blank_id_is_silent_noop() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        bench.set_viewer(Some(identity_of(&admin)));

        bench.add_member(&project.id, "   ").await;
        assert!(bench.messages().is_empty());
        assert!(bench.loaded_members(&project.id).is_none());

        let mut rows = bench
            .store()
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM project_members", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
    }

    #[tokio::test]
    async fn remove_member_soft_deletes_and_refreshes() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let worker = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        let membership = seed_member(&bench, "org-1", &project.id, &worker.id).await;
        bench.set_viewer(Some(identity_of(&admin)));

        bench.refresh_members(&project.id).await;
        bench.remove_member(&project.id, &membership.id).await;
        assert!(bench.messages().is_empty());
        assert_eq!(bench.loaded_members(&project.id), Some(&[][..]));

        // The row survives in the store with the flag lowered
        let mut rows = bench
            .store()
            .db()
            .conn()
            .query(
                "SELECT is_active FROM project_members WHERE id = ?1",
                [membership.id.as_str()],
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().expect("row should survive");
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
    }

    #[tokio::test]
    async fn candidates_exclude_loaded_members_and_respect_focus() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let worker = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        let other = seed_profile(&bench, "org-1", "Casey", Role::Contractor).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        seed_member(&bench, "org-1", &project.id, &worker.id).await;

        bench.set_viewer(Some(identity_of(&admin)));
        assert!(bench.resolve_visibility().await);

        // Before the membership set loads, the whole directory is offered
        assert_eq!(bench.candidates_for(&project.id).len(), 3);

        bench.refresh_members(&project.id).await;
        let ids: Vec<_> = bench
            .candidates_for(&project.id)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, [admin.id.clone(), other.id.clone()]);

        bench.set_focus(Some(other.id.clone()));
        let ids: Vec<_> = bench
            .candidates_for(&project.id)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, [other.id.clone()]);
        assert_eq!(bench.focus(), Some(other.id.as_str()));
    }

    #[tokio::test]
    async fn create_project_merges_sorted() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        seed_project(&bench, "org-1", "Alpha").await;
        seed_project(&bench, "org-1", "Midway").await;
        seed_project(&bench, "org-1", "Zulu").await;

        bench.set_viewer(Some(identity_of(&admin)));
        assert!(bench.resolve_visibility().await);

        let created = bench.create_project("  Harbor Ops  ").await.unwrap();
        assert_eq!(created.name, "Harbor Ops");
        assert_eq!(created.is_active, Some(true));

        let names: Vec<_> = bench.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Harbor Ops", "Midway", "Zulu"]);
        assert!(bench.messages().is_empty());
    }

    #[tokio::test]
    async fn create_project_whitespace_name_is_silent_noop() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        seed_project(&bench, "org-1", "Alpha").await;
        bench.set_viewer(Some(identity_of(&admin)));
        assert!(bench.resolve_visibility().await);

        assert!(bench.create_project("   ").await.is_none());
        assert!(bench.messages().is_empty());
        assert_eq!(bench.projects().len(), 1);

        let mut rows = bench
            .store()
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM projects", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn create_project_rejects_contractors_without_store_call() {
        let mut bench = workbench().await;
        let worker = seed_profile(&bench, "org-1", "Blake", Role::Contractor).await;
        bench.set_viewer(Some(identity_of(&worker)));

        assert!(bench.create_project("Side Gig").await.is_none());
        assert_eq!(bench.messages().lines().len(), 1);

        let mut rows = bench
            .store()
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM projects", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 0);
    }

    #[tokio::test]
    async fn create_project_failure_leaves_list_unchanged() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        seed_project(&bench, "org-1", "Alpha").await;
        bench.set_viewer(Some(identity_of(&admin)));
        assert!(bench.resolve_visibility().await);

        break_table(&bench, "projects").await;
        assert!(bench.create_project("Harbor Ops").await.is_none());
        assert!(!bench.messages().is_empty());
        assert_eq!(bench.projects().len(), 1);
        restore_table(&bench, "projects").await;
    }

    #[tokio::test]
    async fn messages_clear_at_the_start_of_each_action() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        bench.set_viewer(Some(identity_of(&admin)));

        break_table(&bench, "profiles").await;
        assert!(bench.resolve_visibility().await);
        assert!(!bench.messages().is_empty());

        // The next top-level action starts from a clean buffer
        bench.refresh_members(&project.id).await;
        assert!(bench.messages().is_empty());
        restore_table(&bench, "profiles").await;
    }

    #[tokio::test]
    async fn sign_out_clears_viewer_and_caches() {
        let mut bench = workbench().await;
        let admin = seed_profile(&bench, "org-1", "Avery", Role::Admin).await;
        let project = seed_project(&bench, "org-1", "Pier One").await;
        bench.set_viewer(Some(identity_of(&admin)));
        assert!(bench.resolve_visibility().await);
        bench.refresh_members(&project.id).await;
        bench.set_focus(Some(admin.id.clone()));

        bench.sign_out();
        assert!(bench.viewer().is_none());
        assert!(bench.projects().is_empty());
        assert!(bench.directory().is_empty());
        assert!(bench.loaded_members(&project.id).is_none());
        assert!(bench.focus().is_none());
        assert!(bench.messages().is_empty());

        // Signed out, resolution is a no-op again
        assert!(!bench.resolve_visibility().await);
    }
}
