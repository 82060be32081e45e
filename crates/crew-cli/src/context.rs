//! Application context: config + store + workbench wiring.

use anyhow::Context;
use crew_app::Workbench;
use crew_config::CrewConfig;
use crew_core::identity::ViewerIdentity;
use crew_db::service::CrewStore;

use crate::cli::Cli;

pub struct AppContext {
    pub config: CrewConfig,
    pub workbench: Workbench,
}

impl AppContext {
    /// Open the store, resolve the viewer, and build the workbench.
    ///
    /// The `--as <profile-id>` flag is the identity-provider stand-in: the
    /// profile row supplies the viewer's org and role.
    pub async fn init(cli: &Cli, config: CrewConfig) -> anyhow::Result<Self> {
        let store = if let Some(path) = cli.db.as_deref() {
            CrewStore::open_local(path).await?
        } else if config.store.is_remote() {
            CrewStore::open_remote(&config.store.url, &config.store.auth_token).await?
        } else {
            if let Some(parent) = std::path::Path::new(&config.store.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            CrewStore::open_local(&config.store.path).await?
        };

        tracing::debug!(remote = config.store.is_remote(), "store opened");
        let mut workbench = Workbench::new(store);

        if let Some(profile_id) = cli.viewer.as_deref() {
            let profile = workbench
                .store()
                .profile(profile_id)
                .await?
                .with_context(|| {
                    format!("unknown profile '{profile_id}' — seed one with `crw profiles add`")
                })?;
            workbench.set_viewer(Some(ViewerIdentity {
                profile_id: profile.id.clone(),
                org_id: Some(profile.org_id.clone()),
                full_name: profile.full_name.clone(),
                role: Some(profile.role),
            }));
        }
        workbench.set_focus(cli.focus.clone());

        Ok(Self { config, workbench })
    }

    /// Org for commands that can run without a signed-in viewer:
    /// `--org`, then the viewer's org, then the configured default.
    pub fn org_id(&self, cli: &Cli) -> anyhow::Result<String> {
        if let Some(org) = cli.org.as_deref().filter(|org| !org.is_empty()) {
            return Ok(org.to_string());
        }
        if let Some(org) = self
            .workbench
            .viewer()
            .and_then(|viewer| viewer.org_id.clone())
        {
            return Ok(org);
        }
        let default_org = &self.config.general.default_org;
        if !default_org.is_empty() {
            return Ok(default_org.clone());
        }
        anyhow::bail!("no organization: pass --org, --as, or set general.default_org")
    }
}
