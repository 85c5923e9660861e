use anyhow::Context;
use quarry_config::QuarryConfig;
use quarry_connectors::ConnectorRegistry;
use quarry_db::service::{QuarryService, ServiceSettings};

use crate::console::Console;
use crate::invitations::{InvitationSender, LinkInvitationSender};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: QuarryService,
    pub config: QuarryConfig,
    pub connectors: ConnectorRegistry,
    pub inviter: Box<dyn InvitationSender>,
    pub console: Console,
}

impl AppContext {
    pub fn new(
        service: QuarryService,
        config: QuarryConfig,
        connectors: ConnectorRegistry,
        inviter: Box<dyn InvitationSender>,
        console: Console,
    ) -> Self {
        Self {
            service,
            config,
            connectors,
            inviter,
            console,
        }
    }

    /// Open the configured database and make sure an organization exists.
    pub async fn init(config: QuarryConfig) -> anyhow::Result<Self> {
        let settings = ServiceSettings::from_config(&config);
        let service = QuarryService::new_local(&config.database.path, settings)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        let org_config = &config.organization;
        if let Some(org) = service
            .bootstrap_organization(&org_config.default_name, &org_config.default_slug)
            .await
            .context("failed to create the default organization")?
        {
            tracing::info!(org_id = org.id, slug = %org.slug, "bootstrapped default organization");
        }

        let inviter = Box::new(LinkInvitationSender::new(
            config.invitations.base_url.clone(),
        ));
        Ok(Self::new(
            service,
            config,
            ConnectorRegistry::with_builtin(),
            inviter,
            Console::stdio(),
        ))
    }

    /// Requested organization slug, or the configured default.
    pub fn org_slug<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.config.organization.default_slug)
    }
}
