use std::sync::Arc;

use folio_api_rest::RestServer;
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use folio_email_contracts::EmailService;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let contact = ContactServiceImpl::new(
        TimeServiceImpl,
        email.clone(),
        TemplateServiceImpl::new(),
        ContactServiceConfig {
            recipient: Arc::new(config.contact.recipient),
        },
    );
    let health = HealthServiceImpl::new(
        email,
        HealthServiceConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    let server = RestServer::new(contact, health);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
