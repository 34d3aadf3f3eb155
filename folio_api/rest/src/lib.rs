use std::net::IpAddr;

use axum::Router;
use folio_core_contact_contracts::ContactService;
use folio_core_health_contracts::HealthService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Health> {
    contact: Contact,
    health: Health,
}

impl<Contact, Health> RestServer<Contact, Health>
where
    Contact: ContactService,
    Health: HealthService,
{
    pub fn new(contact: Contact, health: Health) -> Self {
        Self { contact, health }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::health::router(self.health.into()));

        // request ids are assigned in the outermost layer so the trace span
        // can pick them up
        middlewares::request_id::add(middlewares::trace::add(router))
    }
}
