use std::net::IpAddr;

use axum::Router;
use gobapay_core_contact_contracts::ContactService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: Contact,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        routes::contact::router(self.contact.into())
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }
}
