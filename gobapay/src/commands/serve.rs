use gobapay_api_rest::RestServer;
use gobapay_config::Config;
use gobapay_core_contact_impl::ContactServiceImpl;
use gobapay_email_contracts::EmailService;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let contact = ContactServiceImpl::new(email);

    let server = RestServer::new(contact);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
