use std::sync::Arc;

use anyhow::Result;
use marquee_application::{CatalogViewModel, SessionStore, SignInService};
use marquee_core::config::AppConfig;
use marquee_core::movie::MovieRepository;
use marquee_core::record::RecordClient;
use marquee_core::secret::SecretService;
use marquee_core::state::StateRepository;
use marquee_core::user::UserRepository;
use marquee_infrastructure::paths::MarqueePaths;
use marquee_infrastructure::{
    AirtableClient, AirtableMovieRepository, AirtableUserRepository, SecretServiceImpl,
    StateRepositoryImpl,
};

/// Services shared by every command.
pub struct AppContext {
    pub session: SessionStore,
    pub sign_in: SignInService,
    pub catalog: CatalogViewModel,
}

impl AppContext {
    /// Wires the remote client, repositories and local state, then restores
    /// the previous session if one was recorded.
    pub async fn bootstrap(paths: &MarqueePaths, config: &AppConfig) -> Result<Self> {
        let secret_service = SecretServiceImpl::from_environment(paths)?;
        let secrets = secret_service.load_secrets().await?;
        let api_key = secrets.api_key().map(str::to_string);

        let client: Arc<dyn RecordClient> =
            Arc::new(AirtableClient::new(&config.remote, api_key));
        tracing::debug!("[Bootstrap] Remote tables at {}", config.remote.tables_url());

        let movies: Arc<dyn MovieRepository> = Arc::new(AirtableMovieRepository::new(
            client.clone(),
            config.remote.movies_table.clone(),
        ));
        let users: Arc<dyn UserRepository> = Arc::new(AirtableUserRepository::new(
            client,
            config.remote.users_table.clone(),
        ));
        let state: Arc<dyn StateRepository> = Arc::new(StateRepositoryImpl::new(paths).await?);

        let session = SessionStore::open(users.clone(), state).await;
        session.restore_session().await;
        tracing::debug!(
            "[Bootstrap] Session ready (logged in: {})",
            session.is_logged_in().await
        );

        Ok(Self {
            session,
            sign_in: SignInService::new(users),
            catalog: CatalogViewModel::new(movies),
        })
    }
}
