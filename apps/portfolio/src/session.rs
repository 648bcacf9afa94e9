use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::portfolio::Portfolio;
use crate::models::session::SessionState;

const SESSION_STATE_KEY: &str = "portfolio.state";

/// In-memory, cookie-identified sessions that end with the browser session.
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.secure_cookies)
        .with_expiry(Expiry::OnSessionEnd)
}

/// Returns this visitor's state, creating it from the data store on the
/// first request. Existing state is returned untouched.
pub async fn load_session_state(
    session: &Session,
    portfolio: &Portfolio,
) -> Result<SessionState, AppError> {
    if let Some(state) = session.get::<SessionState>(SESSION_STATE_KEY).await? {
        return Ok(state);
    }

    let state = SessionState::new(portfolio);
    session.insert(SESSION_STATE_KEY, &state).await?;
    info!("Session created at {}", state.created_at.to_rfc3339());
    Ok(state)
}

pub async fn save_session_state(session: &Session, state: &SessionState) -> Result<(), AppError> {
    session.insert(SESSION_STATE_KEY, state).await?;
    Ok(())
}
