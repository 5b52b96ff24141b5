//! Session-stored shopper identity.
//!
//! The session record holds a single shopper id, written once on the first
//! mutation. Everything the shopper changes lives in the server-side
//! [`ShopStore`](crate::services::ShopStore), keyed by that id.

use tower_sessions::Session;
use uuid::Uuid;

use crate::services::SharedShop;
use crate::state::AppState;

/// Session keys.
pub mod keys {
    /// Key for the shopper id.
    pub const SHOPPER: &str = "shopper";
}

/// The shopper's state, created (along with the session) when missing.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn load_shop(
    state: &AppState,
    session: &Session,
) -> Result<SharedShop, tower_sessions::session::Error> {
    let shopper = match session.get::<Uuid>(keys::SHOPPER).await? {
        Some(id) => id,
        None => {
            let id = Uuid::new_v4();
            session.insert(keys::SHOPPER, id).await?;
            id
        }
    };
    Ok(state.shops().get_or_create(shopper).await)
}

/// The shopper's state if they have any, without starting a session.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn find_shop(
    state: &AppState,
    session: &Session,
) -> Result<Option<SharedShop>, tower_sessions::session::Error> {
    let Some(shopper) = session.get::<Uuid>(keys::SHOPPER).await? else {
        return Ok(None);
    };
    Ok(state.shops().get(&shopper).await)
}
