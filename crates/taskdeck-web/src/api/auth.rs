use gloo::net::http::Request;
use taskdeck_core::error::Failure;
use taskdeck_core::session::{TokenGrant, UserIdentity};
use web_sys::RequestCredentials;

use super::{endpoint, expect_json, expect_ok, transport_failure};

pub async fn get_user() -> Result<UserIdentity, Failure> {
    let response = Request::get(&endpoint("/auth/get-user"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(transport_failure)?;
    expect_json(response).await
}

pub async fn refresh() -> Result<(), Failure> {
    let response = Request::post(&endpoint("/auth/token/refresh"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(transport_failure)?;
    expect_ok(response).await
}

// Identity check used at startup and after a credential refresh. A 401
// gets one refresh attempt before the session is given up on.
pub async fn probe() -> Result<UserIdentity, Failure> {
    match get_user().await {
        Err(Failure::Unauthorized) => {
            if refresh().await.is_err() {
                return Err(Failure::Unauthorized);
            }
            get_user().await
        }
        other => other,
    }
}

pub async fn login(username: &str, password: &str) -> Result<UserIdentity, Failure> {
    let body = form_encoded(&[("username", username), ("password", password)])?;
    let response = Request::post(&endpoint("/auth/login"))
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(transport_failure)?
        .send()
        .await
        .map_err(transport_failure)?;

    let grant: TokenGrant = expect_json(response).await?;
    tracing::debug!(token_type = %grant.token_type, "access token granted");

    // The login response alone is not proof of identity; the session
    // is only logged-in once the user endpoint confirms it.
    get_user().await
}

pub async fn register(username: &str, password: &str) -> Result<UserIdentity, Failure> {
    let response = Request::post(&endpoint("/auth/register"))
        .credentials(RequestCredentials::Include)
        .query([("username", username), ("password", password)])
        .send()
        .await
        .map_err(transport_failure)?;
    expect_ok(response).await?;

    tracing::info!(username, "registered, performing auto-login");
    login(username, password).await
}

pub async fn logout() -> Result<(), Failure> {
    let response = Request::post(&endpoint("/auth/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(transport_failure)?;
    expect_ok(response).await
}

fn form_encoded(pairs: &[(&str, &str)]) -> Result<String, Failure> {
    let params = web_sys::UrlSearchParams::new()
        .map_err(|_| Failure::Network("URLSearchParams unavailable".to_string()))?;
    for (key, value) in pairs {
        params.append(key, value);
    }
    Ok(params.to_string().into())
}
