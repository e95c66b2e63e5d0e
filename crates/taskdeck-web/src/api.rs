use std::cell::RefCell;
use std::future::Future;

use gloo::net::http::Response;
use serde::de::DeserializeOwned;
use taskdeck_core::error::Failure;
use yew::Callback;

pub mod auth;
pub mod tasks;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

thread_local! {
    static UNAUTHORIZED_HOOK: RefCell<Option<Callback<()>>> = const { RefCell::new(None) };
}

pub fn api_base() -> &'static str {
    option_env!("TASKDECK_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

// Installed once per process lifetime, from the application mount
// effect. Fired when a refresh attempt after a 401 also fails.
pub fn register_unauthorized_hook(hook: Callback<()>) {
    UNAUTHORIZED_HOOK.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            tracing::warn!("unauthorized hook already registered, keeping the first");
            return;
        }
        *slot = Some(hook);
    });
}

fn notify_unauthorized() {
    UNAUTHORIZED_HOOK.with(|slot| {
        if let Some(hook) = slot.borrow().as_ref() {
            hook.emit(());
        }
    });
}

// Runs a request once; on a 401 attempts one credential refresh and,
// if that succeeds, retries the request once. A failed refresh forces
// the session to logged-out through the registered hook. The failure
// propagates to the caller either way.
pub async fn with_refresh<T, F, Fut>(send: F) -> Result<T, Failure>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, Failure>>,
{
    match send().await {
        Err(Failure::Unauthorized) => {
            if auth::refresh().await.is_ok() {
                tracing::info!("access credential refreshed, retrying request");
                send().await
            } else {
                notify_unauthorized();
                Err(Failure::Unauthorized)
            }
        }
        other => other,
    }
}

fn transport_failure(err: gloo::net::Error) -> Failure {
    Failure::Network(err.to_string())
}

async fn read_failure(response: Response) -> Failure {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or(body);
    Failure::from_status(status, detail)
}

async fn expect_json<T>(response: Response) -> Result<T, Failure>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        return Err(read_failure(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| Failure::Decode(err.to_string()))
}

async fn expect_ok(response: Response) -> Result<(), Failure> {
    if !response.ok() {
        return Err(read_failure(response).await);
    }
    Ok(())
}
