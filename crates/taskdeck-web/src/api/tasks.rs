use gloo::net::http::Request;
use taskdeck_core::error::Failure;
use taskdeck_core::task::{Task, TaskDraft};
use web_sys::RequestCredentials;

use super::{endpoint, expect_json, expect_ok, transport_failure, with_refresh};

pub async fn list() -> Result<Vec<Task>, Failure> {
    with_refresh(raw_list).await
}

pub async fn create(draft: &TaskDraft) -> Result<Task, Failure> {
    with_refresh(|| raw_create(draft)).await
}

pub async fn update(task: &Task) -> Result<Task, Failure> {
    with_refresh(|| raw_update(task)).await
}

pub async fn remove(id: u64) -> Result<(), Failure> {
    with_refresh(|| raw_remove(id)).await
}

async fn raw_list() -> Result<Vec<Task>, Failure> {
    let response = Request::get(&endpoint("/users/me/tasks"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(transport_failure)?;
    expect_json(response).await
}

async fn raw_create(draft: &TaskDraft) -> Result<Task, Failure> {
    let response = Request::post(&endpoint("/users/me/tasks"))
        .credentials(RequestCredentials::Include)
        .json(draft)
        .map_err(transport_failure)?
        .send()
        .await
        .map_err(transport_failure)?;
    expect_json(response).await
}

async fn raw_update(task: &Task) -> Result<Task, Failure> {
    let response = Request::put(&endpoint(&format!("/users/me/tasks/{}", task.id)))
        .credentials(RequestCredentials::Include)
        .json(task)
        .map_err(transport_failure)?
        .send()
        .await
        .map_err(transport_failure)?;
    expect_json(response).await
}

async fn raw_remove(id: u64) -> Result<(), Failure> {
    let response = Request::delete(&endpoint(&format!("/users/me/tasks/{id}")))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(transport_failure)?;
    expect_ok(response).await
}
