use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::store;
use crate::jobs::validation::{validate_job, JobPayload};
use crate::models::job::{JobRow, JobWithCreator};
use crate::state::AppState;

/// POST /api/jobs/create
pub async fn handle_create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<JobPayload>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    let job = validate_job(&payload).map_err(AppError::Validation)?;
    let created = store::insert(&state.db, &job, user.0).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/jobs/all-jobs
pub async fn handle_all_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobWithCreator>>, AppError> {
    let jobs = store::list_all(&state.db).await?;
    Ok(Json(jobs.into_iter().map(JobWithCreator::from).collect()))
}

/// GET /api/jobs/my-jobs
pub async fn handle_my_jobs(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs = store::list_by_owner(&state.db, user.0).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobRow>, AppError> {
    let id = parse_job_id(&id)?;
    let job = store::get(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

/// PUT /api/jobs/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<JobPayload>,
) -> Result<Json<JobRow>, AppError> {
    let id = parse_job_id(&id)?;
    let job = validate_job(&payload).map_err(AppError::Validation)?;

    require_owner(&state, id, user).await?;

    // A concurrent delete between the ownership check and the write
    // surfaces here as NotFound; last write wins otherwise.
    let updated = store::update(&state.db, id, &job)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(updated))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_job_id(&id)?;

    require_owner(&state, id, user).await?;

    if !store::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    Ok(Json(json!({ "message": "Job deleted successfully" })))
}

/// Fetches the job and rejects callers who do not own it.
async fn require_owner(state: &AppState, id: Uuid, user: AuthUser) -> Result<(), AppError> {
    let existing = store::get(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    if existing.created_by != user.0 {
        tracing::warn!(job = %id, caller = %user.0, "ownership check failed");
        return Err(AppError::Forbidden);
    }
    Ok(())
}

fn parse_job_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId("Invalid job id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_job_id_accepts_uuids_only() {
        let id = Uuid::new_v4();
        assert_eq!(parse_job_id(&id.to_string()).unwrap(), id);

        for bad in ["", "123", "not-a-uuid", "5f3a9c2b4d1e8f0a6b7c9d0e"] {
            assert!(matches!(parse_job_id(bad), Err(AppError::InvalidId(_))));
        }
    }
}
