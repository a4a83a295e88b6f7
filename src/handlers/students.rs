use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::{debug, info};

use crate::db::Student;
use crate::middleware::{StudentId, StudentPayload};
use crate::{StudentError, router::StudentsState};

/// POST /students -> stores the body and returns it with its assigned id.
pub async fn create_student(
    State(state): State<StudentsState>,
    StudentPayload(body): StudentPayload,
) -> Result<Json<Student>, StudentError> {
    let student = state.storage.create(body).await?;
    info!(id = student.id, "student created");
    Ok(Json(student))
}

/// GET /students
pub async fn list_students(
    State(state): State<StudentsState>,
) -> Result<Json<Vec<Student>>, StudentError> {
    let students = state.storage.list_all().await?;
    debug!(count = students.len(), "listed students");
    Ok(Json(students))
}

/// GET /students/{id}
pub async fn get_student(
    State(state): State<StudentsState>,
    StudentId(id): StudentId,
) -> Result<Json<Student>, StudentError> {
    let student = state.storage.get_by_id(id).await?;
    debug!(id, "fetched student");
    Ok(Json(student))
}

/// PUT /students/{id} -> replaces all fields; the id never changes.
pub async fn update_student(
    State(state): State<StudentsState>,
    StudentId(id): StudentId,
    StudentPayload(body): StudentPayload,
) -> Result<Json<Student>, StudentError> {
    let student = state.storage.update(id, body).await?;
    info!(id, "student updated");
    Ok(Json(student))
}

/// DELETE /students/{id} -> 200 with an empty body, or 404 if nothing was removed.
pub async fn delete_student(
    State(state): State<StudentsState>,
    StudentId(id): StudentId,
) -> Result<StatusCode, StudentError> {
    if !state.storage.delete_by_id(id).await? {
        return Err(StudentError::NotFound(id));
    }
    info!(id, "student deleted");
    Ok(StatusCode::OK)
}
