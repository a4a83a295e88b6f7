use axum::{
    Router,
    routing::{get, post},
};

use crate::db::StudentStorage;
use crate::handlers::students::{
    create_student, delete_student, get_student, list_students, update_student,
};

#[derive(Clone)]
pub struct StudentsState {
    pub storage: StudentStorage,
}

impl StudentsState {
    pub fn new(storage: StudentStorage) -> Self {
        Self { storage }
    }
}

pub fn students_router(state: StudentsState) -> Router {
    Router::new()
        .route("/students", post(create_student).get(list_students))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}
