//! JSON REST handlers for student records.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use registry_app::ports::StudentRepository;
use registry_domain::id::StudentId;
use registry_domain::student::{Student, StudentPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a student. All fields are required; the id
/// comes from the request path.
#[derive(Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub cgpa: f64,
    pub program: String,
    pub year_of_studies: u32,
}

/// Request body for partially updating a student. Absent fields are left
/// untouched.
#[derive(Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub cgpa: Option<f64>,
    pub program: Option<String>,
    pub year_of_studies: Option<u32>,
}

impl From<UpdateStudentRequest> for StudentPatch {
    fn from(req: UpdateStudentRequest) -> Self {
        Self {
            name: req.name,
            cgpa: req.cgpa,
            program: req.program,
            year_of_studies: req.year_of_studies,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Student>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Student>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Student>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Student>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /students`
pub async fn list<SR>(State(state): State<AppState<SR>>) -> Result<ListResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let students = state.student_service.list_students().await?;
    Ok(ListResponse::Ok(Json(students)))
}

/// `GET /student/{id}`
pub async fn get<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let student = state.student_service.get_student(StudentId::new(id)).await?;
    Ok(GetResponse::Ok(Json(student)))
}

/// `PUT /student/{id}`
pub async fn create<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<i64>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let student = Student::builder()
        .id(StudentId::new(id))
        .name(req.name)
        .cgpa(req.cgpa)
        .program(req.program)
        .year_of_studies(req.year_of_studies)
        .build()?;

    let created = state.student_service.create_student(student).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /student/{id}`
pub async fn update<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateStudentRequest>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let updated = state
        .student_service
        .update_student(StudentId::new(id), req.into())
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /student/{id}`
pub async fn delete<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    state
        .student_service
        .delete_student(StudentId::new(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}
