//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use registry_app::ports::StudentRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the student API at the root and a `/health` liveness probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR>(state: AppState<SR>) -> Router
where
    SR: StudentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use registry_app::services::student_service::StudentService;
    use registry_domain::error::RegistryError;
    use registry_domain::id::StudentId;
    use registry_domain::student::Student;
    use tower::ServiceExt;

    struct StubStudentRepo;

    impl registry_app::ports::StudentRepository for StubStudentRepo {
        async fn create(&self, student: Student) -> Result<Student, RegistryError> {
            Ok(student)
        }
        async fn get_by_id(&self, _id: StudentId) -> Result<Option<Student>, RegistryError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Student>, RegistryError> {
            Ok(vec![])
        }
        async fn update(&self, student: Student) -> Result<Student, RegistryError> {
            Ok(student)
        }
        async fn delete(&self, _id: StudentId) -> Result<(), RegistryError> {
            Ok(())
        }
    }

    fn test_state() -> AppState<StubStudentRepo> {
        AppState::new(StudentService::new(StubStudentRepo))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_students() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/students")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_when_student_missing() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/student/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_id_is_not_numeric() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/student/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
