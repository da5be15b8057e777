//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod students;

use axum::Router;
use axum::routing::get;

use registry_app::ports::StudentRepository;

use crate::state::AppState;

/// Build the API router.
pub fn routes<SR>() -> Router<AppState<SR>>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/students", get(students::list::<SR>))
        .route(
            "/student/{id}",
            get(students::get::<SR>)
                .put(students::create::<SR>)
                .patch(students::update::<SR>)
                .delete(students::delete::<SR>),
        )
}
