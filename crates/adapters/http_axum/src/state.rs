//! Shared application state for axum handlers.

use std::sync::Arc;

use registry_app::ports::StudentRepository;
use registry_app::services::student_service::StudentService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying type itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<SR> {
    /// Student CRUD service.
    pub student_service: Arc<StudentService<SR>>,
}

impl<SR> Clone for AppState<SR> {
    fn clone(&self) -> Self {
        Self {
            student_service: Arc::clone(&self.student_service),
        }
    }
}

impl<SR> AppState<SR>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(student_service: StudentService<SR>) -> Self {
        Self {
            student_service: Arc::new(student_service),
        }
    }
}
