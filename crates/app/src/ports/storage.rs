//! Storage port — repository trait for persistence.

use std::future::Future;

use registry_domain::error::RegistryError;
use registry_domain::id::StudentId;
use registry_domain::student::Student;

/// Persistence operations for student rows.
///
/// Implementations map domain records to whatever storage they sit on.
/// `get_by_id` returns `None` for an absent row; the not-found and
/// duplicate-id rules live in the service layer, not here.
pub trait StudentRepository {
    /// Insert a new row.
    fn create(&self, student: Student)
    -> impl Future<Output = Result<Student, RegistryError>> + Send;

    /// Fetch a row by primary key.
    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RegistryError>> + Send;

    /// Fetch all rows.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RegistryError>> + Send;

    /// Overwrite an existing row, keyed by `student.id`.
    fn update(&self, student: Student)
    -> impl Future<Output = Result<Student, RegistryError>> + Send;

    /// Delete a row by primary key. Deleting an absent row is not an error.
    fn delete(&self, id: StudentId) -> impl Future<Output = Result<(), RegistryError>> + Send;
}
