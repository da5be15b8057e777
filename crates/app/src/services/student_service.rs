//! Student service — use-cases for managing student records.

use registry_domain::error::{ConflictError, NotFoundError, RegistryError};
use registry_domain::id::StudentId;
use registry_domain::student::{Student, StudentPatch};

use crate::ports::StudentRepository;

/// Application service for student CRUD operations.
pub struct StudentService<R> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new student after validating domain invariants.
    ///
    /// The id is caller-supplied, so creation first checks that it is
    /// still free.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Conflict`] when a student with the same id
    /// already exists, [`RegistryError::Validation`] if invariants fail,
    /// or a storage error propagated from the repository.
    pub async fn create_student(&self, student: Student) -> Result<Student, RegistryError> {
        student.validate()?;
        if self.repo.get_by_id(student.id).await?.is_some() {
            return Err(ConflictError {
                entity: "Student",
                id: student.id.to_string(),
            }
            .into());
        }
        let created = self.repo.create(student).await?;
        tracing::debug!(id = %created.id, "student created");
        Ok(created)
    }

    /// Look up a student by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no student with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_student(&self, id: StudentId) -> Result<Student, RegistryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Student",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all students.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_students(&self) -> Result<Vec<Student>, RegistryError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing student.
    ///
    /// Only fields present in `patch` are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no student with `id`
    /// exists, [`RegistryError::Validation`] if the patched record
    /// violates an invariant, or a storage error from the repository.
    pub async fn update_student(
        &self,
        id: StudentId,
        patch: StudentPatch,
    ) -> Result<Student, RegistryError> {
        let mut student = self.get_student(id).await?;
        if patch.is_empty() {
            return Ok(student);
        }
        student.apply_patch(patch)?;
        let updated = self.repo.update(student).await?;
        tracing::debug!(id = %updated.id, "student updated");
        Ok(updated)
    }

    /// Delete a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no student with `id`
    /// exists, or a storage error propagated from the repository.
    pub async fn delete_student(&self, id: StudentId) -> Result<(), RegistryError> {
        // Fetch first so deleting an absent id reports not-found.
        self.get_student(id).await?;
        self.repo.delete(id).await?;
        tracing::debug!(%id, "student deleted");
        Ok(())
    }
}
