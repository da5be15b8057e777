//! Student — a single registry record keyed by a caller-supplied id.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, ValidationError};
use crate::id::StudentId;

/// A student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub cgpa: f64,
    pub program: String,
    pub year_of_studies: u32,
}

impl Student {
    /// Create a builder for constructing a [`Student`].
    #[must_use]
    pub fn builder() -> StudentBuilder {
        StudentBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] when `name` or `program` is
    /// empty, or when `cgpa` is negative or not finite.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.program.is_empty() {
            return Err(ValidationError::EmptyProgram.into());
        }
        if !self.cgpa.is_finite() || self.cgpa < 0.0 {
            return Err(ValidationError::InvalidCgpa.into());
        }
        Ok(())
    }

    /// Overwrite the fields present in `patch`, then re-check invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the patched record violates
    /// an invariant.
    pub fn apply_patch(&mut self, patch: StudentPatch) -> Result<(), RegistryError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(cgpa) = patch.cgpa {
            self.cgpa = cgpa;
        }
        if let Some(program) = patch.program {
            self.program = program;
        }
        if let Some(year_of_studies) = patch.year_of_studies {
            self.year_of_studies = year_of_studies;
        }
        self.validate()
    }
}

/// Partial update for a [`Student`]. Absent fields are left untouched.
///
/// Presence is decided by the `Option`, not by truthiness, so `0.0` and
/// `0` are valid updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub cgpa: Option<f64>,
    pub program: Option<String>,
    pub year_of_studies: Option<u32>,
}

impl StudentPatch {
    /// Whether the patch carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.cgpa.is_none()
            && self.program.is_none()
            && self.year_of_studies.is_none()
    }
}

/// Step-by-step builder for [`Student`].
#[derive(Debug, Default)]
pub struct StudentBuilder {
    id: Option<StudentId>,
    name: Option<String>,
    cgpa: Option<f64>,
    program: Option<String>,
    year_of_studies: Option<u32>,
}

impl StudentBuilder {
    #[must_use]
    pub fn id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn cgpa(mut self, cgpa: f64) -> Self {
        self.cgpa = Some(cgpa);
        self
    }

    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    #[must_use]
    pub fn year_of_studies(mut self, year_of_studies: u32) -> Self {
        self.year_of_studies = Some(year_of_studies);
        self
    }

    /// Consume the builder, validate, and return a [`Student`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if a required field is missing
    /// or violates an invariant.
    pub fn build(self) -> Result<Student, RegistryError> {
        let student = Student {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            cgpa: self.cgpa.unwrap_or_default(),
            program: self.program.unwrap_or_default(),
            year_of_studies: self.year_of_studies.unwrap_or_default(),
        };
        student.validate()?;
        Ok(student)
    }
}
