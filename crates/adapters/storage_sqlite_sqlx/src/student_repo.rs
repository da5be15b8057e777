//! `SQLite` implementation of [`StudentRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use registry_app::ports::StudentRepository;
use registry_domain::error::RegistryError;
use registry_domain::id::StudentId;
use registry_domain::student::Student;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Student`].
struct Wrapper(Student);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Student> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let cgpa: f64 = row.try_get("cgpa")?;
        let program: String = row.try_get("program")?;
        let year_of_studies: u32 = row.try_get("year_of_studies")?;

        Ok(Self(Student {
            id: StudentId::new(id),
            name,
            cgpa,
            program,
            year_of_studies,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO students (id, name, cgpa, program, year_of_studies) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM students WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM students ORDER BY id";
const UPDATE: &str =
    "UPDATE students SET name = ?, cgpa = ?, program = ?, year_of_studies = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM students WHERE id = ?";

/// `SQLite`-backed student repository.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StudentRepository for SqliteStudentRepository {
    fn create(
        &self,
        student: Student,
    ) -> impl Future<Output = Result<Student, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(student.id.as_i64())
                .bind(&student.name)
                .bind(student.cgpa)
                .bind(&student.program)
                .bind(student.year_of_studies)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(student)
        }
    }

    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        student: Student,
    ) -> impl Future<Output = Result<Student, RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&student.name)
                .bind(student.cgpa)
                .bind(&student.program)
                .bind(student.year_of_studies)
                .bind(student.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(student)
        }
    }

    fn delete(&self, id: StudentId) -> impl Future<Output = Result<(), RegistryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
