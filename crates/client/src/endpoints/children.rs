//! Student (children) endpoints.

use rawda_shared::BackendResult;

use crate::http::ApiClient;
use crate::models::Student;

/// `/children` endpoints.
pub struct ChildrenApi<'a>(&'a ApiClient);

impl ApiClient {
    /// Student endpoints.
    #[must_use]
    pub const fn children(&self) -> ChildrenApi<'_> {
        ChildrenApi(self)
    }
}

impl ChildrenApi<'_> {
    /// `GET /children` - all students, active and inactive. Roster
    /// loaders drop inactive entries before reconciliation.
    pub async fn list(&self) -> BackendResult<Vec<Student>> {
        self.0.get("/children").await
    }

    /// `GET /children/{id}`.
    pub async fn get(&self, id: i64) -> BackendResult<Student> {
        self.0.get(&format!("/children/{id}")).await
    }

    /// `POST /children`.
    pub async fn create(&self, student: &Student) -> BackendResult<Student> {
        self.0.post("/children", student).await
    }

    /// `PUT /children/{id}`.
    pub async fn update(&self, id: i64, student: &Student) -> BackendResult<Student> {
        self.0.put(&format!("/children/{id}"), student).await
    }

    /// `DELETE /children/{id}`.
    pub async fn delete(&self, id: i64) -> BackendResult<()> {
        self.0.delete(&format!("/children/{id}")).await
    }
}
