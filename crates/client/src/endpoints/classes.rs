//! Class endpoints.

use rawda_shared::BackendResult;

use crate::http::ApiClient;
use crate::models::ClassRoom;

/// `/classes` endpoints.
pub struct ClassesApi<'a>(&'a ApiClient);

impl ApiClient {
    /// Class endpoints.
    #[must_use]
    pub const fn classes(&self) -> ClassesApi<'_> {
        ClassesApi(self)
    }
}

impl ClassesApi<'_> {
    /// `GET /classes`.
    pub async fn list(&self) -> BackendResult<Vec<ClassRoom>> {
        self.0.get("/classes").await
    }

    /// `POST /classes`.
    pub async fn create(&self, class: &ClassRoom) -> BackendResult<ClassRoom> {
        self.0.post("/classes", class).await
    }

    /// `PUT /classes/{id}`.
    pub async fn update(&self, id: i64, class: &ClassRoom) -> BackendResult<ClassRoom> {
        self.0.put(&format!("/classes/{id}"), class).await
    }

    /// `DELETE /classes/{id}`.
    pub async fn delete(&self, id: i64) -> BackendResult<()> {
        self.0.delete(&format!("/classes/{id}")).await
    }
}
