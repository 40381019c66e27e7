//! Employee endpoints.

use rawda_shared::BackendResult;

use crate::http::ApiClient;
use crate::models::Employee;

/// `/employees` endpoints.
pub struct EmployeesApi<'a>(&'a ApiClient);

impl ApiClient {
    /// Employee endpoints.
    #[must_use]
    pub const fn employees(&self) -> EmployeesApi<'_> {
        EmployeesApi(self)
    }
}

impl EmployeesApi<'_> {
    /// `GET /employees` - all employees, active and inactive.
    pub async fn list(&self) -> BackendResult<Vec<Employee>> {
        self.0.get("/employees").await
    }

    /// `GET /employees/{id}`.
    pub async fn get(&self, id: i64) -> BackendResult<Employee> {
        self.0.get(&format!("/employees/{id}")).await
    }

    /// `POST /employees`.
    pub async fn create(&self, employee: &Employee) -> BackendResult<Employee> {
        self.0.post("/employees", employee).await
    }

    /// `PUT /employees/{id}`.
    pub async fn update(&self, id: i64, employee: &Employee) -> BackendResult<Employee> {
        self.0.put(&format!("/employees/{id}"), employee).await
    }

    /// `DELETE /employees/{id}`.
    pub async fn delete(&self, id: i64) -> BackendResult<()> {
        self.0.delete(&format!("/employees/{id}")).await
    }
}
