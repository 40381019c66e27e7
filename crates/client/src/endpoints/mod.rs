//! Typed endpoint wrappers, one module per backend resource.

mod children;
mod classes;
mod employees;
mod fees;
mod reports;
mod salaries;
mod supplies;

pub use children::ChildrenApi;
pub use classes::ClassesApi;
pub use employees::EmployeesApi;
pub use fees::FeesApi;
pub use reports::ReportsApi;
pub use salaries::SalariesApi;
pub use supplies::SuppliesApi;
