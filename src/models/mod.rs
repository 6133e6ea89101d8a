/*
* Department/Employee entities and the projections served by the API.
*/

pub mod department;
pub mod employee;

pub use department::{Department, DepartmentEmployeeRow, DepartmentRow, DepartmentSummary};
pub use employee::Employee;
