pub mod allowance;
pub mod income;
pub mod ni;
pub mod payroll;
pub mod uk;

pub use payroll::{payroll_from_annual_salary, PayrollResult};
pub use uk::TaxYear;
