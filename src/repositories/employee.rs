//! Employee repository. Employees are read-only reference data here; the
//! only operation is listing them for the form selection inputs.

use crate::error::RepositoryError;
use crate::models::employee::{Entity as Employee, Model as EmployeeModel};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all employees, ordered by id.
    pub async fn list_all(&self) -> Result<Vec<EmployeeModel>, RepositoryError> {
        let employees = Employee::find()
            .order_by_asc(crate::models::employee::Column::EmployeeId)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(employees)
    }
}
