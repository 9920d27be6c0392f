//! Company repository. Companies are read-only reference data here; the
//! only operation is listing them for the form selection inputs.

use crate::error::RepositoryError;
use crate::models::company::{Entity as Company, Model as CompanyModel};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all companies, ordered by id.
    pub async fn list_all(&self) -> Result<Vec<CompanyModel>, RepositoryError> {
        let companies = Company::find()
            .order_by_asc(crate::models::company::Column::CompanyId)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(companies)
    }
}
