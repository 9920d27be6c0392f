//! # Customer Repository
//!
//! Repository for Customer entities and their employee links. The create
//! operation is the one multi-statement write in the service and runs in a
//! single transaction: either the customer row and every requested link row
//! land together, or none of them do.

use crate::error::RepositoryError;
use crate::models::company::Model as CompanyModel;
use crate::models::customer::{
    ActiveModel as CustomerActiveModel, Entity as Customer, Model as CustomerModel,
};
use crate::models::employee_customer::{
    ActiveModel as LinkActiveModel, Entity as EmployeeCustomer,
};
use crate::models::{company, customer, employee_customer};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// Request data for creating a new customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: Option<i32>,
    /// Employees to link to the new customer, in submission order. May be
    /// empty.
    pub employee_ids: Vec<i32>,
}

/// Field changes applied by the update operation.
///
/// Deliberately has no employee ids: editing a customer never reconciles
/// its employee links, even though the edit form displays them.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: Option<i32>,
}

/// Repository for Customer database operations.
pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all customers with their company attached (left join), ordered
    /// by id. Customers without a company come back with `None`.
    pub async fn list_with_company(
        &self,
    ) -> Result<Vec<(CustomerModel, Option<CompanyModel>)>, RepositoryError> {
        let rows = Customer::find()
            .find_also_related(company::Entity)
            .order_by_asc(customer::Column::CustomerId)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(rows)
    }

    /// Get a customer by id.
    pub async fn get_by_id(
        &self,
        customer_id: i32,
    ) -> Result<Option<CustomerModel>, RepositoryError> {
        let customer = Customer::find_by_id(customer_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(customer)
    }

    /// Create a customer and its employee link rows in one transaction.
    ///
    /// A failure on any statement rolls back the whole write; a customer
    /// never ends up persisted with only part of its links.
    pub async fn create(&self, request: NewCustomer) -> Result<CustomerModel, RepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(RepositoryError::database_error)?;

        let customer = CustomerActiveModel {
            first_name: Set(request.first_name),
            last_name: Set(request.last_name),
            rating: Set(request.rating),
            company_id: Set(request.company_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(RepositoryError::database_error)?;

        for employee_id in request.employee_ids {
            let link = LinkActiveModel {
                employee_id: Set(employee_id),
                customer_id: Set(customer.customer_id),
            };
            EmployeeCustomer::insert(link)
                .exec_without_returning(&txn)
                .await
                .map_err(RepositoryError::database_error)?;
        }

        txn.commit()
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(customer)
    }

    /// Update a customer's fields by id. Employee link rows are untouched.
    pub async fn update(
        &self,
        customer_id: i32,
        changes: CustomerUpdate,
    ) -> Result<CustomerModel, RepositoryError> {
        let customer = self
            .get_by_id(customer_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Customer".to_string()))?;

        let mut active = customer.into_active_model();
        active.first_name = Set(changes.first_name);
        active.last_name = Set(changes.last_name);
        active.rating = Set(changes.rating);
        active.company_id = Set(changes.company_id);

        let updated = active
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(updated)
    }

    /// Delete a customer row by id.
    ///
    /// Employee link rows referencing the customer are NOT removed; they
    /// remain as orphans. Deleting an id with no row is not an error.
    pub async fn delete(&self, customer_id: i32) -> Result<u64, RepositoryError> {
        let result = Customer::delete_by_id(customer_id)
            .exec(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result.rows_affected)
    }

    /// Ids of the employees currently linked to a customer, ordered by
    /// employee id.
    pub async fn related_employee_ids(
        &self,
        customer_id: i32,
    ) -> Result<Vec<i32>, RepositoryError> {
        let links = EmployeeCustomer::find()
            .filter(employee_customer::Column::CustomerId.eq(customer_id))
            .order_by_asc(employee_customer::Column::EmployeeId)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(links.into_iter().map(|link| link.employee_id).collect())
    }
}
