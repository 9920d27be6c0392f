//! Test utilities for database testing.
//!
//! Sets up an in-memory SQLite database with all migrations applied and
//! provides fixture helpers for seeding the four tables.

use anyhow::Result;
use customer_directory::models::{company, customer, employee, employee_customer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Inserts a company row and returns its generated id.
#[allow(dead_code)]
pub async fn insert_company(db: &DatabaseConnection, name: &str) -> Result<i32> {
    let model = company::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model.company_id)
}

/// Inserts an employee row and returns its generated id.
#[allow(dead_code)]
pub async fn insert_employee(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
) -> Result<i32> {
    let model = employee::ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model.employee_id)
}

/// Inserts a customer row directly (bypassing the repository) and returns
/// its generated id.
#[allow(dead_code)]
pub async fn insert_customer(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    rating: i32,
    company_id: Option<i32>,
) -> Result<i32> {
    let model = customer::ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        rating: Set(rating),
        company_id: Set(company_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model.customer_id)
}

/// Inserts an employee-customer link row directly.
#[allow(dead_code)]
pub async fn link_employee(
    db: &DatabaseConnection,
    employee_id: i32,
    customer_id: i32,
) -> Result<()> {
    let link = employee_customer::ActiveModel {
        employee_id: Set(employee_id),
        customer_id: Set(customer_id),
    };
    employee_customer::Entity::insert(link)
        .exec_without_returning(db)
        .await?;
    Ok(())
}

/// Total number of customer rows.
#[allow(dead_code)]
pub async fn count_customers(db: &DatabaseConnection) -> Result<u64> {
    Ok(customer::Entity::find().count(db).await?)
}

/// Total number of employee-customer link rows.
#[allow(dead_code)]
pub async fn count_links(db: &DatabaseConnection) -> Result<u64> {
    Ok(employee_customer::Entity::find().count(db).await?)
}

/// Employee ids linked to the given customer, ordered by employee id.
#[allow(dead_code)]
pub async fn links_for_customer(db: &DatabaseConnection, customer_id: i32) -> Result<Vec<i32>> {
    let links = employee_customer::Entity::find()
        .filter(employee_customer::Column::CustomerId.eq(customer_id))
        .order_by_asc(employee_customer::Column::EmployeeId)
        .all(db)
        .await?;
    Ok(links.into_iter().map(|link| link.employee_id).collect())
}
