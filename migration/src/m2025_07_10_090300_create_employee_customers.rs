//! Migration to create the employee_customers join table.
//!
//! The pair (employee_id, customer_id) is the primary key; the row has no
//! identity of its own. The table deliberately carries no foreign keys:
//! deleting a customer leaves its join rows in place, which is the
//! documented behavior of the delete operation.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeCustomers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeCustomers::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeCustomers::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EmployeeCustomers::EmployeeId)
                            .col(EmployeeCustomers::CustomerId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employee_customers_customer_id")
                    .table(EmployeeCustomers::Table)
                    .col(EmployeeCustomers::CustomerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeCustomers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EmployeeCustomers {
    Table,
    EmployeeId,
    CustomerId,
}
