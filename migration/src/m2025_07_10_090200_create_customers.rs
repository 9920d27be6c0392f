//! Migration to create the customers table.
//!
//! `company_id` is nullable; a customer without a company is valid and the
//! list view renders it with an absent company name.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::CustomerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::FirstName).text().not_null())
                    .col(ColumnDef::new(Customers::LastName).text().not_null())
                    .col(ColumnDef::new(Customers::Rating).integer().not_null())
                    .col(ColumnDef::new(Customers::CompanyId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_company_id")
                            .from(Customers::Table, Customers::CompanyId)
                            .to(Companies::Table, Companies::CompanyId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customers_company_id")
                    .table(Customers::Table)
                    .col(Customers::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    CustomerId,
    FirstName,
    LastName,
    Rating,
    CompanyId,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    CompanyId,
}
