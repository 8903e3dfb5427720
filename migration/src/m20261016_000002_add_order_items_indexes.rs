use sea_orm_migration::prelude::*;

use crate::m20261016_000001_create_storefront_tables::OrderItems;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every order read filters on order_id and sorts by position
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("order_items_order_id_idx")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .col(OrderItems::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("order_items_order_id_idx")
                    .table(OrderItems::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
