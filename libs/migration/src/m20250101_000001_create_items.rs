use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(pk_uuid(Items::Id))
                    .col(text(Items::CustomerName))
                    .col(text(Items::Brand))
                    .col(text_null(Items::Color))
                    .col(text_null(Items::Size))
                    .col(text(Items::ServiceType))
                    .col(text(Items::Status).default("Masuk"))
                    .col(text_null(Items::Notes))
                    .col(
                        timestamp_with_time_zone(Items::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Status is plain text; the allowed labels are enforced here and in the API
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE items
                    ADD CONSTRAINT items_status_check
                    CHECK (status IN ('Masuk', 'Proses', 'Selesai', 'Diambil'))
                "#,
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_created_at")
                    .table(Items::Table)
                    .col(Items::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_items_status")
                    .table(Items::Table)
                    .col(Items::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    CustomerName,
    Brand,
    Color,
    Size,
    ServiceType,
    Status,
    Notes,
    CreatedAt,
}
