use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scenario::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scenario::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scenario::Name).string().not_null())
                    .col(ColumnDef::new(Scenario::Description).string())
                    // Inputs
                    .col(ColumnDef::new(Scenario::WorkerCount).integer().not_null())
                    .col(ColumnDef::new(Scenario::CostPerWorker).double().not_null())
                    .col(ColumnDef::new(Scenario::OverheadCost).double().not_null())
                    .col(
                        ColumnDef::new(Scenario::BillableHoursPerWorker)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scenario::MarginFraction).double().not_null())
                    .col(ColumnDef::new(Scenario::VatFraction).double().not_null())
                    .col(
                        ColumnDef::new(Scenario::RedistributionEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // Results
                    .col(ColumnDef::new(Scenario::SelfCostRate).double().not_null())
                    .col(ColumnDef::new(Scenario::NetRate).double().not_null())
                    .col(ColumnDef::new(Scenario::GrossRate).double().not_null())
                    .col(
                        ColumnDef::new(Scenario::NetMinusSelfCostDiff)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scenario::RedistributionAmount)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scenario::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scenarios_created_at")
                    .table(Scenario::Table)
                    .col(Scenario::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scenario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Scenario {
    #[sea_orm(iden = "scenarios")]
    Table,
    Id,
    Name,
    Description,
    WorkerCount,
    CostPerWorker,
    OverheadCost,
    BillableHoursPerWorker,
    MarginFraction,
    VatFraction,
    RedistributionEnabled,
    SelfCostRate,
    NetRate,
    GrossRate,
    NetMinusSelfCostDiff,
    RedistributionAmount,
    CreatedAt,
}
