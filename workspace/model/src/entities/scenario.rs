use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// A saved hourly rate calculation.
/// Holds the inputs and the rates computed from them at save time; rows are
/// never updated, so the stored rates always belong to the stored inputs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scenarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,

    // Inputs
    pub worker_count: i32,
    pub cost_per_worker: f64,
    pub overhead_cost: f64,
    pub billable_hours_per_worker: f64,
    pub margin_fraction: f64,
    pub vat_fraction: f64,
    #[sea_orm(default_value = "false")]
    pub redistribution_enabled: bool,

    // Results, rounded to cents
    pub self_cost_rate: f64,
    pub net_rate: f64,
    pub gross_rate: f64,
    pub net_minus_self_cost_diff: f64,
    pub redistribution_amount: f64,

    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::SqliteQueryBuilder;
    use sea_orm::{Database, DatabaseConnection, DbBackend, QueryOrder, Schema, Set, Statement};

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        // Create the scenarios table
        let schema = Schema::new(DbBackend::Sqlite);
        let stmt = schema.create_table_from_entity(Entity);
        let statement = Statement::from_string(DbBackend::Sqlite, stmt.to_string(SqliteQueryBuilder));
        db.execute(statement).await.unwrap();

        db
    }

    fn new_scenario(name: &str, created_at: NaiveDateTime) -> ActiveModel {
        ActiveModel {
            name: Set(name.to_string()),
            description: Set(None),
            worker_count: Set(8),
            cost_per_worker: Set(60_000.0),
            overhead_cost: Set(230_000.0),
            billable_hours_per_worker: Set(1_512.0),
            margin_fraction: Set(0.15),
            vat_fraction: Set(0.19),
            redistribution_enabled: Set(false),
            self_cost_rate: Set(58.70),
            net_rate: Set(67.50),
            gross_rate: Set(80.33),
            net_minus_self_cost_diff: Set(8.80),
            redistribution_amount: Set(0.0),
            created_at: Set(created_at),
            ..Default::default()
        }
    }

    fn timestamp(hour: u32) -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let db = setup_test_db().await;

        let first = new_scenario("First", timestamp(9)).insert(&db).await.unwrap();
        let second = new_scenario("Second", timestamp(10)).insert(&db).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_reals_round_trip_exactly() {
        let db = setup_test_db().await;

        let inserted = new_scenario("Baseline", timestamp(9)).insert(&db).await.unwrap();
        let loaded = Entity::find_by_id(inserted.id).one(&db).await.unwrap().unwrap();

        assert_eq!(loaded, inserted);
        assert_eq!(loaded.gross_rate, 80.33);
        assert_eq!(loaded.margin_fraction, 0.15);
        assert_eq!(loaded.created_at, timestamp(9));
    }

    #[tokio::test]
    async fn test_order_by_created_at() {
        let db = setup_test_db().await;

        new_scenario("Older", timestamp(9)).insert(&db).await.unwrap();
        new_scenario("Newer", timestamp(11)).insert(&db).await.unwrap();

        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&db)
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Newer");
        assert_eq!(rows[1].name, "Older");
    }
}
