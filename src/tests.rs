#[cfg(test)]
mod store_tests {
    use crate::error::StoreError;
    use crate::test_utils::{init_test_tracing, setup_test_store};
    use common::ScenarioInput;
    use compute::{compute_rates, ComputeError};

    fn input_with(worker_count: i32, margin_fraction: f64, redistribution_enabled: bool) -> ScenarioInput {
        ScenarioInput {
            worker_count,
            margin_fraction,
            redistribution_enabled,
            ..ScenarioInput::default()
        }
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let _guard = init_test_tracing();
        let store = setup_test_store().await;

        store.initialize().await.expect("first initialize");
        store.initialize().await.expect("second initialize");

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_get_round_trip() {
        let _guard = init_test_tracing();
        let store = setup_test_store().await;
        let input = ScenarioInput::default();

        let id = store
            .save("Baseline", Some("Preset values"), &input)
            .await
            .expect("save should succeed");
        assert!(id > 0);

        let scenario = store.get_by_id(id).await.unwrap().expect("scenario should exist");
        assert_eq!(scenario.id, id);
        assert_eq!(scenario.name, "Baseline");
        assert_eq!(scenario.description.as_deref(), Some("Preset values"));
        assert_eq!(scenario.input, input);
        assert_eq!(scenario.result, compute_rates(&input).unwrap());
        assert_eq!(scenario.result.gross_rate, 80.33);
    }

    #[tokio::test]
    async fn test_redistribution_flag_is_persisted() {
        let store = setup_test_store().await;
        let input = input_with(8, 0.15, true);

        let id = store.save("With redistribution", None, &input).await.unwrap();
        let scenario = store.get_by_id(id).await.unwrap().unwrap();

        assert!(scenario.input.redistribution_enabled);
        assert_eq!(scenario.result.redistribution_amount, 0.79);
        assert_eq!(scenario.result.gross_rate, 79.53);
        assert_eq!(scenario.result, compute_rates(&scenario.input).unwrap());
    }

    #[tokio::test]
    async fn test_stored_results_match_engine_for_stored_inputs() {
        let store = setup_test_store().await;
        let inputs = [
            input_with(1, 0.0, false),
            input_with(3, 0.25, true),
            input_with(12, 1.0, true),
            ScenarioInput {
                cost_per_worker: 0.0,
                overhead_cost: 0.0,
                ..ScenarioInput::default()
            },
        ];

        for (i, input) in inputs.iter().enumerate() {
            store.save(&format!("Scenario {}", i), None, input).await.unwrap();
        }

        for scenario in store.list_all().await.unwrap() {
            assert_eq!(
                scenario.result,
                compute_rates(&scenario.input).unwrap(),
                "scenario {}",
                scenario.name
            );
        }
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first() {
        let store = setup_test_store().await;
        assert!(store.list_all().await.unwrap().is_empty());

        let mut ids = Vec::new();
        for n in 1..=5 {
            ids.push(store.save(&format!("Scenario {}", n), None, &input_with(n, 0.15, false)).await.unwrap());
        }

        let scenarios = store.list_all().await.unwrap();
        assert_eq!(scenarios.len(), 5);

        let listed: Vec<i32> = scenarios.iter().map(|s| s.id).collect();
        ids.reverse();
        assert_eq!(listed, ids);
        assert_eq!(scenarios[0].name, "Scenario 5");
        assert!(scenarios.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_get_missing_scenario_is_none() {
        let store = setup_test_store().await;
        assert!(store.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let store = setup_test_store().await;
        let keep = store.save("Keep", None, &ScenarioInput::default()).await.unwrap();
        let drop = store.save("Drop", None, &ScenarioInput::default()).await.unwrap();

        assert!(store.delete_by_id(drop).await.unwrap());
        assert!(store.get_by_id(drop).await.unwrap().is_none());
        assert!(store.get_by_id(keep).await.unwrap().is_some());

        // Deleting again, or deleting an unknown id, is not an error
        assert!(!store.delete_by_id(drop).await.unwrap());
        assert!(!store.delete_by_id(9_999).await.unwrap());
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = setup_test_store().await;
        let first = store.save("First", None, &ScenarioInput::default()).await.unwrap();
        assert!(store.delete_by_id(first).await.unwrap());

        let second = store.save("Second", None, &ScenarioInput::default()).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let store = setup_test_store().await;

        for name in ["", "   "] {
            let err = store
                .save(name, None, &ScenarioInput::default())
                .await
                .expect_err("empty name must be rejected");
            assert!(matches!(err, StoreError::Validation(_)), "got {:?}", err);
        }
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_input_propagates_from_engine() {
        let store = setup_test_store().await;

        let err = store
            .save("No workers", None, &input_with(0, 0.15, false))
            .await
            .expect_err("zero workers must be rejected");
        match err {
            StoreError::Compute(ComputeError::InvalidInput(message)) => {
                assert_eq!(message, "worker count must be greater than 0")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }

        let no_hours = ScenarioInput {
            billable_hours_per_worker: 0.0,
            ..ScenarioInput::default()
        };
        let err = store.save("No hours", None, &no_hours).await.unwrap_err();
        assert!(matches!(err, StoreError::Compute(ComputeError::InvalidInput(_))));

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_name_and_description_are_trimmed() {
        let store = setup_test_store().await;

        let id = store
            .save("  Padded  ", Some("   "), &ScenarioInput::default())
            .await
            .unwrap();
        let scenario = store.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(scenario.name, "Padded");
        assert_eq!(scenario.description, None);
    }
}

#[cfg(test)]
mod command_tests {
    use crate::cli::commands::compare::load_for_comparison;
    use crate::cli::commands::{delete_scenario, save_scenario, show_scenario};
    use crate::error::StoreError;
    use crate::test_utils::setup_test_store;
    use common::{NumberFormat, ScenarioInput};

    #[tokio::test]
    async fn test_save_command_returns_new_id() {
        let store = setup_test_store().await;
        let id = save_scenario(&store, "Baseline", None, &ScenarioInput::default()).await.unwrap();
        assert!(store.get_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_command_on_missing_id_is_ok() {
        let store = setup_test_store().await;
        assert!(!delete_scenario(&store, 7).await.unwrap());
    }

    #[tokio::test]
    async fn test_show_command_reports_not_found() {
        let store = setup_test_store().await;
        let err = show_scenario(&store, 7, &NumberFormat::fallback(), false)
            .await
            .unwrap_err();

        assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_comparison_needs_two_distinct_scenarios() {
        let store = setup_test_store().await;
        let a = store.save("A", None, &ScenarioInput::default()).await.unwrap();
        let b = store
            .save(
                "B",
                None,
                &ScenarioInput {
                    worker_count: 4,
                    ..ScenarioInput::default()
                },
            )
            .await
            .unwrap();

        assert!(load_for_comparison(&store, &[a]).await.is_err());
        assert!(load_for_comparison(&store, &[a, a]).await.is_err());

        let scenarios = load_for_comparison(&store, &[b, a, b]).await.unwrap();
        let ids: Vec<i32> = scenarios.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![b, a]);

        let err = load_for_comparison(&store, &[a, 99]).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<StoreError>(), Some(StoreError::NotFound(99))));
    }
}
