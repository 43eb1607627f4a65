use std::path::PathBuf;

use salerank::config;
use salerank::prelude::*;
use salerank::Error;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("salerank-{}-{name}", std::process::id()))
}

const SALES: &str = r#"[
    {"id": 1, "sellerId": 10, "sellerName": "Carla", "clientId": 20, "clientName": "Loja Alfa",
     "date": "2025-03-01", "items": [{"id": 5, "name": "Teclado gamer", "price": 50.0}], "total": 100.0},
    {"id": 2, "sellerId": 11, "sellerName": "Diego", "clientId": 21, "clientName": "Master Gama SS",
     "date": "2025-03-02", "items": [], "total": 500.0},
    {"id": 3, "sellerId": 12, "sellerName": "Elisa", "total": 250.0},
    {"id": 4, "total": -30.5}
]"#;

#[tokio::test]
async fn test_json_file_source_ranks_sales() {
    let path = temp_path("sales.json");
    tokio::fs::write(&path, SALES).await.unwrap();

    let mut controller = RankingController::new(JsonFileSource::new(&path));
    let outcome = controller
        .rank(10, Algorithm::MergeSort, Direction::Descending)
        .await
        .unwrap();

    let names: Vec<&str> = outcome.view.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Master Gama SS", "Elisa", "Loja Alfa", "Sale #4"]);
    assert_eq!(outcome.view.records[0].date.as_deref(), Some("2025-03-02"));

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_json_file_source_reads_backend_product_items() {
    let path = temp_path("backend.json");
    let raw = r#"[
        {"id": 1, "sellerId": 3, "sellerName": "Carla", "clientId": 4, "clientName": "Loja Alfa",
         "date": "2025-04-10", "items": [{"id": 5, "name": "Teclado gamer", "price": 10.0}],
         "total": 10.0},
        {"id": 2, "sellerId": 3, "sellerName": "Carla", "clientId": 6, "clientName": "Master Gama SS",
         "date": "2025-04-11", "items": [{"name": "Mouse", "price": 35.0}], "total": 35.0}
    ]"#;
    tokio::fs::write(&path, raw).await.unwrap();

    let mut controller = RankingController::new(JsonFileSource::new(&path));
    let outcome = controller
        .rank(10, Algorithm::QuickSort, Direction::Descending)
        .await
        .unwrap();

    assert_eq!(outcome.view.ids(), vec![2, 1]);

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_json_file_source_honours_max_size() {
    let path = temp_path("bounded.json");
    tokio::fs::write(&path, SALES).await.unwrap();

    let records = JsonFileSource::new(&path).fetch_batch(2).await.unwrap();
    assert_eq!(records.len(), 2);

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_json_file_source_failures_are_unavailable() {
    let missing = JsonFileSource::new(temp_path("missing.json"));
    let err = missing.fetch_batch(10).await.unwrap_err();
    assert!(matches!(err, Error::DataUnavailable { .. }));

    let path = temp_path("garbage.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();
    let err = JsonFileSource::new(&path).fetch_batch(10).await.unwrap_err();
    assert!(matches!(err, Error::DataUnavailable { .. }));

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_config_wires_source_and_defaults() {
    let sales = temp_path("configured.json");
    tokio::fs::write(&sales, SALES).await.unwrap();

    let cfg_path = temp_path("salerank.toml");
    let raw = format!(
        "[ranking]\ndefault_size = 50\ndefault_algorithm = \"bubblesort\"\n\
         default_direction = \"ascending\"\nsizes = [10, 50]\n\n[source]\npath = {:?}\n",
        sales.display().to_string()
    );
    tokio::fs::write(&cfg_path, raw).await.unwrap();

    let cfg = config::load(&cfg_path).unwrap();
    let source = cfg.source.as_ref().unwrap().open();
    let mut controller = RankingController::new(source);

    let outcome = controller
        .rank_selection(cfg.ranking.selection())
        .await
        .unwrap();
    assert_eq!(outcome.view.ids(), vec![4, 1, 3, 2]);
    assert_eq!(outcome.view.algorithm, Algorithm::BubbleSort);

    tokio::fs::remove_file(&sales).await.unwrap();
    tokio::fs::remove_file(&cfg_path).await.unwrap();
}

#[test]
fn test_config_load_reports_path() {
    let missing = temp_path("absent.toml");
    let err = config::load(&missing).unwrap_err();
    assert!(matches!(err, Error::ReadConfig { ref path, .. } if *path == missing));
}
