//! End-to-end tests: loader rows through preprocessing and every analysis
//! component.

use approx::assert_relative_eq;
use consumption_analytics::prelude::*;
use consumption_analytics::transform::time_features;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn electricity_rows() -> Vec<RawRecord> {
    let a = [100.0, 102.0, 101.0, 105.0, 107.0, 106.0, 110.0, 112.0, 111.0, 115.0];
    let b = [80.0, 78.0, 81.0, 79.0, 80.0];

    let mut rows = Vec::new();
    for (i, &v) in a.iter().enumerate() {
        rows.push(RawRecord::new(
            &format!("2024-01-{:02}", i + 1),
            "A",
            Resource::Electricity,
            v,
        ));
    }
    for (i, &v) in b.iter().enumerate() {
        rows.push(RawRecord::new(
            &format!("2024/01/{:02}", i + 1),
            "B",
            Resource::Electricity,
            v,
        ));
    }
    rows
}

#[test]
fn rows_from_json_are_preprocessed() {
    init_tracing();

    let json = r#"[
        {"date": "2024-02-02", "hostel_block": "C", "liters_used": 420.0},
        {"date": "2024-02-01", "hostel_block": "C", "liters_used": 400.0},
        {"date": "2024-02-01", "hostel_block": "C", "liters_used": 999.0},
        {"date": "2024-02-03", "hostel_block": "C"},
        {"date": "2024-02-04", "hostel_block": "C", "liters_used": -5.0},
        {"hostel_block": "C", "liters_used": 10.0},
        {"date": "2024-02-01T06:30:00", "hostel_block": "D", "liters_used": 380.0}
    ]"#;
    let rows: Vec<RawRecord> = serde_json::from_str(json).unwrap();

    let series = preprocess(&rows, Resource::Water).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.blocks(), vec!["C", "D"]);
    assert_eq!(series.values(), vec![400.0, 420.0, 380.0]);

    assert_eq!(
        preprocess(&rows, Resource::Electricity),
        Err(AnalyticsError::MissingField("units_consumed".to_string()))
    );
}

#[test]
fn full_report_for_all_blocks() {
    init_tracing();

    let series = preprocess(&electricity_rows(), Resource::Electricity).unwrap();
    let report = analyze(&series, &AnalysisConfig::new(Resource::Electricity)).unwrap();

    assert_eq!(report.record_count, 15);
    assert_eq!(report.unit, "kWh Units");

    let stats = report.statistics.unwrap();
    assert_eq!(stats.count, 15);
    assert_eq!(stats.maximum, 115.0);
    assert_eq!(stats.minimum, 78.0);
    assert!(stats.minimum <= stats.average && stats.average <= stats.maximum);

    let comparison = report.comparison.unwrap();
    assert_eq!(comparison["A"].count, 10);
    assert_eq!(comparison["A"].average, 106.9);
    assert_eq!(comparison["B"].total, 398.0);

    let forecasts = report.prediction.unwrap();
    assert_eq!(forecasts.len(), 2);
    assert_relative_eq!(
        forecasts["A"].next_day_prediction,
        116.67241379310346,
        epsilon = 1e-9
    );
    assert_eq!(forecasts["B"].last_actual_value, 80.0);
    assert_eq!(
        Ok(forecasts["B"].clone()),
        prediction_summary(&series, Resource::Electricity, Some("B"))
    );

    let summary = report.anomaly_summary.unwrap();
    assert_eq!(summary.total_records, 15);
    assert_eq!(
        summary.anomaly_count,
        summary.high_usage_count + summary.low_usage_count
    );
}

#[test]
fn single_block_forecast_matches_reference() {
    init_tracing();

    let series = preprocess(&electricity_rows(), Resource::Electricity).unwrap();
    let config = AnalysisConfig::new(Resource::Electricity).with_block("A");
    let report = analyze(&series, &config).unwrap();

    assert!(report.comparison.is_none());

    let trends = report.trends.unwrap();
    assert!(trends.is_increasing);
    assert_relative_eq!(trends.average_daily_change, 15.0 / 9.0, epsilon = 1e-12);
    assert_eq!(trends.max_increase, 4.0);
    assert_eq!(trends.max_decrease, -1.0);

    let forecasts = report.prediction.unwrap();
    assert_eq!(forecasts.len(), 1);
    let prediction = &forecasts["A"];
    assert_eq!(prediction.last_actual_value, 115.0);
    assert_relative_eq!(prediction.next_day_prediction, 116.67241379310346, epsilon = 1e-9);
    assert_relative_eq!(prediction.predicted_change, 1.672413793103459, epsilon = 1e-9);
    assert_eq!(prediction.trend_direction, TrendDirection::Increasing);
    assert_eq!(prediction.next_week_predictions.len(), 7);
    assert_relative_eq!(
        prediction.next_week_predictions[6],
        127.22413793103448,
        epsilon = 1e-9
    );

    let metrics = prediction.model_metrics;
    assert_relative_eq!(metrics.r2_score, 0.8523656434873237, epsilon = 1e-9);
    assert_relative_eq!(metrics.mae, 1.6551724137931032, epsilon = 1e-9);
    assert_relative_eq!(metrics.rmse, metrics.mse.sqrt(), epsilon = 1e-12);
}

#[test]
fn water_anomalies_with_tight_threshold() {
    init_tracing();

    let rows: Vec<RawRecord> = [10.0, 10.0, 10.0, 10.0, 100.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| RawRecord::new(&format!("2024-05-{:02}", i + 1), "A", Resource::Water, v))
        .collect();
    let series = preprocess(&rows, Resource::Water).unwrap();

    let default = analyze(&series, &AnalysisConfig::new(Resource::Water)).unwrap();
    assert_eq!(default.anomaly_summary.unwrap().anomaly_count, 0);
    let bounds = default.anomaly_bounds.unwrap();
    assert_relative_eq!(bounds.mean, 28.0, epsilon = 1e-12);
    assert_relative_eq!(bounds.std_dev, 1620.0_f64.sqrt(), epsilon = 1e-9);

    let tight = AnalysisConfig::new(Resource::Water).with_threshold(1.0);
    let report = analyze(&series, &tight).unwrap();
    let anomalies = report.anomalies.unwrap();
    assert_eq!(anomalies[4].anomaly_type, AnomalyType::HighUsage);
    assert!(anomalies[..4].iter().all(|r| !r.is_anomaly));

    let summary = report.anomaly_summary.unwrap();
    assert_eq!(summary.high_usage_count, 1);
    assert_relative_eq!(summary.anomaly_percentage, 20.0, epsilon = 1e-12);
}

#[test]
fn date_window_and_calendar_features() {
    init_tracing();

    let series = preprocess(&electricity_rows(), Resource::Electricity).unwrap();
    let start = consumption_analytics::transform::parse_date("2024-01-08").unwrap();
    let config = AnalysisConfig::new(Resource::Electricity).with_date_range(Some(start), None);
    let report = analyze(&series, &config).unwrap();

    assert_eq!(report.record_count, 3);
    let comparison = report.comparison.unwrap();
    assert_eq!(comparison.len(), 1);
    assert!(comparison.contains_key("A"));

    let features = time_features(&series.filter_by_block("A"));
    assert_eq!(features[0].day_of_week, "Monday");
    assert_eq!(features[0].month, 1);
    assert_eq!(features[9].day_of_month, 10);
}

#[test]
fn report_serializes_anomaly_labels() {
    let series = preprocess(&electricity_rows(), Resource::Electricity).unwrap();
    let report = analyze(&series, &AnalysisConfig::new(Resource::Electricity)).unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    let first = &json["anomalies"][0];
    assert_eq!(first["hostel_block"], "A");
    assert_eq!(first["date"], "2024-01-01");
    assert_eq!(first["anomaly_type"], "Normal");
    assert_eq!(json["comparison"]["A"]["Count"], 10);
}
