use census_chart::data_types::{Dataset, Field, Record};
use census_chart::scales::{compute_scale, nice_domain, ChartScale};
use rand::Rng;

fn record(abbr: &str, poverty: f64, healthcare: f64) -> Record {
    Record {
        abbr: abbr.to_string(),
        state: abbr.to_string(),
        poverty,
        income: 40_000.0,
        age: 38.0,
        healthcare,
        obesity: 30.0,
        smokes: 18.0,
    }
}

#[test]
fn test_compute_scale_maps_extent_onto_range() {
    let dataset = Dataset::new(vec![
        record("AA", 10.0, 5.0),
        record("BB", 20.0, 5.0),
        record("CC", 30.0, 5.0),
    ]);
    let scale = compute_scale(&dataset, Field::Poverty, (0.0, 600.0));

    assert!(scale.map(10.0).abs() < 1.0, "10 -> {}", scale.map(10.0));
    assert!((scale.map(30.0) - 600.0).abs() < 1.0, "30 -> {}", scale.map(30.0));
    assert!((scale.map(20.0) - 300.0).abs() < 1.0);
}

#[test]
fn test_compute_scale_inverted_y_range() {
    let dataset = Dataset::new(vec![record("AA", 10.0, 4.0), record("BB", 20.0, 16.0)]);
    let scale = compute_scale(&dataset, Field::Healthcare, (500.0, 0.0));

    assert!(scale.map(16.0) < scale.map(4.0), "larger values must plot higher");
    let (lo, hi) = scale.domain();
    assert_eq!(scale.map(lo), 500.0);
    assert_eq!(scale.map(hi), 0.0);
}

#[test]
fn test_compute_scale_domain_covers_every_value() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let records: Vec<Record> = (0..rng.random_range(1..60))
            .map(|i| Record {
                abbr: format!("S{i}"),
                state: format!("State {i}"),
                poverty: rng.random_range(5.0..30.0),
                income: rng.random_range(30_000.0..80_000.0),
                age: rng.random_range(28.0..45.0),
                healthcare: rng.random_range(2.0..25.0),
                obesity: rng.random_range(18.0..40.0),
                smokes: rng.random_range(8.0..30.0),
            })
            .collect();
        let dataset = Dataset::new(records);

        for field in Field::X_FIELDS.iter().chain(Field::Y_FIELDS.iter()) {
            let scale = compute_scale(&dataset, *field, (0.0, 400.0));
            let (lo, hi) = scale.domain();
            for r in dataset.iter() {
                let v = r.value(*field);
                assert!(lo <= v && v <= hi, "{field}: {v} outside [{lo}, {hi}]");
            }
        }
    }
}

#[test]
fn test_compute_scale_does_not_touch_dataset() {
    let dataset = Dataset::new(vec![record("AA", 12.5, 3.0), record("BB", 17.25, 9.0)]);
    let before = dataset.clone();
    let _ = compute_scale(&dataset, Field::Poverty, (0.0, 100.0));
    assert_eq!(dataset, before);
}

#[test]
fn test_compute_scale_skips_nan() {
    let dataset = Dataset::new(vec![
        record("AA", 10.0, 1.0),
        record("BB", f64::NAN, 2.0),
        record("CC", 30.0, 3.0),
    ]);
    let scale = compute_scale(&dataset, Field::Poverty, (0.0, 600.0));
    let (lo, hi) = scale.domain();
    assert!(lo.is_finite() && hi.is_finite());
    assert_eq!(scale.map(f64::NAN), 0.0, "NaN values land on the range start");
}

#[test]
fn test_compute_scale_empty_dataset() {
    let scale = compute_scale(&Dataset::default(), Field::Income, (0.0, 100.0));
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn test_nice_domain_rounds_outwards() {
    assert_eq!(nice_domain(0.3, 9.7, 10), (0.0, 10.0));
    assert_eq!(nice_domain(10.0, 30.0, 10), (10.0, 30.0));
    assert_eq!(nice_domain(38_000.0, 61_000.0, 10), (38_000.0, 62_000.0));
    assert_eq!(nice_domain(9.7, 0.3, 10), (10.0, 0.0), "reversed domains stay reversed");
}

#[test]
fn test_scale_zero_domain() {
    let scale = ChartScale::new_nice((10.0, 10.0), (0.0, 100.0), 10);
    let mapped = scale.map(10.0);
    assert!(!mapped.is_nan());
    assert!((0.0..=100.0).contains(&mapped), "{mapped} outside range");
}

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 500.0);

    assert_eq!(scale.invert(250.0), 50.0);
}

#[test]
fn test_chart_scale_formatting() {
    let scale = ChartScale::new_linear((0.0, 1.0), (0.0, 100.0));
    assert_eq!(scale.format_tick(0.000123), "0.0001");
    assert_eq!(scale.format_tick(12.5), "12.5");
    assert_eq!(scale.format_tick(20.0), "20");
    assert_eq!(scale.format_tick(45_000.0), "45000");
}
