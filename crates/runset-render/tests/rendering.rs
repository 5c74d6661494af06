//! End-to-end rendering over synthetic run sets

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal};
use runset_confidence::{error_factor, ConfidenceLevel, LowerBound};
use runset_core::{Error, Observation, Result, RunRecord, RunSet, Sample};
use runset_quantile::GridSpec;
use runset_render::{CiBand, MultiLevelRenderer, PlotSurface, RenderConfig};
use std::collections::BTreeMap;
use std::sync::Mutex;

fn small_grid(points: usize) -> RenderConfig {
    RenderConfig::default().with_grid(GridSpec::default().with_points(points).with_range(0.0, 1.0))
}

fn lognormal_runs(seed: u64, runs: u32, n: usize) -> RunSet<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = LogNormal::new(1.0, 0.3).unwrap();
    (0..runs)
        .map(|r| {
            let values: Vec<f64> = (0..n).map(|_| dist.sample(&mut rng)).collect();
            (r, Sample::from(values))
        })
        .collect()
}

#[derive(Default)]
struct RecordingSurface {
    calls: Mutex<Vec<String>>,
}

impl PlotSurface for RecordingSurface {
    fn fill_band(&self, grid: &[f64], band: &CiBand) -> Result<()> {
        assert_eq!(grid.len(), band.len());
        self.calls.lock().unwrap().push(format!("band {}", band.label));
        Ok(())
    }

    fn center_line(&self, x: &[f64], y: &[f64]) -> Result<()> {
        assert_eq!(x.len(), y.len());
        self.calls.lock().unwrap().push("center".to_string());
        Ok(())
    }
}

#[test]
fn test_three_run_median() {
    let runs: RunSet = [
        ("A".to_string(), Sample::from(vec![1.0, 2.0, 3.0])),
        ("B".to_string(), Sample::from(vec![2.0, 3.0, 4.0])),
        ("C".to_string(), Sample::from(vec![3.0, 4.0, 5.0])),
    ]
    .into_iter()
    .collect();

    let rendered = MultiLevelRenderer::new(small_grid(3))
        .render_strict(&runs, None, &[3])
        .unwrap();
    assert_eq!(rendered.grid().points(), &[0.0, 0.5, 1.0]);

    let band = rendered.center_band().unwrap();
    assert_eq!(band.label, "n=3");
    assert_eq!(band.fill_opacity, 0.5);

    // estimates at q = 0.5 are 2, 3, 4
    let z = error_factor(3, ConfidenceLevel::NINETY_FIVE).unwrap();
    let half = z * (2.0_f64 / 3.0).sqrt();
    assert_relative_eq!(band.mean[1], 3.0);
    assert_relative_eq!(band.lower[1], 3.0 - half, epsilon = 1e-12);
    assert_relative_eq!(band.upper[1], 3.0 + half, epsilon = 1e-12);

    // t(0.975, 2) = 4.302652729911275
    assert_relative_eq!(band.lower[1], 0.515_862_288_156_248, epsilon = 1e-9);
    assert_relative_eq!(band.upper[1], 5.484_137_711_843_752, epsilon = 1e-9);
}

#[test]
fn test_failed_runs_relabel_as_hundred() {
    // 100 runs requested, 3 of them produced nothing
    let dead = [5, 50, 95];
    let all = lognormal_runs(11, 100, 20);
    let mut runs = all.clone();
    for key in dead {
        runs.insert(key, Sample::default());
    }
    let live: RunSet<u32> = all
        .iter()
        .filter(|(key, _)| !dead.contains(*key))
        .map(|(key, record)| (*key, record.clone()))
        .collect();
    assert_eq!(live.len(), 97);

    let renderer = MultiLevelRenderer::new(small_grid(21));
    let rendered = renderer.render_strict(&runs, None, &[100]).unwrap();
    let band = rendered.center_band().unwrap();
    assert_eq!(band.level_requested, 100);
    assert_eq!(band.level_effective, 97);
    assert_eq!(band.label, "n=100");

    // the numbers are those of the 97 live runs
    let rendered_live = renderer.render_strict(&live, None, &[97]).unwrap();
    let live_band = rendered_live.center_band().unwrap();
    assert_eq!(live_band.label, "n=100");
    assert_eq!(band.mean, live_band.mean);
    assert_eq!(band.lower, live_band.lower);
    assert_eq!(band.upper, live_band.upper);
}

#[test]
fn test_single_run_is_rejected() {
    let runs = lognormal_runs(3, 1, 10);
    let result = MultiLevelRenderer::new(small_grid(5)).render_strict(&runs, None, &[1]);
    assert!(matches!(result, Err(Error::InsufficientData { expected: 2, actual: 1 })));
}

#[test]
fn test_more_runs_tighten_the_band() {
    let runs = lognormal_runs(42, 40, 200);
    let rendered = MultiLevelRenderer::new(RenderConfig::default())
        .render_strict(&runs, None, &[40, 5])
        .unwrap();

    let bands: Vec<&CiBand> = rendered.bands().collect();
    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0].level_effective, 5);
    assert_eq!(bands[1].level_effective, 40);

    let mean_width = |band: &CiBand| {
        band.triples().map(|(l, _, u)| u - l).sum::<f64>() / band.len() as f64
    };
    assert!(mean_width(bands[1]) < mean_width(bands[0]));

    for band in &bands {
        assert_eq!(band.len(), 1000);
        for (lower, mean, upper) in band.triples() {
            assert!(lower >= 0.0);
            assert!(lower <= mean && mean <= upper);
        }
        assert!(band.mean.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_resolution_widens_band() {
    let exact = lognormal_runs(5, 6, 50);
    let coarse: RunSet<u32> = exact
        .iter()
        .map(|(key, record)| {
            let RunRecord::Flat(sample) = record else {
                unreachable!("synthetic runs are flat")
            };
            let widened: Sample = sample
                .observations()
                .iter()
                .map(|o| Observation::new(o.value(), 0.5))
                .collect();
            (*key, widened)
        })
        .collect();

    let renderer = MultiLevelRenderer::new(small_grid(11).with_lower_bound(LowerBound::Unbounded));
    let narrow = renderer.render_strict(&exact, None, &[6]).unwrap();
    let wide = renderer.render_strict(&coarse, None, &[6]).unwrap();

    let narrow = narrow.center_band().unwrap();
    let wide = wide.center_band().unwrap();
    for i in 0..narrow.len() {
        assert_eq!(narrow.mean[i], wide.mean[i]);
        assert!(wide.upper[i] - wide.lower[i] > narrow.upper[i] - narrow.lower[i]);
    }
}

#[test]
fn test_bucket_selection() {
    let runs: RunSet = (0..4)
        .map(|i| {
            let mut buckets = BTreeMap::new();
            buckets.insert("50KiB".to_string(), Sample::from(vec![1.0 + i as f64, 2.0]));
            buckets.insert("5MiB".to_string(), Sample::from(vec![10.0 + i as f64, 20.0]));
            (format!("run{i}"), RunRecord::Bucketed(buckets))
        })
        .collect();

    let renderer = MultiLevelRenderer::new(small_grid(3));
    let small = renderer.render_strict(&runs, Some("50KiB"), &[4]).unwrap();
    let large = renderer.render_strict(&runs, Some("5MiB"), &[4]).unwrap();
    assert!(small.center_band().unwrap().mean[0] < large.center_band().unwrap().mean[0]);

    let missing = renderer.render(&runs, Some("1MiB"), &[4]).unwrap();
    assert!(matches!(
        missing.failures().next(),
        Some((4, Error::InvalidInput(_)))
    ));
}

#[test]
fn test_draw_order() {
    let runs = lognormal_runs(9, 10, 30);
    let rendered = MultiLevelRenderer::new(small_grid(5).with_label_prefix("x "))
        .render(&runs, None, &[10, 1, 2])
        .unwrap();

    let surface = RecordingSurface::default();
    rendered.draw(&surface).unwrap();
    assert_eq!(
        surface.calls.into_inner().unwrap(),
        vec!["band x n=2", "band x n=10", "center"]
    );
}

#[test]
fn test_band_serializes() {
    let runs = lognormal_runs(1, 3, 10);
    let rendered = MultiLevelRenderer::new(small_grid(2))
        .render_strict(&runs, None, &[3])
        .unwrap();
    let json = serde_json::to_string(rendered.center_band().unwrap()).unwrap();
    let back: CiBand = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, rendered.center_band().unwrap());
}
