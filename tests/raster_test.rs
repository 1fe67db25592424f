use rand::rngs::StdRng;
use rand::SeedableRng;

use spike_raster::binner::{BinnerConfig, SpikeTrainBinner};
use spike_raster::sampler;

const SEED: u64 = 42;

#[test]
fn test_random_trains_round_trip_counts() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let trials = sampler::rand_trials(20, 2.0, 10.0, &mut rng).unwrap();

    let binner = SpikeTrainBinner::build(
        trials,
        BinnerConfig {
            sample_rate: 100.0,
            t_min: Some(0.0),
            t_max: Some(2.0),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(binner.num_bins(), 200);
    let counts = binner.counts();
    assert_eq!(counts.shape(), (20, 200));

    // Binning preserves every spike, row by row
    for (row, trial) in binner.trials().iter().enumerate() {
        assert_eq!(
            counts.row(row).iter().copied().sum::<u32>(),
            trial.len() as u32
        );
    }

    // And is deterministic across calls
    assert_eq!(binner.counts(), counts);
}

#[test]
fn test_export_matches_accessors() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let trials = sampler::rand_trials(4, 1.0, 20.0, &mut rng).unwrap();

    let binner = SpikeTrainBinner::build(
        trials,
        BinnerConfig {
            sample_rate: 50.0,
            t_min: Some(-0.2),
            t_max: Some(1.0),
            events: Some(vec!["go".into(), "stop".into(), "go".into(), "stop".into()]),
            name: Some("unit_3".to_string()),
        },
    )
    .unwrap();

    let export = binner.export();
    assert_eq!(export.counts.shape(), (4, 60));
    assert_eq!(export.time.len(), binner.num_bins());
    assert_eq!(export.event_table.shape(), (4, 3));
    assert_eq!(export.event_id, vec![("go".into(), 0), ("stop".into(), 1)]);
    assert_eq!(export.t_min, -0.2);
    assert_eq!(export.sample_rate, 50.0);
    assert_eq!(export.name.as_deref(), Some("unit_3"));
}

#[test]
fn test_save_load_round_trip() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let trials = sampler::rand_trials(8, 1.5, 15.0, &mut rng).unwrap();

    let binner = SpikeTrainBinner::build(
        trials,
        BinnerConfig {
            sample_rate: 200.0,
            t_min: Some(0.0),
            t_max: Some(1.5),
            events: Some((0i64..8).map(|k| (k % 2).into()).collect()),
            name: Some("unit_1".to_string()),
        },
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binner.json");
    binner.save_to(&path).unwrap();
    let loaded = SpikeTrainBinner::load_from(&path).unwrap();

    assert_eq!(loaded, binner);
    assert_eq!(loaded.counts(), binner.counts());
    assert_eq!(loaded.event_table(), binner.event_table());
}
