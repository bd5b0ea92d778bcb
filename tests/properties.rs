use walkability::{
    BlockGroupRecord, BlockGroups, Catalog, ClassifiedTable, DEFAULT_SEED, RegionType, classify, competition_ranks,
};

/// Pseudo-random but fixed table: 400 block groups over 7 states.
fn table() -> ClassifiedTable {
    let states = ["A", "B", "C", "D", "E", "F", "G"];
    let records = (0..400u32).map(|i| {
        let scaled = 1.0 + f64::from((i * 37) % 90) / 10.0;
        let population = f64::from((i * 53) % 211);
        BlockGroupRecord::new(population, scaled)
            .with_raw(f64::from((i * 29) % 101))
            .with_state(states[i as usize % states.len()])
    });
    classify(BlockGroups::from_records(records, &Catalog::acs())).unwrap()
}

#[test]
fn weighted_index_stays_within_scaled_score_range() {
    let table = table();
    for name in table.region_names(RegionType::State) {
        let rows = table.subset(RegionType::State, name).unwrap();
        let scores = rows.iter().filter_map(|row| table.base().scaled_score(row)).collect::<Vec<_>>();
        let (lo, hi) = scores.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)));

        let index = rows.weighted_index();
        assert!(lo - 1e-9 <= index && index <= hi + 1e-9, "{name}: {index} outside [{lo}, {hi}]");
    }

    let unpopulated = table.all_rows().filter(|row| table.base().population(row) == 0.0);
    assert!(!unpopulated.is_empty());
    assert_eq!(unpopulated.weighted_index(), 0.0);
}

#[test]
fn summary_ranks_are_competition_ranks_of_the_index() {
    let summary = table().build_summary(RegionType::State).unwrap();
    let indices = summary.rows().iter().map(|row| row.weighted_index).collect::<Vec<_>>();
    let ranks = summary.rows().iter().map(|row| row.rank).collect::<Vec<_>>();

    assert_eq!(ranks, competition_ranks(&indices));
    assert!(indices.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(competition_ranks(&[7.0, 7.0, 5.0]), vec![1, 1, 3]);
}

#[test]
fn national_totals_match_the_whole_table() {
    let table = table();
    let national = table.build_summary(RegionType::National).unwrap();
    let states = table.build_summary(RegionType::State).unwrap();

    let state_total: f64 = states.rows().iter().map(|row| row.levels.total()).sum();
    assert_eq!(national.rows()[0].levels.total(), state_total);
    assert_eq!(national.rows()[0].levels.total(), table.all_rows().total_population());
}

#[test]
fn sampling_is_deterministic_and_bounded() {
    let table = table();
    let rows = table.subset(RegionType::State, "C").unwrap();

    let a = rows.sample(20, DEFAULT_SEED);
    let b = rows.sample(20, DEFAULT_SEED);
    assert_eq!(a.indices(), b.indices());
    assert_eq!(a.len(), 20);
    assert!(a.iter().all(|row| rows.indices().contains(&row)));
    assert_eq!(rows.sample(rows.len(), 1).indices(), rows.indices());
}
