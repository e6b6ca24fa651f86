use building_standards_toolbox::standards::{
    find_record, find_record_with, find_records, BracketPolicy, LookupOptions, ReferenceRecord,
    SearchCriteria,
};

fn enclosed(min: f64, max: f64, efficiency: f64) -> ReferenceRecord {
    ReferenceRecord::new()
        .with("type", "Enclosed")
        .with("poles", 4)
        .with("minimum_capacity", min)
        .with("maximum_capacity", max)
        .with("efficiency", efficiency)
}

fn two_ranges() -> Vec<ReferenceRecord> {
    vec![enclosed(0.0, 5.0, 0.85), enclosed(5.0, 20.0, 0.90)]
}

fn enclosed_criteria() -> SearchCriteria {
    SearchCriteria::new().with("type", "Enclosed").with("poles", 4)
}

#[test]
fn bracket_selects_second_range() {
    let table = two_ranges();
    let found = find_record(&table, &enclosed_criteria(), Some(7.0)).expect("record");
    assert_eq!(found.number("efficiency"), Some(0.90));
}

#[test]
fn no_criteria_match_is_not_found() {
    let table = two_ranges();
    let criteria = SearchCriteria::new().with("type", "Open");
    assert!(find_record(&table, &criteria, Some(7.0)).is_none());
    // 레코드에 없는 키도 불일치
    let criteria = enclosed_criteria().with("voltage", 460);
    assert!(find_record(&table, &criteria, None).is_none());
}

#[test]
fn every_criteria_key_matches_exactly() {
    let mut table = two_ranges();
    table.push(
        ReferenceRecord::new()
            .with("type", "Open")
            .with("poles", 4)
            .with("minimum_capacity", 5.0)
            .with("maximum_capacity", 20.0)
            .with("efficiency", 0.7),
    );
    let criteria = SearchCriteria::new().with("type", "Open").with("poles", 4);
    let found = find_record(&table, &criteria, Some(7.0)).expect("record");
    assert_eq!(found.text("type"), Some("Open"));
    assert_eq!(found.number("efficiency"), Some(0.7));
}

#[test]
fn single_candidate_ignores_bracket() {
    let table = vec![enclosed(0.0, 5.0, 0.85)];
    let found = find_record(&table, &enclosed_criteria(), Some(50.0)).expect("record");
    assert_eq!(found.number("efficiency"), Some(0.85));
}

#[test]
fn shared_boundary_prefers_upper_range() {
    let table = two_ranges();
    let found = find_record(&table, &enclosed_criteria(), Some(5.0)).expect("record");
    assert_eq!(found.number("efficiency"), Some(0.90));
    // 마지막 구간의 상한은 닫힌 구간
    let found = find_record(&table, &enclosed_criteria(), Some(20.0)).expect("record");
    assert_eq!(found.number("efficiency"), Some(0.90));
}

#[test]
fn out_of_range_depends_on_policy() {
    let table = two_ranges();
    assert!(find_record(&table, &enclosed_criteria(), Some(25.0)).is_none());

    let options = LookupOptions::default().with_policy(BracketPolicy::Nearest);
    let found =
        find_record_with(&table, &enclosed_criteria(), Some(25.0), &options).expect("nearest");
    assert_eq!(found.number("efficiency"), Some(0.90));
}

#[test]
fn overlapping_ranges_return_first_in_table_order() {
    let table = vec![enclosed(0.0, 10.0, 0.81), enclosed(2.0, 8.0, 0.82)];
    let found = find_record(&table, &enclosed_criteria(), Some(4.0)).expect("record");
    assert_eq!(found.number("efficiency"), Some(0.81));
}

#[test]
fn missing_minimum_counts_as_zero() {
    let table = vec![
        ReferenceRecord::new()
            .with("type", "Enclosed")
            .with("poles", 4)
            .with("maximum_capacity", 5.0)
            .with("efficiency", 0.8),
        enclosed(5.0, 20.0, 0.9),
    ];
    let found = find_record(&table, &enclosed_criteria(), Some(1.0)).expect("record");
    assert_eq!(found.number("efficiency"), Some(0.8));
}

#[test]
fn wildcard_is_opt_in() {
    let table = vec![ReferenceRecord::new()
        .with("template", "90.1-2013")
        .with("climate_zone", "Any")
        .with("value", 1.0)];
    let criteria = SearchCriteria::new()
        .with("template", "90.1-2013")
        .with("climate_zone", "ASHRAE 169-2006-5A");
    assert!(find_record(&table, &criteria, None).is_none());

    let options = LookupOptions::default().with_wildcard("Any");
    assert!(find_record_with(&table, &criteria, None, &options).is_some());
}

#[test]
fn date_filter_keeps_active_records() {
    let table = vec![
        ReferenceRecord::new()
            .with("name", "old")
            .with("start_date", "1919-09-09")
            .with("end_date", "2015-10-24"),
        ReferenceRecord::new()
            .with("name", "new")
            .with("start_date", "2015-10-24")
            .with("end_date", "2999-09-09"),
    ];
    let criteria = SearchCriteria::new();
    let options = LookupOptions::default().with_date("2020-01-01");
    let found = find_record_with(&table, &criteria, None, &options).expect("record");
    assert_eq!(found.name(), Some("new"));

    let options = LookupOptions::default().with_date("2015-10-24");
    let found = find_record_with(&table, &criteria, None, &options).expect("record");
    assert_eq!(found.name(), Some("old"));
}

#[test]
fn lookup_is_idempotent_and_non_mutating() {
    let table = two_ranges();
    let before = table.clone();
    let a = find_record(&table, &enclosed_criteria(), Some(7.0)).cloned();
    let b = find_record(&table, &enclosed_criteria(), Some(7.0)).cloned();
    assert_eq!(a, b);
    assert_eq!(table, before);
}

#[test]
fn find_records_returns_all_bracketing() {
    let table = two_ranges();
    let all = find_records(&table, &enclosed_criteria(), None, &LookupOptions::default());
    assert_eq!(all.len(), 2);
    // 경계값은 두 구간 모두에 속한다
    let at_edge = find_records(&table, &enclosed_criteria(), Some(5.0), &LookupOptions::default());
    assert_eq!(at_edge.len(), 2);
    let inside = find_records(&table, &enclosed_criteria(), Some(7.0), &LookupOptions::default());
    assert_eq!(inside.len(), 1);
}

#[test]
fn criteria_from_pairs_parses_numbers_and_text() {
    let criteria = SearchCriteria::from_pairs(["type=Enclosed", "poles=4"]).expect("criteria");
    assert_eq!(criteria.len(), 2);
    let table = two_ranges();
    assert!(find_record(&table, &criteria, Some(7.0)).is_some());
    assert!(SearchCriteria::from_pairs(["poles"]).is_err());
}
