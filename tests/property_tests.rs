//! Property-based tests for the record table engine.
//!
//! Tests validate:
//! 1. Search never invents rows and every hit contains the term
//! 2. Sorting is stable for equal keys
//! 3. Pages partition the filtered set
//! 4. Boundary navigation and page-size changes

use proptest::prelude::*;
use selfcert::export::{export_table, CollectingSink, ExportOptions, ExportSource};
use selfcert::model::{fields, FetchError, Record, RecordId};
use selfcert::notify::{NotificationLog, NotificationVariant};
use selfcert::state::{FetchOutcome, PageSize, RecordTable, SortSpec, TableOptions};

// ===== Strategies =====

fn records_strategy(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(("[a-dA-D ]{0,6}", "(Active|Pending|Expired)"), 0..max).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (country, status))| {
                    Record::new(RecordId::new(format!("r{i:03}")).unwrap())
                        .with_field(fields::COUNTRY, country)
                        .with_field(fields::STATUS, status)
                })
                .collect()
        },
    )
}

fn table_with(records: Vec<Record>, page_size: PageSize) -> RecordTable {
    let options = TableOptions {
        page_size,
        ..TableOptions::default()
    };
    RecordTable::with_records(options, records)
}

fn ids(rows: &[&Record]) -> Vec<String> {
    rows.iter().map(|r| r.id().to_string()).collect()
}

// ===== Property 1: Search =====

proptest! {
    #[test]
    fn blank_search_keeps_every_row(
        records in records_strategy(40),
        blank in "[ \t]{0,3}",
    ) {
        let mut table = table_with(records.clone(), PageSize::All);

        table.set_search(&blank);

        prop_assert_eq!(table.filtered_count(), records.len());
        prop_assert!(!table.no_results());
    }

    #[test]
    fn search_hits_are_a_subset_containing_the_term(
        records in records_strategy(40),
        term in "[a-dA-D]{1,2}",
    ) {
        let mut table = table_with(records.clone(), PageSize::All);

        table.set_search(&term);

        let needle = term.to_lowercase();
        for row in table.filtered() {
            prop_assert!(records.iter().any(|r| r.id() == row.id()));
            let hit = row.id().as_str().to_lowercase().contains(&needle)
                || row
                    .display_fields()
                    .any(|(_, value)| value.to_lowercase().contains(&needle));
            prop_assert!(hit, "row {} does not contain {:?}", row.id(), term);
        }
        let expected = records
            .iter()
            .filter(|r| {
                r.text(fields::COUNTRY).to_lowercase().contains(&needle)
                    || r.text(fields::STATUS).to_lowercase().contains(&needle)
            })
            .count();
        prop_assert_eq!(table.filtered_count(), expected);
    }
}

// ===== Property 2: Stable sort =====

proptest! {
    #[test]
    fn sort_keeps_input_order_for_equal_keys(records in records_strategy(40)) {
        let mut table = table_with(records, PageSize::All);

        table.sort_by(SortSpec::ascending(fields::STATUS));

        let sorted = table.filtered();
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.text(fields::STATUS) <= b.text(fields::STATUS));
            if a.text(fields::STATUS) == b.text(fields::STATUS) {
                // ids were assigned in input order
                prop_assert!(a.id().as_str() < b.id().as_str());
            }
        }
    }
}

// ===== Property 3: Pages partition the result =====

proptest! {
    #[test]
    fn pages_concatenate_to_filtered_set(
        records in records_strategy(60),
        page_size in 1usize..15,
        descending in any::<bool>(),
    ) {
        let mut table = table_with(records, PageSize::rows(page_size).unwrap());
        let spec = if descending {
            SortSpec::descending(fields::COUNTRY)
        } else {
            SortSpec::ascending(fields::COUNTRY)
        };
        table.sort_by(spec);
        let expected = ids(&table.filtered());

        let mut seen = Vec::new();
        for page in 1..=table.total_pages() {
            table.go_to_page(page);
            let rows = table.visible();
            prop_assert!(rows.len() <= page_size);
            prop_assert!(!rows.is_empty());
            seen.extend(ids(&rows));
        }

        prop_assert_eq!(seen, expected);
    }
}

// ===== Property 4: Navigation boundaries =====

proptest! {
    #[test]
    fn navigation_stops_at_both_ends(
        records in records_strategy(40),
        page_size in 1usize..10,
    ) {
        let mut table = table_with(records, PageSize::rows(page_size).unwrap());

        prop_assert!(!table.previous_page());
        prop_assert_eq!(table.current_page(), 1);

        let last = table.total_pages().max(1);
        table.go_to_page(last);
        prop_assert!(!table.next_page());
        prop_assert_eq!(table.current_page(), last);
    }

    #[test]
    fn page_size_change_resets_to_first_page(
        records in records_strategy(60),
        first in 1usize..10,
        second in 1usize..10,
    ) {
        let count = records.len();
        let mut table = table_with(records, PageSize::rows(first).unwrap());
        table.go_to_page(table.total_pages());

        table.set_page_size(PageSize::rows(second).unwrap());

        prop_assert_eq!(table.current_page(), 1);
        prop_assert_eq!(table.total_pages(), count.div_ceil(second));
    }
}

// ===== Examples =====

#[test]
fn search_fr_finds_france_only() {
    let records = vec![
        Record::new(RecordId::new("1").unwrap())
            .with_field(fields::COUNTRY, "US")
            .with_field(fields::STATUS, "Active"),
        Record::new(RecordId::new("2").unwrap())
            .with_field(fields::COUNTRY, "FR")
            .with_field(fields::STATUS, "Pending"),
    ];
    let mut table = table_with(records, PageSize::default());

    table.set_search("fr");

    let rows = table.visible();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text(fields::COUNTRY), "FR");
}

#[test]
fn twenty_five_rows_make_three_pages() {
    let records = (0..25)
        .map(|i| Record::new(RecordId::new(format!("r{i}")).unwrap()))
        .collect();
    let mut table = table_with(records, PageSize::rows(10).unwrap());

    assert_eq!(table.total_pages(), 3);
    table.go_to_page(3);
    assert_eq!(table.visible().len(), 5);
}

#[test]
fn export_of_nothing_warns_without_artifact() {
    let mut table = table_with(Vec::new(), PageSize::default());
    let mut sink = CollectingSink::new();
    let mut log = NotificationLog::default();
    let options = ExportOptions {
        source: ExportSource::SelectionOrVisible,
        ..ExportOptions::default()
    };

    let report = export_table(&mut table, &options, &mut sink, &mut log).unwrap();

    assert!(report.is_none());
    assert!(sink.artifacts().is_empty());
    assert_eq!(log.latest().unwrap().variant, NotificationVariant::Warning);
}

#[test]
fn stale_fetch_is_ignored() {
    let mut table = table_with(Vec::new(), PageSize::default());
    let stale = table.begin_fetch();
    let fresh = table.begin_fetch();

    let fresh_records = vec![Record::new(RecordId::new("new").unwrap())];
    assert_eq!(
        table.complete_fetch(fresh, Ok(fresh_records)),
        FetchOutcome::Applied { loaded: 1 }
    );
    assert_eq!(
        table.complete_fetch(stale, Err(FetchError::Service("late".to_string()))),
        FetchOutcome::Stale
    );

    assert_eq!(table.total_count(), 1);
    assert!(table.last_error().is_none());
}
