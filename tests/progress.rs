extern crate chrono;
extern crate readthrough;
extern crate tempfile;

use chrono::NaiveDate;

use readthrough::files::FileStore;
use readthrough::progress::{ONBOARDED_KEY, PASSAGES_KEY, SELF_PACED_KEY, START_DATE_KEY};
use readthrough::{Clock, ErrorKind, KeyValueStore, MemoryStore, Plan, PlanDay, ProgressStore, Result};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store_on(today: NaiveDate) -> ProgressStore<MemoryStore> {
    ProgressStore::load(Plan::bundled(), MemoryStore::new(), Clock::Fixed(today))
}

/// Marks every passage of the selection at `index` as read.
fn read_day<S: KeyValueStore>(store: &mut ProgressStore<S>, index: usize) {
    let passages = store.selections()[index].passages().to_vec();
    for (pos, text) in passages.iter().enumerate() {
        if !store.has_read(text, pos) {
            store.toggle_read(text, pos);
        }
    }
}

/// A store whose every read and write fails.
#[derive(Debug, Default)]
struct FailingStore {
    attempted_writes: usize,
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(ErrorKind::Storage("unavailable".into()).into())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        self.attempted_writes += 1;
        Err(ErrorKind::Storage("unavailable".into()).into())
    }
}

#[test]
fn empty_storage_gives_defaults() {
    let store = store_on(date(2023, 5, 10));
    assert_eq!(store.start_date(), date(2023, 5, 10));
    assert!(!store.is_self_paced());
    assert!(!store.is_onboarded());
    assert!(store.read_state().is_empty());
    assert_eq!(store.index_for_today(), 0);
    assert_eq!(store.selected_index(), 0);
    // Nothing is written just by loading
    assert!(store.storage().is_empty());
}

#[test]
fn failing_reads_still_initialize() {
    let store = ProgressStore::load(Plan::bundled(), FailingStore::default(), Clock::Fixed(date(2024, 1, 1)));
    assert_eq!(store.start_date(), date(2024, 1, 1));
    assert!(!store.is_self_paced());
    assert!(!store.is_onboarded());
    assert!(store.read_state().is_empty());
    assert_eq!(store.cycle_length(), 366);
}

#[test]
fn failing_writes_still_update_memory() {
    let mut store = ProgressStore::load(Plan::bundled(), FailingStore::default(), Clock::Fixed(date(2023, 1, 11)));
    store.set_self_paced(true);
    store.set_onboarded(true);
    assert!(store.toggle_read("Genesis 1", 0));
    store.change_start_date(date(2023, 1, 1));

    assert!(store.is_self_paced());
    assert!(store.is_onboarded());
    assert_eq!(store.start_date(), date(2023, 1, 1));
    assert_eq!(store.index_for_today(), 10);
    assert!(store.storage().attempted_writes >= 5);
}

#[test]
fn corrupt_values_fall_back_to_defaults() {
    let mut storage = MemoryStore::new();
    storage.set(START_DATE_KEY, "the first of May").unwrap();
    storage.set(SELF_PACED_KEY, "yes").unwrap();
    storage.set(ONBOARDED_KEY, "TRUE").unwrap();
    storage.set(PASSAGES_KEY, "{not json").unwrap();

    let store = ProgressStore::load(Plan::bundled(), storage, Clock::Fixed(date(2023, 5, 1)));
    assert_eq!(store.start_date(), date(2023, 5, 1));
    assert!(!store.is_self_paced());
    assert!(!store.is_onboarded());
    assert!(store.read_state().is_empty());
}

#[test]
fn toggling_twice_restores_and_drops_the_key() {
    let mut store = store_on(date(2023, 1, 1));
    assert!(!store.has_read("Genesis 1", 0));

    assert!(store.toggle_read("Genesis 1", 0));
    assert!(store.has_read("Genesis 1", 0));
    assert!(!store.has_read("Genesis 1", 1));
    assert_eq!(store.storage().get(PASSAGES_KEY).unwrap(), Some(r#"{"Genesis 1+0":true}"#.to_owned()));

    assert!(!store.toggle_read("Genesis 1", 0));
    assert!(!store.has_read("Genesis 1", 0));
    assert_eq!(store.storage().get(PASSAGES_KEY).unwrap(), Some("{}".to_owned()));
}

#[test]
fn progress_survives_reloading() {
    let mut store = store_on(date(2023, 6, 1));
    store.set_start_date(date(2023, 1, 1));
    store.set_self_paced(true);
    store.set_onboarded(true);
    store.toggle_read("Ezra 1", 1);

    assert_eq!(store.storage().get(SELF_PACED_KEY).unwrap(), Some("true".to_owned()));
    assert_eq!(store.storage().get(ONBOARDED_KEY).unwrap(), Some("true".to_owned()));

    let storage = store.into_storage();
    let store = ProgressStore::load(Plan::bundled(), storage, Clock::Fixed(date(2023, 6, 1)));
    assert_eq!(store.start_date(), date(2023, 1, 1));
    assert!(store.is_self_paced());
    assert!(store.is_onboarded());
    assert!(store.has_read("Ezra 1", 1));
    assert_eq!(store.read_state().len(), 1);
}

#[test]
fn selections_follow_the_start_date() {
    let mut store = store_on(date(2023, 1, 1));
    assert_eq!(store.cycle_length(), 365);
    assert!(store.selections().iter().all(|s| !s.is_leap()));

    store.set_start_date(date(2024, 1, 1));
    assert_eq!(store.cycle_length(), 366);
    assert_eq!(store.selections().iter().filter(|s| s.is_leap()).count(), 1);
}

#[test]
fn calendar_index_counts_days_from_the_start() {
    let mut store = store_on(date(2022, 3, 15));
    store.set_start_date(date(2022, 3, 1));
    assert_eq!(store.index_for_today(), 14);
    assert_eq!(store.selected_index(), 14);
    assert_eq!(store.get_selection(None), store.selections().get(14));

    // Before the start date, the index wraps back from the end of the cycle
    store.set_start_date(date(2022, 3, 16));
    assert_eq!(store.index_for_today(), 364);
}

#[test]
fn set_start_date_keeps_read_passages() {
    let mut store = store_on(date(2023, 1, 5));
    store.toggle_read("Genesis 1", 0);
    store.set_start_date(date(2022, 12, 1));
    assert!(store.has_read("Genesis 1", 0));
}

#[test]
fn change_start_date_marks_days_before_today() {
    let mut store = store_on(date(2023, 1, 11));
    store.toggle_read("Revelation 22", 0);
    store.change_start_date(date(2023, 1, 1));

    assert_eq!(store.index_for_today(), 10);
    assert_eq!(store.selected_index(), 10);
    for i in 0..10 {
        assert!(store.is_day_complete(i), "day {}", i);
    }
    let day10 = store.selections()[10].passages().to_vec();
    assert!(day10.iter().enumerate().all(|(pos, text)| !store.has_read(text, pos)));
    assert!(!store.has_read("Revelation 22", 0));

    let expected: usize = store.selections()[..10].iter().map(|s| s.passages().len()).sum();
    assert_eq!(store.read_state().len(), expected);
    assert_eq!(store.completed_days(), 10);
}

#[test]
fn change_start_date_skips_the_leap_day() {
    // Feb 29 falls at offset 9 of this cycle
    let mut store = store_on(date(2024, 3, 5));
    store.change_start_date(date(2024, 2, 20));

    assert_eq!(store.index_for_today(), 14);
    assert!(store.selections()[9].is_leap());
    let plan = Plan::bundled();
    let expected: usize = (0..13).map(|k| plan.day(k).unwrap().passages().len()).sum();
    assert_eq!(store.read_state().len(), expected);
    assert!(!store.is_day_complete(14));
    assert_eq!(store.completed_days(), 13);
}

#[test]
fn change_start_date_to_today_clears_progress() {
    let mut store = store_on(date(2023, 8, 1));
    read_day(&mut store, 0);
    store.change_start_date(date(2023, 8, 1));
    assert!(store.read_state().is_empty());
    assert_eq!(store.storage().get(PASSAGES_KEY).unwrap(), Some("{}".to_owned()));
}

#[test]
fn self_paced_frontier_is_the_first_unfinished_day() {
    let mut store = store_on(date(2023, 9, 1));
    store.set_start_date(date(2023, 1, 1));
    store.set_self_paced(true);
    assert_eq!(store.index_for_today(), 0);

    for i in 0..5 {
        read_day(&mut store, i);
    }
    let first = store.selections()[5].passages()[0].clone();
    store.toggle_read(&first, 0);

    assert_eq!(store.index_for_today(), 5);
    assert_eq!(store.selected_index(), 5);

    // Reading ahead does not move the frontier past an unfinished day
    read_day(&mut store, 7);
    assert_eq!(store.index_for_today(), 5);
}

#[test]
fn self_paced_frontier_passes_over_the_leap_day() {
    let mut store = store_on(date(2024, 2, 25));
    store.set_self_paced(true);
    assert!(store.selections()[4].is_leap());

    for i in 0..4 {
        read_day(&mut store, i);
    }
    assert_eq!(store.index_for_today(), 5);
}

#[test]
fn self_paced_wraps_to_zero_when_everything_is_read() {
    let plan = Plan::from_days(vec![
        PlanDay::new(vec!["Genesis 1", "Matthew 1"]),
        PlanDay::new(vec!["Jude"]),
        PlanDay::new(vec!["Genesis 2", "Genesis 2"]),
    ]).unwrap();
    let mut store = ProgressStore::load(plan, MemoryStore::new(), Clock::Fixed(date(2023, 1, 1)));
    store.set_self_paced(true);
    read_day(&mut store, 0);
    read_day(&mut store, 1);
    assert_eq!(store.index_for_today(), 2);

    // The same passage twice in a day is tracked slot by slot
    store.toggle_read("Genesis 2", 0);
    assert_eq!(store.index_for_today(), 2);
    store.toggle_read("Genesis 2", 1);
    assert_eq!(store.index_for_today(), 0);
}

#[test]
fn navigation_wraps_without_saving() {
    let mut store = store_on(date(2023, 1, 1));
    store.set_start_date(date(2023, 1, 1));
    let saved = store.storage().len();

    store.previous_day(1);
    assert_eq!(store.selected_index(), 364);
    store.next_day(3);
    assert_eq!(store.selected_index(), 2);
    store.set_selected_index(400);
    assert_eq!(store.selected_index(), 35);
    assert_eq!(store.storage().len(), saved);
    // Today is still day 0
    assert_eq!(store.index_for_today(), 0);
}

#[test]
fn refresh_follows_date_rollover() {
    let mut store = store_on(date(2023, 4, 1));
    store.next_day(5);
    assert!(!store.refresh());
    assert_eq!(store.selected_index(), 5);

    let mut clock = store.clock();
    clock.advance(1);
    store.set_clock(clock);
    assert!(store.refresh());
    assert_eq!(store.index_for_today(), 1);
    assert_eq!(store.selected_index(), 1);
}

#[test]
fn reset_all_starts_over_today() {
    let mut store = store_on(date(2023, 7, 4));
    store.change_start_date(date(2023, 6, 1));
    assert!(!store.read_state().is_empty());

    store.reset_all();
    assert!(store.read_state().is_empty());
    assert_eq!(store.start_date(), date(2023, 7, 4));
    assert_eq!(store.index_for_today(), 0);
}

#[test]
fn file_store_keeps_progress_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let today = date(2023, 2, 1);
    {
        let storage = FileStore::open(&path).unwrap();
        let mut store = ProgressStore::load(Plan::bundled(), storage, Clock::Fixed(today));
        store.change_start_date(date(2023, 1, 29));
        store.set_onboarded(true);
    }

    let storage = FileStore::open(&path).unwrap();
    let store = ProgressStore::load(Plan::bundled(), storage, Clock::Fixed(today));
    assert_eq!(store.start_date(), date(2023, 1, 29));
    assert!(store.is_onboarded());
    assert_eq!(store.index_for_today(), 3);
    assert_eq!(store.completed_days(), 3);
}
