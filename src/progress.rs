//! This module provides the `ProgressStore`, which keeps track of where a
//! reader is in the plan and which passages they have read, and saves every
//! change to a `KeyValueStore` as it happens.
//!
//! Nothing here fails because of storage. Values that cannot be read fall
//! back to their defaults, and values that cannot be written are still
//! changed in memory, so the current session carries on normally. Both
//! cases are logged at the `warn` level.

use std::collections::btree_set;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde_json::{self, Value};

use super::calendar::{date_from_timestamp, date_to_timestamp, index_for_date_from_start_date, Clock};
use super::errors::*;
use super::passage::passage_key;
use super::plan::{build_selections_with_leap, Plan, Selection};
use super::store::KeyValueStore;

/// Storage key of the plan start date
pub const START_DATE_KEY: &str = "startDate";
/// Storage key of the self-paced flag
pub const SELF_PACED_KEY: &str = "selfPaced";
/// Storage key of the onboarding flag
pub const ONBOARDED_KEY: &str = "onboarded";
/// Storage key of the read passages
pub const PASSAGES_KEY: &str = "passages";

/// The set of passage keys that have been read.
///
/// Only read passages are stored, so the saved form grows with the number
/// of passages read rather than with the size of the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadState {
    keys: BTreeSet<String>,
}

impl ReadState {
    pub fn new() -> ReadState {
        ReadState::default()
    }

    /// Parses the saved form, a JSON object mapping keys to `true`.
    /// Entries with any other value are unread and are dropped.
    pub fn from_json(s: &str) -> Result<ReadState> {
        let map: BTreeMap<String, Value> = serde_json::from_str(s)
            .chain_err(|| ErrorKind::Json("could not parse read passages".into()))?;
        Ok(ReadState {
            keys: map.into_iter()
                .filter(|&(_, ref v)| *v == Value::Bool(true))
                .map(|(k, _)| k)
                .collect(),
        })
    }

    /// Returns the saved form of the set.
    pub fn to_json(&self) -> Result<String> {
        let map: BTreeMap<&str, bool> = self.keys.iter().map(|k| (k.as_str(), true)).collect();
        serde_json::to_string(&map).chain_err(|| ErrorKind::Json("could not serialize read passages".into()))
    }

    /// Returns whether the passage with this key has been read.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Marks the passage with this key as read.
    pub fn insert(&mut self, key: String) {
        self.keys.insert(key);
    }

    /// Flips the read mark of a key, returning whether it is now read.
    pub fn toggle(&mut self, key: String) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Returns the number of read passages.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns an iterator over the keys of read passages, in sorted order.
    pub fn keys(&self) -> btree_set::Iter<String> {
        self.keys.iter()
    }
}

/// Everything about a reader's progress that is saved between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    pub start_date: NaiveDate,
    pub self_paced: bool,
    pub onboarded: bool,
    pub read_state: ReadState,
}

/// A reader's progress through a plan, saved to `S` on every change.
///
/// The leap-adjusted selections are rebuilt only when the start date
/// changes. "Today" is read from the clock on every query; call `refresh`
/// when the date may have rolled over so that the selected day follows it.
#[derive(Debug)]
pub struct ProgressStore<S> {
    storage: S,
    clock: Clock,
    plan: Plan,
    config: PlanConfig,
    selections: Vec<Selection>,
    /// The value of `index_for_today` when it was last checked
    today_index: usize,
    /// The day being viewed, which follows `today_index` whenever it changes
    selected_index: usize,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Loads progress from `storage`, using defaults for anything missing
    /// or unreadable: a plan starting today, calendar pacing, not onboarded
    /// and nothing read.
    pub fn load(plan: Plan, storage: S, clock: Clock) -> ProgressStore<S> {
        let config = PlanConfig {
            start_date: load_date(&storage, START_DATE_KEY).unwrap_or_else(|| clock.today()),
            self_paced: load_bool(&storage, SELF_PACED_KEY),
            onboarded: load_bool(&storage, ONBOARDED_KEY),
            read_state: load_read_state(&storage),
        };
        let selections = build_selections_with_leap(&plan, config.start_date);
        let mut store = ProgressStore {
            storage: storage,
            clock: clock,
            plan: plan,
            config: config,
            selections: selections,
            today_index: 0,
            selected_index: 0,
        };
        store.today_index = store.index_for_today();
        store.selected_index = store.today_index;
        debug!("loaded progress: start {}, self-paced {}, {} passages read, today is day {}",
               store.config.start_date,
               store.config.self_paced,
               store.config.read_state.len(),
               store.today_index);
        store
    }

    /// Returns the saved configuration.
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn start_date(&self) -> NaiveDate {
        self.config.start_date
    }

    pub fn is_self_paced(&self) -> bool {
        self.config.self_paced
    }

    pub fn is_onboarded(&self) -> bool {
        self.config.onboarded
    }

    pub fn read_state(&self) -> &ReadState {
        &self.config.read_state
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Gives back the underlying storage, consuming the store.
    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Replaces the clock. The selected day is not moved until `refresh`.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    /// Returns the leap-adjusted days of the current cycle.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Returns the number of days in the current cycle (365 or 366 for the
    /// bundled plan).
    pub fn cycle_length(&self) -> usize {
        self.selections.len()
    }

    /// Returns the day the reader should be on.
    ///
    /// When self-paced, this is the first plan day that is not completely
    /// read; leap days never hold it back, and a fully read plan starts
    /// over at 0. Otherwise it is today's offset from the start date.
    pub fn index_for_today(&self) -> usize {
        if self.config.self_paced {
            self.frontier()
        } else {
            self.index_for_date(self.clock.today())
        }
    }

    /// Returns the day of the cycle that `date` falls on.
    pub fn index_for_date(&self, date: NaiveDate) -> usize {
        index_for_date_from_start_date(date, self.config.start_date, self.selections.len())
    }

    fn frontier(&self) -> usize {
        self.selections
            .iter()
            .enumerate()
            .find(|&(i, sel)| !sel.is_leap() && !self.is_day_complete(i))
            .map_or(0, |(i, _)| i)
    }

    /// Returns the day currently being viewed.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Returns the selection at `index`, or at today's index if `None`.
    pub fn get_selection(&self, index: Option<usize>) -> Option<&Selection> {
        let index = index.unwrap_or_else(|| self.index_for_today());
        self.selections.get(index)
    }

    /// Returns whether the passage in slot `position` has been read.
    pub fn has_read(&self, text: &str, position: usize) -> bool {
        self.config.read_state.contains(&passage_key(text, position))
    }

    /// Returns whether every passage of the day at `index` has been read.
    /// Leap days are always complete; days past the end never are.
    pub fn is_day_complete(&self, index: usize) -> bool {
        match self.selections.get(index) {
            Some(sel) => sel.passages().iter().enumerate().all(|(pos, text)| self.has_read(text, pos)),
            None => false,
        }
    }

    /// Returns the number of plan days (not counting a leap day) that have
    /// been read completely.
    pub fn completed_days(&self) -> usize {
        (0..self.selections.len())
            .filter(|&i| !self.selections[i].is_leap() && self.is_day_complete(i))
            .count()
    }

    /// Sets the start date without touching the read passages.
    pub fn set_start_date(&mut self, date: NaiveDate) {
        let changed = date != self.config.start_date;
        self.config.start_date = date;
        self.persist(START_DATE_KEY, &date_to_timestamp(date));
        if changed {
            self.rebuild();
        }
        self.sync_today();
    }

    pub fn set_self_paced(&mut self, self_paced: bool) {
        self.config.self_paced = self_paced;
        self.persist(SELF_PACED_KEY, &self_paced.to_string());
        self.sync_today();
    }

    pub fn set_onboarded(&mut self, onboarded: bool) {
        self.config.onboarded = onboarded;
        self.persist(ONBOARDED_KEY, &onboarded.to_string());
    }

    /// Flips the read mark of the passage in slot `position`, returning
    /// whether it is now read.
    pub fn toggle_read(&mut self, text: &str, position: usize) -> bool {
        let read = self.config.read_state.toggle(passage_key(text, position));
        self.persist_read_state();
        self.sync_today();
        read
    }

    /// Restarts the plan on `date` and marks everything before today as
    /// read, for a reader who has kept up with the plan since `date`.
    pub fn change_start_date(&mut self, date: NaiveDate) {
        self.config.read_state.clear();
        self.persist_read_state();

        self.config.start_date = date;
        self.persist(START_DATE_KEY, &date_to_timestamp(date));
        self.rebuild();

        let today = index_for_date_from_start_date(self.clock.today(), date, self.selections.len());
        for sel in self.selections[..today].iter().filter(|sel| !sel.is_leap()) {
            for (pos, text) in sel.passages().iter().enumerate() {
                self.config.read_state.insert(passage_key(text, pos));
            }
        }
        self.persist_read_state();
        info!("restarted plan on {}: marked {} passages before day {} as read",
              date,
              self.config.read_state.len(),
              today);
        self.sync_today();
    }

    /// Forgets all read passages and starts the plan over today.
    pub fn reset_all(&mut self) {
        self.config.read_state.clear();
        self.persist_read_state();
        let today = self.clock.today();
        self.set_start_date(today);
        info!("reset progress; plan starts {}", today);
    }

    /// Views the given day, wrapping around the end of the cycle.
    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index % self.selections.len().max(1);
    }

    /// Moves the viewed day forward by the given number of days, wrapping
    /// around the cycle. A negative increment can be specified.
    pub fn next_day(&mut self, inc: i64) {
        let len = self.selections.len().max(1) as i64;
        self.selected_index = (self.selected_index as i64 + inc).rem_euclid(len) as usize;
    }

    /// Moves the viewed day back by the given number of days.
    ///
    /// This is simply a shortcut for using `next_day` with a negative
    /// increment.
    pub fn previous_day(&mut self, dec: i64) {
        self.next_day(-dec)
    }

    /// Checks whether today's index has changed (after the date rolls over,
    /// for example), and if so selects the new day. Returns whether the
    /// selected day was reset.
    pub fn refresh(&mut self) -> bool {
        self.sync_today()
    }

    fn rebuild(&mut self) {
        self.selections = build_selections_with_leap(&self.plan, self.config.start_date);
    }

    fn sync_today(&mut self) -> bool {
        let today = self.index_for_today();
        if today != self.today_index || self.selected_index >= self.selections.len() {
            self.today_index = today;
            self.selected_index = today;
            true
        } else {
            false
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!("could not save '{}': {}", key, e);
        }
    }

    fn persist_read_state(&mut self) {
        match self.config.read_state.to_json() {
            Ok(json) => self.persist(PASSAGES_KEY, &json),
            Err(e) => warn!("could not save '{}': {}", PASSAGES_KEY, e),
        }
    }
}

/// Reads a raw value, treating a failed read as a missing one.
fn load_value<S: KeyValueStore>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(v) => v,
        Err(e) => {
            warn!("could not read '{}': {}", key, e);
            None
        }
    }
}

fn load_date<S: KeyValueStore>(storage: &S, key: &str) -> Option<NaiveDate> {
    let raw = load_value(storage, key)?;
    match date_from_timestamp(&raw) {
        Ok(d) => Some(d),
        Err(e) => {
            warn!("ignoring stored '{}': {}", key, e);
            None
        }
    }
}

fn load_bool<S: KeyValueStore>(storage: &S, key: &str) -> bool {
    load_value(storage, key).map_or(false, |v| v == "true")
}

fn load_read_state<S: KeyValueStore>(storage: &S) -> ReadState {
    let raw = match load_value(storage, PASSAGES_KEY) {
        Some(raw) => raw,
        None => return ReadState::new(),
    };
    ReadState::from_json(&raw).unwrap_or_else(|e| {
        warn!("ignoring stored '{}': {}", PASSAGES_KEY, e);
        ReadState::new()
    })
}

/// Owns the progress store for the lifetime of a session.
///
/// The store is loaded once by `hydrate` and released by `teardown`;
/// asking for it outside that window is an error.
#[derive(Debug)]
pub struct PlanProvider<S> {
    store: Option<ProgressStore<S>>,
}

impl<S> Default for PlanProvider<S> {
    fn default() -> PlanProvider<S> {
        PlanProvider { store: None }
    }
}

impl<S: KeyValueStore> PlanProvider<S> {
    pub fn new() -> PlanProvider<S> {
        PlanProvider::default()
    }

    /// Loads the store if it has not been loaded yet, and returns it.
    /// Once hydrated, later calls return the existing store unchanged.
    pub fn hydrate(&mut self, plan: Plan, storage: S, clock: Clock) -> &mut ProgressStore<S> {
        if self.store.is_some() {
            debug!("progress store already hydrated");
        }
        self.store.get_or_insert_with(|| ProgressStore::load(plan, storage, clock))
    }

    pub fn is_hydrated(&self) -> bool {
        self.store.is_some()
    }

    /// Releases the store, returning it if there was one.
    pub fn teardown(&mut self) -> Option<ProgressStore<S>> {
        self.store.take()
    }

    /// Returns the store, or `NotInitialized` outside the hydrated lifetime.
    pub fn store(&self) -> Result<&ProgressStore<S>> {
        self.store.as_ref().ok_or_else(|| ErrorKind::NotInitialized.into())
    }

    /// Returns the store mutably, or `NotInitialized` outside the hydrated
    /// lifetime.
    pub fn store_mut(&mut self) -> Result<&mut ProgressStore<S>> {
        self.store.as_mut().ok_or_else(|| ErrorKind::NotInitialized.into())
    }
}
