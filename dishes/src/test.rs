// Copyright 2024 Jeremy Wall (jeremy@marzhillstudios.com)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::picker::*;
use crate::*;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveTime;
use futures::executor::block_on;

fn sample_dishes() -> Vec<Dish> {
    vec![
        Dish::new("Paneer Tikka", "https://example.com/paneer-tikka.jpg"),
        Dish::new("Jeera Rice", "https://example.com/jeera-rice.jpg"),
        Dish::new("Masala Dosa", "https://example.com/masala-dosa.jpg"),
    ]
}

struct FakeStore {
    result: Result<Vec<Dish>, Error>,
    calls: Cell<usize>,
}

impl FakeStore {
    fn new(result: Result<Vec<Dish>, Error>) -> Self {
        Self {
            result,
            calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl DishStore for FakeStore {
    async fn fetch_dishes(&self) -> Result<Vec<Dish>, Error> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

/// Hands out queued results in order, one per fetch.
struct ScriptedStore {
    results: RefCell<VecDeque<Result<Vec<Dish>, Error>>>,
    calls: Cell<usize>,
}

impl ScriptedStore {
    fn new(results: Vec<Result<Vec<Dish>, Error>>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl DishStore for ScriptedStore {
    async fn fetch_dishes(&self) -> Result<Vec<Dish>, Error> {
        self.calls.set(self.calls.get() + 1);
        self.results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no more results".into()))
    }
}

/// Run a pending load against a shared published state, the way the
/// browser handler does with its signal.
fn run_into<S: DishStore>(pending: PendingLoad<S>, published: &RefCell<UiState>) -> bool {
    block_on(pending.run(
        || published.borrow().clone(),
        |state| *published.borrow_mut() = state,
    ))
}

fn load_from<S: DishStore>(store: &S, state: &mut UiState) -> bool {
    let ticket = state.begin_load();
    let result = block_on(store.fetch_dishes());
    state.finish_load(ticket, result)
}

#[test]
fn test_initial_state_is_loading() {
    let state = UiState::default();
    assert!(state.is_loading);
    assert!(state.dishes.is_empty());
    assert_eq!(state.error, None);
    assert_eq!(state.view(), DishView::Loading);
}

#[test]
fn test_successful_load() {
    let store = FakeStore::new(Ok(sample_dishes()));
    let mut state = UiState::new();
    assert!(load_from(&store, &mut state));
    assert_eq!(state.is_loading, false);
    assert_eq!(state.dishes.len(), 3);
    assert_eq!(state.dishes, sample_dishes());
    assert_eq!(state.error, None);
    assert_eq!(state.view(), DishView::Loaded(sample_dishes().as_slice()));
}

#[test]
fn test_failed_first_load_keeps_empty_dishes() {
    let store = FakeStore::new(Err("Network error".into()));
    let mut state = UiState::new();
    assert!(load_from(&store, &mut state));
    assert_eq!(state.is_loading, false);
    assert!(state.dishes.is_empty());
    assert_eq!(state.error.as_deref(), Some("Network error"));
    assert_eq!(state.view(), DishView::Failed("Network error"));
}

#[test]
fn test_failed_reload_retains_previous_dishes() {
    let mut state = UiState::new();
    load_from(&FakeStore::new(Ok(sample_dishes())), &mut state);
    load_from(&FakeStore::new(Err("Status: 502".into())), &mut state);
    assert_eq!(state.is_loading, false);
    assert_eq!(state.dishes, sample_dishes());
    assert_eq!(state.error.as_deref(), Some("Status: 502"));
}

#[test]
fn test_successful_reload_clears_error() {
    let mut state = UiState::new();
    load_from(&FakeStore::new(Err("timeout".into())), &mut state);
    assert!(state.error.is_some());
    load_from(&FakeStore::new(Ok(sample_dishes())), &mut state);
    assert_eq!(state.error, None);
    assert_eq!(state.dishes.len(), 3);
}

#[test]
fn test_begin_load_clears_error_but_keeps_dishes() {
    let mut state = UiState::new();
    load_from(&FakeStore::new(Ok(sample_dishes())), &mut state);
    load_from(&FakeStore::new(Err("boom".into())), &mut state);
    let _ticket = state.begin_load();
    assert!(state.is_loading);
    assert_eq!(state.error, None);
    assert_eq!(state.dishes, sample_dishes());
    assert_eq!(state.view(), DishView::Loading);
}

#[test]
fn test_stale_load_is_dropped() {
    let mut state = UiState::new();
    let first = state.begin_load();
    let second = state.begin_load();
    assert!(!state.is_current(first));
    assert!(state.is_current(second));

    let newest = vec![Dish::new("Jeera Rice", "")];
    assert!(state.finish_load(second, Ok(newest.clone())));
    // The older request finishing late must not clobber the newer result.
    assert!(!state.finish_load(first, Ok(sample_dishes())));
    assert_eq!(state.dishes, newest);
    assert_eq!(state.is_loading, false);
}

#[test]
fn test_stale_load_does_not_end_loading() {
    let mut state = UiState::new();
    let first = state.begin_load();
    let _second = state.begin_load();
    assert!(!state.finish_load(first, Err("Network error".into())));
    assert!(state.is_loading);
    assert_eq!(state.error, None);
}

#[test]
fn test_tickets_increase() {
    let mut state = UiState::new();
    let a = state.begin_load();
    let b = state.begin_load();
    assert!(b > a);
    assert_eq!(b.generation(), a.generation() + 1);
}

#[test]
fn test_loader_fetches_once_on_creation() {
    let store = Rc::new(FakeStore::new(Ok(sample_dishes())));
    let loader = DishLoader::new(store.clone());
    let published = RefCell::new(UiState::new());

    let (next, pending) = loader.begin(&published.borrow());
    assert_eq!(store.calls.get(), 0);
    assert!(next.is_loading);
    assert!(next.is_current(pending.ticket()));
    *published.borrow_mut() = next;

    assert!(run_into(pending, &published));
    assert_eq!(store.calls.get(), 1);
    let state = published.borrow();
    assert_eq!(state.is_loading, false);
    assert_eq!(state.dishes, sample_dishes());
    assert_eq!(state.error, None);
}

#[test]
fn test_loader_never_publishes_stale_result() {
    let newest = vec![Dish::new("Jeera Rice", "")];
    let store = Rc::new(ScriptedStore::new(vec![
        Ok(newest.clone()),
        Ok(sample_dishes()),
    ]));
    let loader = DishLoader::new(store.clone());
    let published = RefCell::new(UiState::new());

    let (next, first) = loader.begin(&published.borrow());
    *published.borrow_mut() = next;
    let (next, second) = loader.begin(&published.borrow());
    *published.borrow_mut() = next;
    assert!(second.ticket() > first.ticket());

    // The newer load answers first; the older one lands afterwards.
    assert!(run_into(second, &published));
    assert_eq!(published.borrow().dishes, newest);
    let published_count = Cell::new(0);
    let applied = block_on(first.run(
        || published.borrow().clone(),
        |_| published_count.set(published_count.get() + 1),
    ));
    assert!(!applied);
    assert_eq!(published_count.get(), 0);
    assert_eq!(store.calls.get(), 2);
    assert_eq!(published.borrow().dishes, newest);
    assert_eq!(published.borrow().is_loading, false);
}

#[test]
fn test_loader_publishes_failure_with_previous_dishes() {
    let store = Rc::new(ScriptedStore::new(vec![
        Ok(sample_dishes()),
        Err("Status: 500".into()),
    ]));
    let loader = DishLoader::new(store.clone());
    let published = RefCell::new(UiState::new());
    for _ in 0..2 {
        let (next, pending) = loader.begin(&published.borrow());
        *published.borrow_mut() = next;
        assert!(run_into(pending, &published));
    }
    assert_eq!(store.calls.get(), 2);
    assert_eq!(published.borrow().dishes, sample_dishes());
    assert_eq!(published.borrow().view(), DishView::Failed("Status: 500"));
}

#[test]
fn test_filter_dishes_case_insensitive() {
    let dishes = sample_dishes();
    let filtered = filter_dishes(&dishes, "ri");
    assert_eq!(filtered, vec![dishes[1].clone()]);
    let filtered = filter_dishes(&dishes, "PANEER");
    assert_eq!(filtered, vec![dishes[0].clone()]);
}

#[test]
fn test_filter_dishes_preserves_order() {
    let dishes = sample_dishes();
    let filtered = filter_dishes(&dishes, "a");
    assert_eq!(filtered, dishes);
    let filtered = filter_dishes(&dishes, "sa");
    assert_eq!(filtered, vec![dishes[2].clone()]);
}

#[test]
fn test_filter_dishes_empty_query_and_no_match() {
    let dishes = sample_dishes();
    assert_eq!(filter_dishes(&dishes, ""), dishes);
    assert!(filter_dishes(&dishes, "pizza").is_empty());
    assert!(filter_dishes(&[], "rice").is_empty());
}

#[test]
fn test_decode_dishes() {
    let body = r#"[
        {"dishName": "Paneer Tikka", "imageUrl": "https://example.com/paneer-tikka.jpg", "dishId": "1"},
        {"dishName": "Jeera Rice", "imageUrl": "https://example.com/jeera-rice.jpg"}
    ]"#;
    let dishes = decode_dishes(body).expect("We expect this to decode");
    assert_eq!(dishes, sample_dishes()[0..2].to_vec());
}

#[test]
fn test_decode_dishes_null_and_missing_image() {
    assert_eq!(decode_dishes("null").expect("null decodes"), Vec::new());
    let dishes = decode_dishes(r#"[{"dishName": "Soup"}]"#).expect("missing image decodes");
    assert_eq!(dishes, vec![Dish::new("Soup", "")]);
}

#[test]
fn test_decode_dishes_errors_carry_message() {
    let err = decode_dishes(r#"[{"imageUrl": "x"}]"#).unwrap_err();
    assert!(err.message().contains("dishName"), "{}", err);
    let err = decode_dishes("<html>").unwrap_err();
    assert!(!err.message().is_empty());
}

#[test]
fn test_dish_serializes_camel_case() {
    let json = serde_json::to_string(&Dish::new("Soup", "u")).expect("serializes");
    assert_eq!(json, r#"{"dishName":"Soup","imageUrl":"u"}"#);
}

#[test]
fn test_categories() {
    let cats = categories();
    let names: Vec<&str> = cats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Rice items", "Indian", "Curries", "Soups", "Desserts", "Snack"]
    );
    assert!(cats.iter().all(|c| c.image_url.starts_with("https://")));
}

#[test]
fn test_default_time_picker() {
    let picker = TimePicker::default();
    assert_eq!(picker.hour(), 6);
    assert_eq!(picker.minute(), 30);
    assert_eq!(picker.meridiem(), Meridiem::Am);
    assert!(picker.is_am());
    assert_eq!(picker.label(), "06:30 AM");
}

#[test]
fn test_select_hour_directly() {
    let mut picker = TimePicker::default();
    picker.hours.scroll_to(400.0, 40.0);
    assert_eq!(picker.hour(), 11);
    assert!(picker.hours.select(7));
    assert_eq!(picker.hour(), 7);
    assert_eq!(picker.hours.offset_for(7, 40.0), Some(240.0));
}

#[test]
fn test_select_out_of_range_is_ignored() {
    let mut picker = TimePicker::default();
    assert!(!picker.hours.select(0));
    assert!(!picker.hours.select(13));
    assert!(!picker.minutes.select(60));
    assert_eq!(picker.hour(), 6);
    assert_eq!(picker.minute(), 30);
    assert_eq!(picker.hours.offset_for(13, 40.0), None);
}

#[test]
fn test_scroll_selects_nearest_item() {
    let mut wheel = Wheel::minutes();
    assert_eq!(wheel.scroll_to(0.0, 40.0), 0);
    assert_eq!(wheel.scroll_to(59.0, 40.0), 1);
    assert_eq!(wheel.scroll_to(61.0, 40.0), 2);
    assert_eq!(wheel.settle(40.0), 80.0);
    assert_eq!(wheel.offset_for(wheel.selected(), 40.0), Some(80.0));
}

#[test]
fn test_scroll_clamps_to_ends() {
    let mut wheel = Wheel::hours();
    assert_eq!(wheel.scroll_to(-25.0, 40.0), 1);
    assert_eq!(wheel.scroll_to(10_000.0, 40.0), 12);
    assert_eq!(wheel.settle(40.0), 440.0);
}

#[test]
fn test_scroll_with_bad_geometry_keeps_selection() {
    let mut wheel = Wheel::hours();
    assert_eq!(wheel.scroll_to(100.0, 0.0), 6);
    assert_eq!(wheel.scroll_to(f64::NAN, 40.0), 6);
}

#[test]
fn test_wheel_shape() {
    let hours = Wheel::hours();
    assert_eq!(hours.len(), 12);
    assert_eq!(hours.values().collect::<Vec<u8>>(), (1..=12).collect::<Vec<u8>>());
    assert_eq!(hours.selected_index(), 5);
    let minutes = Wheel::minutes();
    assert_eq!(minutes.len(), 60);
    assert_eq!(minutes.selected_index(), 30);
    assert_eq!(Wheel::new(5, 1, 9).selected(), 5);
}

#[test]
fn test_meridiem_toggle_and_clock_time() {
    let mut picker = TimePicker::default();
    assert_eq!(picker.as_time(), NaiveTime::from_hms_opt(6, 30, 0));
    picker.set_meridiem(Meridiem::Pm);
    assert_eq!(picker.label(), "06:30 PM");
    assert_eq!(picker.as_time(), NaiveTime::from_hms_opt(18, 30, 0));
    picker.hours.select(12);
    assert_eq!(picker.as_time(), NaiveTime::from_hms_opt(12, 30, 0));
    picker.set_meridiem(Meridiem::Am);
    picker.minutes.select(5);
    assert_eq!(picker.label(), "12:05 AM");
    assert_eq!(picker.as_time(), NaiveTime::from_hms_opt(0, 5, 0));
}

#[test]
fn test_pad2() {
    assert_eq!(pad2(0), "00");
    assert_eq!(pad2(7), "07");
    assert_eq!(pad2(59), "59");
}
