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
//! The loading state for the dish list.
//!
//! A `UiState` is always in one of three shapes: loading, loaded, or failed
//! with whatever dishes the last successful load produced. Every load is
//! tagged with a [`LoadTicket`] and only the most recently started load is
//! allowed to publish its result.
use tracing::{debug, instrument, warn};

use crate::{store::Error, Dish};

/// Generation tag handed out when a load starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub is_loading: bool,
    pub dishes: Vec<Dish>,
    pub error: Option<String>,
    generation: u64,
}

/// What the dish region should show for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum DishView<'a> {
    Loading,
    Failed(&'a str),
    Loaded(&'a [Dish]),
}

impl UiState {
    /// The state before the first load has finished.
    pub fn new() -> Self {
        Self {
            is_loading: true,
            dishes: Vec::new(),
            error: None,
            generation: 0,
        }
    }

    /// Start a new load. Any load started before this one is now stale.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        debug!(generation = self.generation, "starting dish load");
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Fold the result of a load into the state. Returns false, leaving the
    /// state untouched, if a newer load has started since `ticket` was
    /// handed out.
    #[instrument(skip(self, result), fields(generation = ticket.0, ok = result.is_ok()))]
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Dish>, Error>) -> bool {
        if !self.is_current(ticket) {
            debug!(latest = self.generation, "dropping stale dish load");
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(dishes) => {
                debug!(count = dishes.len(), "dishes loaded");
                self.dishes = dishes;
                self.error = None;
            }
            Err(err) => {
                warn!(%err, retained = self.dishes.len(), "dish load failed");
                self.error = Some(String::from(err));
            }
        }
        true
    }

    pub fn view(&self) -> DishView<'_> {
        if self.is_loading {
            DishView::Loading
        } else if let Some(ref err) = self.error {
            DishView::Failed(err.as_str())
        } else {
            DishView::Loaded(self.dishes.as_slice())
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
