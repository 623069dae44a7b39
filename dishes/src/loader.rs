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
use std::rc::Rc;

use tracing::{debug, info, instrument};

use crate::{state::LoadTicket, store::DishStore, UiState};

/// Runs loads from a [DishStore] against whatever holds the published
/// [UiState].
pub struct DishLoader<S: ?Sized> {
    store: Rc<S>,
}

impl<S: DishStore + ?Sized> DishLoader<S> {
    pub fn new(store: Rc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Rc<S> {
        &self.store
    }

    /// Start a load against a copy of `current`. The returned state should
    /// be published right away. Nothing is fetched until the pending load
    /// is run.
    pub fn begin(&self, current: &UiState) -> (UiState, PendingLoad<S>) {
        let mut next = current.clone();
        let ticket = next.begin_load();
        let pending = PendingLoad {
            store: self.store.clone(),
            ticket,
        };
        (next, pending)
    }
}

pub struct PendingLoad<S: ?Sized> {
    store: Rc<S>,
    ticket: LoadTicket,
}

impl<S: DishStore + ?Sized> PendingLoad<S> {
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// Fetch, then fold the result into the state `latest` returns once the
    /// fetch is done. `publish` is only called if this load is still the
    /// current one. Returns whether it was.
    #[instrument(skip_all, fields(generation = self.ticket.generation()))]
    pub async fn run<L, P>(self, latest: L, publish: P) -> bool
    where
        L: FnOnce() -> UiState,
        P: FnOnce(UiState),
    {
        info!("Synchronizing dishes");
        let result = self.store.fetch_dishes().await;
        let mut state = latest();
        if state.finish_load(self.ticket, result) {
            publish(state);
            true
        } else {
            debug!("Dropping result of superseded dish load");
            false
        }
    }
}
