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
use std::rc::Rc;

use dishes::{DishLoader, DishStore, UiState};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::instrument;

use crate::api::HttpStore;

#[derive(Debug)]
pub enum Message {
    /// Fetch the dish list again. Any load still in flight is superseded.
    LoadDishes,
}

pub struct StateMachine<S>(DishLoader<S>);

impl<S: DishStore> StateMachine<S> {
    pub fn new(store: Rc<S>) -> Self {
        Self(DishLoader::new(store))
    }
}

impl<S: DishStore + 'static> MessageMapper<Message, UiState> for StateMachine<S> {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<UiState>) {
        match msg {
            Message::LoadDishes => {
                let (next, pending) = self.0.begin(original.get().as_ref());
                original.set(next);
                spawn_local_scoped(cx, async move {
                    pending
                        .run(
                            || original.get().as_ref().clone(),
                            |state| original.set(state),
                        )
                        .await;
                });
            }
        }
    }
}

pub type StateHandler<'ctx, S = HttpStore> = &'ctx Handler<'ctx, StateMachine<S>, UiState, Message>;

pub fn get_state_handler<'ctx, S: DishStore + 'static>(
    cx: Scope<'ctx>,
    store: Rc<S>,
) -> StateHandler<'ctx, S> {
    let sh = Handler::new(cx, UiState::new(), StateMachine::new(store));
    sh.dispatch(cx, Message::LoadDishes);
    sh
}
