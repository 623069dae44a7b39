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
use sycamore::prelude::*;
use tracing::{info, instrument};

use crate::{
    api::{self, HttpStore},
    app_state::get_state_handler,
    pages::*,
};

#[instrument]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    HttpStore::provide_context(cx, api::DISHES_API_ROOT);
    let store = HttpStore::get_from_context(cx);
    info!(path = %store.dishes_path(), "Starting UI");
    let sh = get_state_handler(cx, store);
    view! {cx,
        div(class="app") {
            CookPage(sh=sh)
        }
    }
}
