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
use tracing::debug;

#[derive(Prop)]
pub struct TopBarProps<'ctx> {
    query: &'ctx Signal<String>,
}

#[component]
pub fn TopBar<'ctx, G: Html>(cx: Scope<'ctx>, props: TopBarProps<'ctx>) -> View<G> {
    let TopBarProps { query } = props;
    view! {cx,
        nav(class="top-bar no-print") {
            label(for="dish-search", class="search") {
                span(aria-hidden="true") { "🔍" }
                input(type="search", id="dish-search", name="dish-search",
                    placeholder="Search for dish or ingredient", bind:value=query)
            }
            span(class="scheduled") {
                "Italian Spaghetti... Scheduled 6:30 AM" " "
                span(aria-label="Notification") { "🔔" }
            }
            button(class="outline power", aria-label="Power", on:click=|_| {
                debug!("power button pressed");
            }) { "⏻" }
        }
    }
}
