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
use dishes::Dish;
use sycamore::prelude::*;
use tracing::debug;

use crate::{app_state::StateHandler, components::*};

#[derive(Prop)]
pub struct CookPageProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn CookPage<'ctx, G: Html>(cx: Scope<'ctx>, props: CookPageProps<'ctx>) -> View<G> {
    let CookPageProps { sh } = props;
    // Everything below is local to this page and never reaches the state handler.
    let query = create_signal(cx, String::new());
    let selected_dish = create_signal(cx, Option::<Dish>::None);
    let selected_nav = create_signal(cx, DEFAULT_NAV_ITEM.to_owned());

    view! {cx,
        TopBar(query=query)
        div(class="row-flex app-body") {
            NavigationDrawer(selected=selected_nav)
            main(class="column-flex") {
                WhatsOnYourMind()
                Recommendations(sh=sh, query=query, selected=selected_dish)
                div(class="row-flex space-between actions") {
                    button(on:click=|_| debug!("explore all dishes")) { "Explore all dishes" }
                    button(class="outline", on:click=|_| debug!("confused what to cook")) { "Confused what to cook?" }
                }
            }
        }
        DishDetailSheet(selected=selected_dish)
    }
}
