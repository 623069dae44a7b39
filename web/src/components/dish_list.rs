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
use dishes::{filter_dishes, Dish, DishView};
use sycamore::prelude::*;
use tracing::{debug, instrument};

use crate::app_state::StateHandler;

#[derive(Prop)]
pub struct DishItemProps<'ctx> {
    dish: Dish,
    selected: &'ctx Signal<Option<Dish>>,
}

#[component]
pub fn DishItem<'ctx, G: Html>(cx: Scope<'ctx>, props: DishItemProps<'ctx>) -> View<G> {
    let DishItemProps { dish, selected } = props;
    let name = dish.name().to_owned();
    let alt = name.clone();
    let src = dish.image_url().to_owned();
    view! {cx,
        article(class="card dish column-flex", on:click=move |_| {
            debug!(dish=%dish.dish_name, "dish selected");
            selected.set(Some(dish.clone()));
        }) {
            img(src=src, alt=alt, width="120", height="120", loading="lazy")
            strong { (name) }
            small { "★ 4.2" }
            small { "30 min • Medium prep." }
        }
    }
}

#[derive(Prop)]
pub struct DishListProps<'ctx> {
    dishes: &'ctx ReadSignal<Vec<Dish>>,
    selected: &'ctx Signal<Option<Dish>>,
}

#[component]
pub fn DishList<'ctx, G: Html>(cx: Scope<'ctx>, props: DishListProps<'ctx>) -> View<G> {
    let DishListProps { dishes, selected } = props;
    view! {cx,
        div(class="row-flex scroll-x dish-list") {
            Indexed(
                iterable=dishes,
                view=move |cx, dish| view! {cx,
                    DishItem(dish=dish, selected=selected)
                }
            )
        }
    }
}

#[derive(Prop)]
pub struct RecommendationsProps<'ctx> {
    sh: StateHandler<'ctx>,
    query: &'ctx ReadSignal<String>,
    selected: &'ctx Signal<Option<Dish>>,
}

/// The dish region: a spinner while loading, the error if the last load
/// failed, otherwise the dishes matching the search query.
#[instrument(skip_all)]
#[component]
pub fn Recommendations<'ctx, G: Html>(
    cx: Scope<'ctx>,
    props: RecommendationsProps<'ctx>,
) -> View<G> {
    let RecommendationsProps {
        sh,
        query,
        selected,
    } = props;
    let state = sh.get_selector(cx, |state| state.get().as_ref().clone());
    let filtered = create_memo(cx, move || {
        filter_dishes(state.get().dishes.as_slice(), query.get().as_str())
    });
    view! {cx,
        section(class="recommendations") {
            div(class="row-flex space-between") {
                h2 { "Recommendations" }
                small { a(href="#") { "Show all" } }
            }
            div(class="dish-region") {
                (match state.get().view() {
                    DishView::Loading => view! {cx,
                        progress(aria-label="Loading dishes")
                    },
                    DishView::Failed(err) => {
                        let msg = format!("Error: {}", err);
                        view! {cx,
                            p(class="error") { (msg) }
                        }
                    }
                    DishView::Loaded(_) => view! {cx,
                        DishList(dishes=filtered, selected=selected)
                    },
                })
            }
        }
    }
}
