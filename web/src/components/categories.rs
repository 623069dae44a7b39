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
use dishes::{categories, Category};
use sycamore::prelude::*;

#[derive(Prop)]
pub struct CategoryItemProps {
    category: Category,
}

#[component]
pub fn CategoryItem<G: Html>(cx: Scope, props: CategoryItemProps) -> View<G> {
    let Category { name, image_url } = props.category;
    let alt = name.clone();
    view! {cx,
        article(class="card category row-flex") {
            img(src=image_url, alt=alt, width="40", height="40", loading="lazy")
            small(class="nowrap") { (name) }
        }
    }
}

#[component]
pub fn WhatsOnYourMind<G: Html>(cx: Scope) -> View<G> {
    let category_list = create_signal(cx, categories());
    view! {cx,
        section(class="whats-on-your-mind") {
            h2 { "What's on your mind?" }
            div(class="row-flex scroll-x") {
                Indexed(
                    iterable=category_list,
                    view=|cx, category| view! {cx,
                        CategoryItem(category=category)
                    }
                )
            }
        }
    }
}
