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

pub const DEFAULT_NAV_ITEM: &str = "Cook";

const NAV_ITEMS: [(&str, &str); 6] = [
    ("Cook", "🍽"),
    ("Favourites", "♥"),
    ("Manual", "📖"),
    ("Device", "📟"),
    ("Preferences", "👤"),
    ("Settings", "⚙"),
];

#[derive(Prop)]
pub struct NavProps<'ctx> {
    selected: &'ctx Signal<String>,
}

#[component]
pub fn NavigationDrawer<'ctx, G: Html>(cx: Scope<'ctx>, props: NavProps<'ctx>) -> View<G> {
    let NavProps { selected } = props;
    let items = create_signal(cx, Vec::from(NAV_ITEMS));
    view! {cx,
        nav(class="drawer no-print") {
            ul {
                Indexed(
                    iterable=items,
                    view=move |cx, (label, icon)| {
                        view! {cx,
                            li(class=(if selected.get().as_str() == label { "nav-item selected" } else { "nav-item" }), on:click=move |_| {
                                debug!(label, "navigation item selected");
                                selected.set(label.to_owned());
                            }) {
                                span(aria-label=label) { (icon) }
                                small { (label) }
                            }
                        }
                    }
                )
            }
        }
    }
}
