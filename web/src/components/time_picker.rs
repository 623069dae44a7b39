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
use dishes::picker::{pad2, Meridiem, TimePicker, Wheel};
use sycamore::prelude::*;
use tracing::debug;
use web_sys::Event;

use crate::js_lib;

/// Pixel height of a single wheel row. Must match the row style below.
pub const ITEM_HEIGHT: f64 = 48.0;
const VISIBLE_ROWS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelKind {
    Hours,
    Minutes,
}

impl WheelKind {
    pub fn dom_id(&self) -> &'static str {
        match self {
            WheelKind::Hours => "hours-wheel",
            WheelKind::Minutes => "minutes-wheel",
        }
    }

    pub fn wheel<'a>(&self, picker: &'a TimePicker) -> &'a Wheel {
        match self {
            WheelKind::Hours => &picker.hours,
            WheelKind::Minutes => &picker.minutes,
        }
    }

    pub fn wheel_mut<'a>(&self, picker: &'a mut TimePicker) -> &'a mut Wheel {
        match self {
            WheelKind::Hours => &mut picker.hours,
            WheelKind::Minutes => &mut picker.minutes,
        }
    }
}

/// Scroll a wheel's element so its selected value sits under the anchor.
pub fn align_wheel(kind: WheelKind, picker: &TimePicker) {
    let wheel = kind.wheel(picker);
    if let Some(offset) = wheel.offset_for(wheel.selected(), ITEM_HEIGHT) {
        js_lib::set_scroll_top(kind.dom_id(), offset);
    }
}

#[derive(Prop)]
pub struct WheelProps<'ctx> {
    kind: WheelKind,
    picker: &'ctx Signal<TimePicker>,
}

#[component]
pub fn WheelColumn<'ctx, G: Html>(cx: Scope<'ctx>, props: WheelProps<'ctx>) -> View<G> {
    let WheelProps { kind, picker } = props;
    let values = create_signal(
        cx,
        kind.wheel(picker.get_untracked().as_ref())
            .values()
            .collect::<Vec<u8>>(),
    );
    let style = format!(
        "height: {}px; overflow-y: scroll; scroll-snap-type: y mandatory; padding-bottom: {}px;",
        ITEM_HEIGHT * VISIBLE_ROWS,
        ITEM_HEIGHT * (VISIBLE_ROWS - 1.0),
    );
    view! {cx,
        div(id=kind.dom_id(), class="wheel", style=style, on:scroll=move |evt: Event| {
            if let Some(top) = js_lib::event_scroll_top(&evt) {
                let mut updated = picker.get_untracked().as_ref().clone();
                let before = kind.wheel(&updated).selected();
                let after = kind.wheel_mut(&mut updated).scroll_to(top, ITEM_HEIGHT);
                if before != after {
                    debug!(?kind, before, after, "wheel scrolled to new value");
                    picker.set(updated);
                }
            }
        }, on:scrollend=move |_: Event| {
            // Snap to the nearest row once the scroll stops.
            let offset = kind.wheel(picker.get_untracked().as_ref()).settle(ITEM_HEIGHT);
            js_lib::set_scroll_top(kind.dom_id(), offset);
        }) {
            Indexed(
                iterable=values,
                view=move |cx, value| {
                    let label = pad2(value);
                    view! {cx,
                        div(
                            class=(if kind.wheel(picker.get().as_ref()).selected() == value { "wheel-item selected" } else { "wheel-item" }),
                            style=format!("height: {}px; scroll-snap-align: start;", ITEM_HEIGHT),
                            on:click=move |_| {
                                let mut updated = picker.get_untracked().as_ref().clone();
                                if kind.wheel_mut(&mut updated).select(value) {
                                    debug!(?kind, value, "wheel value tapped");
                                    align_wheel(kind, &updated);
                                    picker.set(updated);
                                }
                            }
                        ) { (label) }
                    }
                }
            )
        }
    }
}

#[derive(Prop)]
pub struct TimePickerProps<'ctx> {
    picker: &'ctx Signal<TimePicker>,
}

#[component]
pub fn TimePickerView<'ctx, G: Html>(cx: Scope<'ctx>, props: TimePickerProps<'ctx>) -> View<G> {
    let TimePickerProps { picker } = props;
    let set_meridiem = move |meridiem: Meridiem| {
        let mut updated = picker.get_untracked().as_ref().clone();
        updated.set_meridiem(meridiem);
        picker.set(updated);
    };
    view! {cx,
        div(class="time-picker row-flex") {
            WheelColumn(kind=WheelKind::Hours, picker=picker)
            h1 { " : " }
            WheelColumn(kind=WheelKind::Minutes, picker=picker)
            div(class="column-flex meridiem") {
                button(class=(if picker.get().is_am() { "selected" } else { "outline" }), on:click=move |_| {
                    set_meridiem(Meridiem::Am)
                }) { "AM" }
                button(class=(if picker.get().is_am() { "outline" } else { "selected" }), on:click=move |_| {
                    set_meridiem(Meridiem::Pm)
                }) { "PM" }
            }
        }
    }
}
