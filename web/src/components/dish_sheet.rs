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
use dishes::{picker::TimePicker, Dish};
use sycamore::prelude::*;
use tracing::{debug, info, instrument};

use crate::components::time_picker::*;
use crate::js_lib;

const SHEET_ID: &str = "dish-sheet";

fn log_action(action: &'static str, dish: Option<&Dish>, picker: &TimePicker) {
    info!(
        action,
        dish = dish.map(|d| d.dish_name.as_str()),
        time = %picker.label(),
        clock = ?picker.as_time(),
        "schedule action"
    );
}

#[derive(Prop)]
pub struct DishSheetProps<'ctx> {
    selected: &'ctx Signal<Option<Dish>>,
}

/// Modal sheet for scheduling a cooking time for the selected dish. The
/// picker starts over at its defaults every time the sheet opens and
/// nothing selected here outlives the sheet.
#[instrument(skip_all)]
#[component]
pub fn DishDetailSheet<'ctx, G: Html>(cx: Scope<'ctx>, props: DishSheetProps<'ctx>) -> View<G> {
    let DishSheetProps { selected } = props;
    let picker = create_signal(cx, TimePicker::default());

    create_effect(cx, move || match selected.get().as_ref() {
        Some(dish) => {
            debug!(dish=%dish.dish_name, "opening dish sheet");
            let fresh = TimePicker::default();
            picker.set(fresh.clone());
            js_lib::show_dialog(SHEET_ID);
            align_wheel(WheelKind::Hours, &fresh);
            align_wheel(WheelKind::Minutes, &fresh);
        }
        None => {
            js_lib::close_dialog(SHEET_ID);
        }
    });

    let dish_name = create_memo(cx, move || {
        selected
            .get()
            .as_ref()
            .as_ref()
            .map(|d| d.dish_name.clone())
            .unwrap_or_default()
    });
    let dismiss = move || {
        if selected.get_untracked().is_some() {
            selected.set(None);
        }
    };
    let act = move |action: &'static str| {
        log_action(
            action,
            selected.get_untracked().as_ref().as_ref(),
            picker.get_untracked().as_ref(),
        );
    };

    view! {cx,
        dialog(id=SHEET_ID, class="sheet", on:close=move |_| dismiss()) {
            article {
                header(class="row-flex space-between") {
                    div {
                        h2 { "Schedule cooking time" }
                        small { (dish_name.get()) }
                    }
                    button(class="outline close", aria-label="Close", on:click=move |_| dismiss()) { "✕" }
                }
                TimePickerView(picker=picker)
                footer(class="row-flex space-between") {
                    button(class="destructive outline", on:click=move |_| act("delete")) { "Delete" }
                    button(class="outline", on:click=move |_| act("reschedule")) { "Re-schedule" }
                    button(on:click=move |_| act("cook_now")) { "Cook Now" }
                }
            }
        }
    }
}
