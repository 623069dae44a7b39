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
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlDialogElement};

pub fn get_element_by_id<E>(id: &str) -> Option<E>
where
    E: JsCast,
{
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<E>()
        .ok()
}

/// Open the dialog with the given id as a modal.
pub fn show_dialog(id: &str) {
    match get_element_by_id::<HtmlDialogElement>(id) {
        Some(el) => {
            if !el.open() {
                if let Err(err) = el.show_modal() {
                    error!(id, ?err, "Unable to open dialog");
                }
            }
        }
        None => error!(id, "No such dialog element"),
    }
}

pub fn close_dialog(id: &str) {
    if let Some(el) = get_element_by_id::<HtmlDialogElement>(id) {
        el.close();
    }
}

/// Vertical scroll offset of the element an event fired on.
pub fn event_scroll_top(evt: &Event) -> Option<f64> {
    let target = evt.target()?;
    let el = target.dyn_ref::<Element>()?;
    Some(el.scroll_top() as f64)
}

pub fn set_scroll_top(id: &str, offset: f64) {
    if let Some(el) = get_element_by_id::<Element>(id) {
        el.set_scroll_top(offset.round() as i32);
    }
}
