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
pub mod categories;
pub mod dish_list;
pub mod dish_sheet;
pub mod nav_drawer;
pub mod time_picker;
pub mod top_bar;

pub use categories::*;
pub use dish_list::*;
pub use dish_sheet::*;
pub use nav_drawer::*;
pub use time_picker::*;
pub use top_bar::*;
