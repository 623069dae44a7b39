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
pub mod loader;
pub mod picker;
pub mod state;
pub mod store;

use serde::{Deserialize, Serialize};

pub use loader::{DishLoader, PendingLoad};
pub use state::{DishView, LoadTicket, UiState};
pub use store::{decode_dishes, DishStore, Error};

/// A dish as the dishes endpoint describes it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub dish_name: String,
    #[serde(default)]
    pub image_url: String,
}

impl Dish {
    pub fn new<NS: Into<String>, IS: Into<String>>(dish_name: NS, image_url: IS) -> Self {
        Self {
            dish_name: dish_name.into(),
            image_url: image_url.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.dish_name.as_str()
    }

    pub fn image_url(&self) -> &str {
        self.image_url.as_str()
    }
}

/// A static browse category shown above the recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub image_url: String,
}

impl Category {
    pub fn new<NS: Into<String>, IS: Into<String>>(name: NS, image_url: IS) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

const CATEGORIES: [(&str, &str); 6] = [
    ("Rice items", "https://images.unsplash.com/photo-1603133872878-684f208fb84b?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80"),
    ("Indian", "https://images.unsplash.com/photo-1601050690597-df0568f70950?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80"),
    ("Curries", "https://images.unsplash.com/photo-1598515214211-89d3c73ae83b?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80"),
    ("Soups", "https://images.unsplash.com/photo-1547592166-23ac45744acd?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80"),
    ("Desserts", "https://images.unsplash.com/photo-1565958011703-44f9829ba187?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80"),
    ("Snack", "https://images.unsplash.com/photo-1558961283-6e6b1c4b4b47?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80"),
];

/// The "What's on your mind?" categories.
pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(name, url)| Category::new(*name, *url))
        .collect()
}

/// Get the dishes whose name contains the query, ignoring case. Order is
/// preserved and an empty query matches everything.
pub fn filter_dishes(dishes: &[Dish], query: &str) -> Vec<Dish> {
    if query.is_empty() {
        return dishes.to_vec();
    }
    let needle = query.to_lowercase();
    dishes
        .iter()
        .filter(|d| d.dish_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod test;
