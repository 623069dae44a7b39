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
use std::fmt;

use async_trait::async_trait;
use serde_json::from_str;

use crate::Dish;

/// A failed dish fetch. Carries whatever message the transport or the
/// decoder produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(String);

impl Error {
    pub fn message(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Error {}

impl From<String> for Error {
    fn from(item: String) -> Self {
        Error(item)
    }
}

impl From<&'static str> for Error {
    fn from(item: &'static str) -> Self {
        Error(item.to_owned())
    }
}

impl From<serde_json::Error> for Error {
    fn from(item: serde_json::Error) -> Self {
        Error(format!("{}", item))
    }
}

impl From<Error> for String {
    fn from(item: Error) -> Self {
        item.0
    }
}

/// Somewhere dishes can be fetched from.
// NOTE(jwall): The browser is single threaded and none of the futures we get
// from the fetch api are Send so we don't ask for it here.
#[async_trait(?Send)]
pub trait DishStore {
    /// Fetch the full ordered list of dishes.
    async fn fetch_dishes(&self) -> Result<Vec<Dish>, Error>;
}

/// Decode the body of a dishes response. A `null` body is an empty list.
pub fn decode_dishes(body: &str) -> Result<Vec<Dish>, Error> {
    let dishes: Option<Vec<Dish>> = from_str(body)?;
    Ok(dishes.unwrap_or_default())
}
