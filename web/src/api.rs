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
use async_trait::async_trait;
use gloo_net;
use sycamore::prelude::*;
use tracing::{debug, error, instrument};

use dishes::{decode_dishes, Dish, DishStore, Error};

pub const DISHES_API_ROOT: &str = "https://fls8oe8xp7.execute-api.ap-south-1.amazonaws.com";
pub const DISHES_PATH: &str = "/dev/nosh-assignment";

fn from_gloo(item: gloo_net::Error) -> Error {
    Error::from(format!("{}", item))
}

#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
}

impl HttpStore {
    pub fn new(root: String) -> Self {
        Self { root }
    }

    pub fn dishes_path(&self) -> String {
        let mut path = self.root.trim_end_matches('/').to_owned();
        path.push_str(DISHES_PATH);
        path
    }

    pub fn provide_context<S: Into<String>>(cx: Scope, root: S) {
        provide_context(cx, std::rc::Rc::new(Self::new(root.into())));
    }

    pub fn get_from_context(cx: Scope) -> std::rc::Rc<Self> {
        use_context::<std::rc::Rc<Self>>(cx).clone()
    }
}

#[async_trait(?Send)]
impl DishStore for HttpStore {
    #[instrument]
    async fn fetch_dishes(&self) -> Result<Vec<Dish>, Error> {
        let path = self.dishes_path();
        let resp = match gloo_net::http::Request::get(&path).send().await {
            Ok(resp) => resp,
            Err(err) => {
                error!(path, ?err, "Error hitting api");
                return Err(from_gloo(err));
            }
        };
        if !resp.ok() {
            Err(format!("Status: {}", resp.status()).into())
        } else {
            debug!("We got a valid response back!");
            let body = resp.text().await.map_err(from_gloo)?;
            let dishes = decode_dishes(&body)?;
            debug!(count = dishes.len(), "decoded dishes");
            Ok(dishes)
        }
    }
}
