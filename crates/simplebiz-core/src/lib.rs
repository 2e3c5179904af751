// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod ids;
mod slug;
mod time;

pub const CRATE_NAME: &str = "simplebiz-core";

pub use ids::{EntityId, ParseIdError, NS_ARTICLE, NS_CATEGORY, NS_FEATURED, NS_PRODUCT};
pub use slug::{slug_from_url, slugify};
pub use time::{now_utc, today_utc};
