// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod content;
mod db;
mod error;
mod menu;
mod revalidate;
mod rows;

pub const CRATE_NAME: &str = "simplebiz-store";

pub use content::ContentStore;
pub use db::{Db, SCHEMA_VERSION};
pub use error::{StoreError, StoreErrorCode};
pub use menu::MenuStore;
pub use revalidate::{NoopRevalidator, Revalidator};
