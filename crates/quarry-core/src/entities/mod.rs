//! Entity structs for all Quarry domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `quarry-db/migrations/001_initial.sql`).

mod data_source;
mod group;
mod organization;
mod user;

pub use data_source::{DataSource, DataSourceOptions};
pub use group::{ADMIN_GROUP_NAME, DEFAULT_GROUP_NAME, Group};
pub use organization::{Organization, SETTING_GOOGLE_APPS_DOMAINS};
pub use user::User;
