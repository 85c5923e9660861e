mod ds;
mod groups;
mod org;
mod users;

pub use ds::DataSourceCommands;
pub use groups::GroupCommands;
pub use org::OrgCommands;
pub use users::UserCommands;
