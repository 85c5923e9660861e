pub mod lookup;
pub mod options;
