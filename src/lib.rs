pub mod browser;
pub mod model;
pub mod remote;
pub mod store;
