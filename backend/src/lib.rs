pub mod bundle;
pub mod config;
pub mod site;
