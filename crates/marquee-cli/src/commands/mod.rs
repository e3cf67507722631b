pub mod account;
pub mod bootstrap;
pub mod catalog;
mod render;
