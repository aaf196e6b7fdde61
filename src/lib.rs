#[macro_use]
extern crate log;

mod entry;
pub mod arena;
pub mod avl_tree;
pub mod config;
pub mod dictionary;
pub mod session;
