pub mod catalog;
pub mod config;
pub mod links;
pub mod pipeline;
pub mod project;
pub mod recommend;
