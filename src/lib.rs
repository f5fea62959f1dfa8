pub mod app;
pub mod cli;
pub mod components;
pub mod event;
pub mod logging;
pub mod model;
pub mod store;
pub mod table;
pub mod ui;
