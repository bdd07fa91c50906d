//! Parking slot tracking: a slot registry with a terminal form front end
//! and a headless script driver.

pub mod command;
pub mod config;
pub mod logging;
pub mod registry;
pub mod script;
pub mod ui;
