pub mod action;
pub mod config;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod menu;
pub mod persistence;
pub mod reducer;
pub mod registry;
pub mod state;
pub mod ui;
