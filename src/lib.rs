pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod schedule;
pub mod surface;
pub mod text;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
pub mod api;

#[cfg(target_arch = "wasm32")]
pub mod browser;
