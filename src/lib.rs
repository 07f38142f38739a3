pub mod api;
pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod notice;
pub mod screens;
pub mod session;
