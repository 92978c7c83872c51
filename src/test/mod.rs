mod api;
mod config;
mod portfolio;
