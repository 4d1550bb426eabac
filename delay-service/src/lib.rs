//! Delay Service - flight delay prediction behind a small HTTP API.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
