//! HTTP request handlers

pub mod health;
pub mod plant_detail;
