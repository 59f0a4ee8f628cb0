//! Government hospital directory API: hospitals, doctors, procedures and the
//! documents patients need for them, backed by MongoDB.
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
