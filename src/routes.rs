// src/routes.rs

pub mod routes;
pub mod tasks;
