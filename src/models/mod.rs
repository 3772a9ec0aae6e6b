// src/models/mod.rs

pub mod task;
pub mod task_dto;
