pub mod task_service;
