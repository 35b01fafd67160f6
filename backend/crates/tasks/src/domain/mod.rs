//! Domain Layer

pub mod repository;
pub mod task;
