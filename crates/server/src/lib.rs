pub mod api;
pub mod db;
pub mod entity;
pub mod pipeline;
pub mod recorder;
pub mod repository;
