pub mod controller;
pub mod dtos;
pub mod errors;
pub mod keys;
pub mod models;
pub mod object_store;
pub mod s3;
pub mod service;
