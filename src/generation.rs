pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod prompts;
pub mod seed;
pub mod service;
