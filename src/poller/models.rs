pub mod poll_config;
