pub mod form_options;
pub mod generation_mode;
pub mod inline_ceiling;
pub mod resolution_preset;
