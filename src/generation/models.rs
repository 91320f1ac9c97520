pub mod build_options;
pub mod dimensions;
pub mod generation_request;
pub mod reference_image;
