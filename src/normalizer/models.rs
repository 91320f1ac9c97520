pub mod normalize_options;
pub mod normalized_image;
pub mod reference_slot;
