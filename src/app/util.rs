pub mod encoding;
pub mod json_tree;
pub mod multipart;
pub mod time;
