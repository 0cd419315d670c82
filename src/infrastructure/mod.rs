pub mod observability;
pub mod resources;
pub mod text_processing;
pub mod tika;
