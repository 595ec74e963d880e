pub mod fibonacci;
pub mod newton_sqrt;
pub mod pattern_image;
pub mod repeat_reader;
pub mod slice_filter;
pub mod word_count;
