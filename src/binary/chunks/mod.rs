pub mod cel;
pub mod layer;
pub mod old_palette;
pub mod palette;
