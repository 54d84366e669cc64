pub mod arms;
pub mod engine;
pub mod face;
pub mod glyphs;
pub mod sides;
pub mod types;
