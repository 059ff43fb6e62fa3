mod render;

pub use render::Render;
