//! Display panel drivers

mod graphics;

pub use graphics::GraphicsPanel;
