//! WebGPU rendering module
//!
//! Scenes are recorded into a [`Frame`] through the `Canvas` trait, then
//! drawn as a single flat-coloured triangle list.

pub mod font;
pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::Frame;
pub use pipeline::RenderState;
