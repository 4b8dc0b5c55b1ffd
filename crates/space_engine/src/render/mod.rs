//! Rendering boundary
//!
//! The spatial index knows nothing about shaders or vertex buffers. Draw
//! traversals hand each visible asteroid's render index to a [`RenderSink`],
//! which owns the actual draw call.

mod draw_list;

pub use draw_list::DrawList;

/// Receives one draw request per visible asteroid
pub trait RenderSink {
    /// Draw the asteroid whose vertices start at `render_index`
    fn draw_obstacle(&mut self, render_index: u32);
}

impl<F: FnMut(u32)> RenderSink for F {
    fn draw_obstacle(&mut self, render_index: u32) {
        self(render_index);
    }
}
