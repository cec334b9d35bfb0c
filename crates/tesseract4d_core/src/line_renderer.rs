//! Drawing seam between the object model and a graphics backend

use tesseract4d_math::Vec3;

use crate::{Edge, RenderFrame};

/// Something that can draw straight line segments between projected points
///
/// Each [`Edge`] names two indices into `points`. Implementations decide how
/// the 3D points reach the screen; they never see 4D data.
pub trait LineRenderer {
    type Error;

    fn draw_lines(&mut self, points: &[Vec3], edges: &[Edge], color: [f32; 3]) -> Result<(), Self::Error>;

    /// Draw a whole frame produced by [`crate::Object4D::render_points`]
    fn draw_frame(&mut self, frame: &RenderFrame<'_>, color: [f32; 3]) -> Result<(), Self::Error> {
        self.draw_lines(&frame.points, frame.edges, color)
    }
}
