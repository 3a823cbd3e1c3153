//! The drawing surface capability the renderer paints onto.

use crate::types::Colour;

/// A 2D paint target with a canvas-style path and transform model.
///
/// # Path model
///
/// `begin_path` clears the current path. `move_to`, `line_to`, `arc` and
/// `rect` add to it, `close_path` closes the current subpath. `fill` and
/// `stroke` paint the path without clearing it, so both can be applied to
/// the same outline.
///
/// # Transform model
///
/// `translate`, `rotate` and `scale` post-multiply the current transform, so
/// they apply to coordinates issued afterwards. `save` pushes the transform
/// and `restore` pops it.
pub trait DrawingSurface {
    /// Surface dimensions in pixels as `(width, height)`.
    fn size(&self) -> (f32, f32);

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);

    /// Rotate the coordinate system (angle in radians, clockwise on screen).
    fn rotate(&mut self, angle: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Add a circular arc from `start_angle` to `end_angle` (radians,
    /// increasing angle direction). A line joins the current point to the
    /// start of the arc.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32);

    /// Add a closed rectangle as its own subpath.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn close_path(&mut self);

    fn fill(&mut self, colour: Colour);

    /// Stroke the current path. `line_width` is in user units.
    fn stroke(&mut self, colour: Colour, line_width: f32);
}
