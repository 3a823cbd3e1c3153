//! Raster drawing surface backed by a `tiny-skia` pixmap.
//!
//! Path coordinates are mapped through the current transform as they are
//! added, the way a canvas context does it, and arcs are flattened into line
//! segments.

use std::f32::consts::TAU;

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::{Result, ShapezError};
use crate::types::Colour;

use super::DrawingSurface;

/// Angle covered by one flattened arc segment.
const ARC_STEP: f32 = TAU / 96.0;

/// Largest accepted canvas edge in pixels.
pub const MAX_CANVAS_SIZE: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Close,
}

/// An RGBA pixel surface.
pub struct RasterSurface {
    pixmap: Pixmap,
    transform: Transform,
    saved: Vec<Transform>,
    segments: Vec<Segment>,
    /// Current point and start of the current subpath, in pixels.
    current: Option<(f32, f32)>,
    subpath_start: Option<(f32, f32)>,
}

impl RasterSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width > MAX_CANVAS_SIZE || height > MAX_CANVAS_SIZE {
            return Err(ShapezError::Render {
                message: format!("Cannot create a {}x{} canvas", width, height),
                help: Some(format!(
                    "Canvas width and height must be at most {} pixels",
                    MAX_CANVAS_SIZE
                )),
            });
        }

        let pixmap = Pixmap::new(width, height).ok_or_else(|| ShapezError::Render {
            message: format!("Cannot create a {}x{} canvas", width, height),
            help: Some("Canvas width and height must be non-zero".to_string()),
        })?;

        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            saved: Vec::new(),
            segments: Vec::new(),
            current: None,
            subpath_start: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Get a pixel (straight, not premultiplied, alpha).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        // Pixmap::pixel only checks the buffer length, so x past the edge
        // would read the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Colour::new(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        let t = &self.transform;
        (t.sx * x + t.kx * y + t.tx, t.ky * x + t.sy * y + t.ty)
    }

    /// Uniform scale of the current transform, used for stroke widths.
    fn transform_scale(&self) -> f32 {
        let t = &self.transform;
        (t.sx * t.sy - t.kx * t.ky).abs().sqrt()
    }

    fn build_path(&self) -> Option<Path> {
        let mut builder = PathBuilder::new();
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(x, y) => builder.move_to(x, y),
                Segment::LineTo(x, y) => builder.line_to(x, y),
                Segment::Close => builder.close(),
            }
        }
        builder.finish()
    }

    fn paint(colour: Colour) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(colour.r, colour.g, colour.b, colour.a);
        paint.anti_alias = true;
        paint
    }

    fn push_point(&mut self, x: f32, y: f32, start_subpath: bool) {
        let point = self.map(x, y);
        if start_subpath || self.current.is_none() {
            self.segments.push(Segment::MoveTo(point.0, point.1));
            self.subpath_start = Some(point);
        } else {
            self.segments.push(Segment::LineTo(point.0, point.1));
        }
        self.current = Some(point);
    }
}

impl DrawingSurface for RasterSurface {
    fn size(&self) -> (f32, f32) {
        (self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform.pre_concat(Transform::from_translate(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        self.transform = self
            .transform
            .pre_concat(Transform::from_row(cos, sin, -sin, cos, 0.0, 0.0));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_concat(Transform::from_scale(sx, sy));
    }

    fn begin_path(&mut self) {
        self.segments.clear();
        self.current = None;
        self.subpath_start = None;
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push_point(x, y, true);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push_point(x, y, false);
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) {
        let mut sweep = end_angle - start_angle;
        if sweep >= TAU {
            sweep = TAU;
        } else if sweep < 0.0 {
            sweep = sweep.rem_euclid(TAU);
        }

        let steps = ((sweep / ARC_STEP).ceil() as usize).max(1);
        for i in 0..=steps {
            let angle = start_angle + sweep * i as f32 / steps as f32;
            self.line_to(cx + radius * angle.cos(), cy + radius * angle.sin());
        }
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.close_path();
    }

    fn close_path(&mut self) {
        if self.current.is_some() {
            self.segments.push(Segment::Close);
            self.current = self.subpath_start;
        }
    }

    fn fill(&mut self, colour: Colour) {
        if let Some(path) = self.build_path() {
            self.pixmap.fill_path(
                &path,
                &Self::paint(colour),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke(&mut self, colour: Colour, line_width: f32) {
        let width = line_width * self.transform_scale();
        if width <= 0.0 {
            return;
        }
        if let Some(path) = self.build_path() {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &Self::paint(colour),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }
}
