//! A drawing surface that records calls instead of painting.

use crate::types::Colour;

use super::DrawingSurface;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate(f32),
    Scale { sx: f32, sy: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Arc {
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    ClosePath,
    Fill(Colour),
    Stroke { colour: Colour, line_width: f32 },
}

/// Records every call made on it, in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Colours passed to `fill`, in order.
    pub fn fills(&self) -> Vec<Colour> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill(colour) => Some(*colour),
                _ => None,
            })
            .collect()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }

    /// Net `save` depth: zero when every `save` has been restored.
    pub fn depth(&self) -> isize {
        self.commands.iter().fold(0, |depth, c| match c {
            DrawCommand::Save => depth + 1,
            DrawCommand::Restore => depth - 1,
            _ => depth,
        })
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.push(DrawCommand::Rotate(angle));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.push(DrawCommand::Scale { sx, sy });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self, colour: Colour) {
        self.push(DrawCommand::Fill(colour));
    }

    fn stroke(&mut self, colour: Colour, line_width: f32) {
        self.push(DrawCommand::Stroke { colour, line_width });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new(10.0, 20.0);
        surface.save();
        surface.begin_path();
        surface.rect(0.0, 0.0, 1.0, 1.0);
        surface.fill(Colour::MAGENTA);
        surface.stroke(Colour::OUTLINE, 1.0);
        surface.restore();

        assert_eq!(surface.size(), (10.0, 20.0));
        assert_eq!(surface.commands().len(), 6);
        assert_eq!(surface.commands()[1], DrawCommand::BeginPath);
        assert_eq!(surface.fills(), vec![Colour::MAGENTA]);
        assert_eq!(surface.stroke_count(), 1);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_depth_tracks_unbalanced_saves() {
        let mut surface = RecordingSurface::new(1.0, 1.0);
        surface.save();
        surface.save();
        surface.restore();
        assert_eq!(surface.depth(), 1);
    }
}
