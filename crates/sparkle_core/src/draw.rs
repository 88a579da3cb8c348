//! Immediate-mode drawing surface
//!
//! The render loop and the view runtime draw through [`DrawSurface`]. The
//! application records into a [`DrawList`], which the renderer turns into
//! GPU quads once per frame.

use sparkle_math::{Color, Rect, Vec2};

/// Horizontal/vertical placement of text relative to its position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Position is the left end of the baseline
    #[default]
    Left,
    /// Position is the center of the text box
    Center,
}

/// A single recorded draw operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Surface cleared; everything recorded before it is gone
    Clear,
    FillRect { rect: Rect, color: Color },
    FillOval { rect: Rect, color: Color },
    FillText {
        text: String,
        position: Vec2,
        color: Color,
        align: TextAlign,
    },
}

/// Anything the render loop can draw on
pub trait DrawSurface {
    /// Drawable area in surface-local coordinates
    fn bounds(&self) -> Rect;

    /// Erase everything drawn so far
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill the ellipse inscribed in `rect`
    fn fill_oval(&mut self, rect: Rect, color: Color);

    fn fill_text(&mut self, text: &str, position: Vec2, color: Color, align: TextAlign);
}

/// Recorded draw commands for one frame
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list for a surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Resize the surface (keeps recorded commands)
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for DrawList {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.size.x, self.size.y)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_oval(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillOval { rect, color });
    }

    fn fill_text(&mut self, text: &str, position: Vec2, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position,
            color,
            align,
        });
    }
}

/// A sub-region of another surface with its own local coordinates
///
/// Clearing paints the region with `background` instead of wiping the
/// parent surface.
pub struct Translated<'a, S: DrawSurface + ?Sized> {
    inner: &'a mut S,
    region: Rect,
    background: Color,
}

impl<'a, S: DrawSurface + ?Sized> Translated<'a, S> {
    pub fn new(inner: &'a mut S, region: Rect, background: Color) -> Self {
        Self {
            inner,
            region,
            background,
        }
    }

    fn offset(&self) -> Vec2 {
        self.region.origin()
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for Translated<'_, S> {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.region.width, self.region.height)
    }

    fn clear(&mut self) {
        self.inner.fill_rect(self.region, self.background);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.translated(self.offset());
        self.inner.fill_rect(rect, color);
    }

    fn fill_oval(&mut self, rect: Rect, color: Color) {
        let rect = rect.translated(self.offset());
        self.inner.fill_oval(rect, color);
    }

    fn fill_text(&mut self, text: &str, position: Vec2, color: Color, align: TextAlign) {
        let position = position + self.offset();
        self.inner.fill_text(text, position, color, align);
    }
}
