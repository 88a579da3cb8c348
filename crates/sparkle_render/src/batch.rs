//! Draw list to GPU instances
//!
//! Commands are converted in recording order, so later commands paint over
//! earlier ones. A `Clear` drops everything batched before it; the view
//! background itself is the render pass clear color.
//!
//! Text needs a [`GlyphAtlas`]; without one, text commands draw nothing.

use sparkle_core::{DrawCommand, DrawList};

use crate::font::GlyphAtlas;
use crate::pipeline::QuadInstance;

/// Reusable instance buffer for one frame's draw list
#[derive(Debug, Default)]
pub struct DrawBatch {
    instances: Vec<QuadInstance>,
    atlas: Option<GlyphAtlas>,
}

impl DrawBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_atlas(mut self, atlas: GlyphAtlas) -> Self {
        self.atlas = Some(atlas);
        self
    }

    pub fn atlas_mut(&mut self) -> Option<&mut GlyphAtlas> {
        self.atlas.as_mut()
    }

    /// Rebuild the batch from a draw list
    pub fn build(&mut self, list: &DrawList) -> &[QuadInstance] {
        self.instances.clear();
        for command in list.commands() {
            self.push_command(command);
        }
        &self.instances
    }

    pub fn push_command(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear => self.instances.clear(),
            DrawCommand::FillRect { rect, color } => {
                if !rect.is_empty() {
                    self.instances.push(QuadInstance::rect(*rect, *color));
                }
            }
            DrawCommand::FillOval { rect, color } => {
                if !rect.is_empty() {
                    self.instances.push(QuadInstance::oval(*rect, *color));
                }
            }
            DrawCommand::FillText {
                text,
                position,
                color,
                align,
            } => {
                let Some(atlas) = &mut self.atlas else {
                    return;
                };
                let instances = &mut self.instances;
                atlas.layout(text, *position, *align, |rect, uv| {
                    instances.push(QuadInstance::glyph(rect, uv, *color))
                });
            }
        }
    }

    pub fn instances(&self) -> &[QuadInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
