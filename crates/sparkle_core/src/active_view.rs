//! Runtime view instantiated from a [`ViewDescription`]
//!
//! An [`ActiveView`] owns the mutable state of the screen currently shown:
//! label texts, buttons and (optionally) a particle canvas. Pointer events
//! arrive in window coordinates; the canvas sees canvas-local coordinates.

use sparkle_math::{Color, Rect, Vec2};

use crate::canvas::{render_frame, CanvasSettings, CanvasState, FrameStats};
use crate::draw::{DrawSurface, TextAlign, Translated};
use crate::view::{UiAction, ViewDescription, Widget};

const BUTTON_FACE: Color = Color::LIGHT_GRAY;
const BUTTON_BORDER: Color = Color::rgb(0.55, 0.55, 0.55);
const BUTTON_TEXT: Color = Color::BLACK;

/// A label with its current text
#[derive(Clone, Debug, PartialEq)]
pub struct LabelState {
    pub id: String,
    pub text: String,
    pub position: Vec2,
    pub color: Color,
}

/// A clickable button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonState {
    pub id: String,
    pub text: String,
    pub bounds: Rect,
    pub action: UiAction,
}

/// The canvas region of a view
pub struct CanvasRegion {
    pub id: String,
    pub bounds: Rect,
    pub background: Color,
    pub state: CanvasState,
}

/// The view currently displayed in the window
pub struct ActiveView {
    name: String,
    title: String,
    size: (u32, u32),
    background: Color,
    labels: Vec<LabelState>,
    buttons: Vec<ButtonState>,
    canvas: Option<CanvasRegion>,
}

impl ActiveView {
    /// Instantiate a view from its description
    pub fn from_description(description: &ViewDescription, canvas_settings: &CanvasSettings) -> Self {
        let mut labels = Vec::new();
        let mut buttons = Vec::new();
        let mut canvas = None;

        for widget in &description.widgets {
            match widget {
                Widget::Label { id, text, position, color } => labels.push(LabelState {
                    id: id.clone(),
                    text: text.clone(),
                    position: *position,
                    color: *color,
                }),
                Widget::Button { id, text, bounds, on_click } => buttons.push(ButtonState {
                    id: id.clone(),
                    text: text.clone(),
                    bounds: *bounds,
                    action: on_click.clone(),
                }),
                Widget::Canvas { id, bounds, background } => {
                    if canvas.is_some() {
                        log::warn!("View '{}' declares extra canvas '{}', ignoring", description.name, id);
                        continue;
                    }
                    canvas = Some(CanvasRegion {
                        id: id.clone(),
                        bounds: *bounds,
                        background: *background,
                        state: CanvasState::new(bounds.width, bounds.height, canvas_settings.clone()),
                    });
                }
            }
        }

        Self {
            name: description.name.clone(),
            title: description.title.clone().unwrap_or_else(|| description.name.clone()),
            size: (description.width, description.height),
            background: description.background,
            labels,
            buttons,
            canvas,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Content size in logical pixels
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn labels(&self) -> &[LabelState] {
        &self.labels
    }

    pub fn buttons(&self) -> &[ButtonState] {
        &self.buttons
    }

    /// Current text of a label
    pub fn label_text(&self, id: &str) -> Option<&str> {
        self.labels.iter().find(|l| l.id == id).map(|l| l.text.as_str())
    }

    /// Replace a label's text; returns false if no such label exists
    pub fn set_label_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.labels.iter_mut().find(|l| l.id == id) {
            Some(label) => {
                label.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn canvas(&self) -> Option<&CanvasState> {
        self.canvas.as_ref().map(|c| &c.state)
    }

    pub fn canvas_mut(&mut self) -> Option<&mut CanvasState> {
        self.canvas.as_mut().map(|c| &mut c.state)
    }

    /// Window-space rectangle of the canvas, if the view has one
    pub fn canvas_bounds(&self) -> Option<Rect> {
        self.canvas.as_ref().map(|c| c.bounds)
    }

    /// Pointer moved (window coordinates)
    pub fn pointer_moved(&mut self, position: Vec2) {
        if let Some(canvas) = &mut self.canvas {
            canvas.state.pointer_moved(position - canvas.bounds.origin());
        }
    }

    /// Pointer clicked (window coordinates)
    ///
    /// `SetText` actions are applied here; any other action of the clicked
    /// button is returned for the caller to carry out.
    pub fn pointer_clicked(&mut self, position: Vec2, clicks: u32) -> Option<UiAction> {
        let action = self
            .buttons
            .iter()
            .find(|b| b.bounds.contains(position))
            .map(|b| b.action.clone());

        if let Some(action) = action {
            return match action {
                UiAction::SetText { target, text } => {
                    if !self.set_label_text(&target, text) {
                        log::warn!("View '{}' has no label '{}'", self.name, target);
                    }
                    None
                }
                other => Some(other),
            };
        }

        if let Some(canvas) = &mut self.canvas {
            canvas.state.pointer_clicked(position - canvas.bounds.origin(), clicks);
        }
        None
    }

    /// Run one frame: clear, canvas render loop, then labels and buttons
    pub fn advance_frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear();

        let stats = match &mut self.canvas {
            Some(canvas) => {
                let mut region = Translated::new(&mut *surface, canvas.bounds, canvas.background);
                render_frame(&mut canvas.state, &mut region)
            }
            None => FrameStats::default(),
        };

        self.draw_widgets(surface);
        stats
    }

    fn draw_widgets<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for label in &self.labels {
            if !label.text.is_empty() {
                surface.fill_text(&label.text, label.position, label.color, TextAlign::Left);
            }
        }

        for button in &self.buttons {
            let b = button.bounds;
            surface.fill_rect(b, BUTTON_BORDER);
            surface.fill_rect(Rect::new(b.x + 1.0, b.y + 1.0, b.width - 2.0, b.height - 2.0), BUTTON_FACE);
            surface.fill_text(&button.text, b.center(), BUTTON_TEXT, TextAlign::Center);
        }
    }
}
