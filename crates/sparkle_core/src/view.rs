//! View descriptions
//!
//! Views are declared in RON files and loaded by name at navigation time.
//! A description lists the window title and content size plus the widgets
//! shown: labels, buttons and at most one particle canvas.
//!
//! ```ron
//! ViewDescription(
//!     name: "welcome",
//!     title: Some("Hello!"),
//!     width: 320,
//!     height: 240,
//!     widgets: [
//!         Label(id: "welcome_text", text: "", position: (x: 20.0, y: 40.0)),
//!         Button(
//!             id: "open_canvas",
//!             text: "Open canvas",
//!             bounds: (x: 100.0, y: 150.0, width: 120.0, height: 32.0),
//!             on_click: Navigate(view: "canvas"),
//!         ),
//!     ],
//! )
//! ```

use serde::{Serialize, Deserialize};
use sparkle_math::{Color, Rect, Vec2};
use std::fs;
use std::io;
use std::path::Path;

/// Action fired by a button
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum UiAction {
    /// Replace the text of the label with id `target`
    SetText { target: String, text: String },
    /// Swap the window content to another view
    Navigate { view: String },
}

/// A widget template inside a view description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Widget {
    /// Static or action-updated text; `position` is the left end of the baseline
    Label {
        id: String,
        #[serde(default)]
        text: String,
        position: Vec2,
        #[serde(default)]
        color: Color,
    },
    /// Clickable button
    Button {
        id: String,
        text: String,
        bounds: Rect,
        on_click: UiAction,
    },
    /// Particle canvas region
    Canvas {
        id: String,
        bounds: Rect,
        #[serde(default = "default_canvas_background")]
        background: Color,
    },
}

fn default_canvas_background() -> Color {
    Color::WHITE
}

fn default_view_background() -> Color {
    Color::rgb(0.95, 0.95, 0.95)
}

impl Widget {
    /// Widget id
    pub fn id(&self) -> &str {
        match self {
            Widget::Label { id, .. } => id,
            Widget::Button { id, .. } => id,
            Widget::Canvas { id, .. } => id,
        }
    }
}

/// A serializable view description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewDescription {
    /// View name (resource name it is loaded by)
    pub name: String,
    /// Window title while the view is shown
    #[serde(default)]
    pub title: Option<String>,
    /// Content width in logical pixels
    pub width: u32,
    /// Content height in logical pixels
    pub height: u32,
    #[serde(default = "default_view_background")]
    pub background: Color,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl ViewDescription {
    /// Create an empty view description
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            title: None,
            width,
            height,
            background: default_view_background(),
            widgets: Vec::new(),
        }
    }

    /// Load a view description from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ViewLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Parse a view description from RON source
    pub fn from_ron_str(source: &str) -> Result<Self, ViewLoadError> {
        Ok(ron::from_str(source)?)
    }

    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a widget
    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widgets.push(widget);
        self
    }

    /// Find a widget by id
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }
}

/// Error loading a view description
#[derive(Debug)]
pub enum ViewLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax or shape)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for ViewLoadError {
    fn from(e: io::Error) -> Self {
        ViewLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ViewLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        ViewLoadError::Parse(e)
    }
}

impl std::fmt::Display for ViewLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewLoadError::Io(e) => write!(f, "IO error: {}", e),
            ViewLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ViewLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewLoadError::Io(e) => Some(e),
            ViewLoadError::Parse(e) => Some(e),
        }
    }
}
