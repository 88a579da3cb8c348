//! View validation
//!
//! Validates view descriptions before they are shown. The [`ViewValidator`]
//! catches duplicate widget ids, dangling `SetText` targets, more than one
//! canvas and degenerate sizes.

use std::collections::HashSet;

use crate::view::{UiAction, ViewDescription, Widget};

/// Validation error found in a view description
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Width or height is zero
    ZeroSize,
    /// Duplicate widget id found
    DuplicateId(String),
    /// More than one canvas widget
    MultipleCanvases,
    /// Widget bounds have zero or negative area
    EmptyBounds(String),
    /// `SetText` target does not name a label in this view
    UnknownLabel { button: String, target: String },
    /// `Navigate` with an empty view name
    EmptyNavigation(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroSize => write!(f, "View has zero width or height"),
            ValidationError::DuplicateId(id) => write!(f, "Duplicate widget id: '{}'", id),
            ValidationError::MultipleCanvases => write!(f, "View has more than one canvas"),
            ValidationError::EmptyBounds(id) => write!(f, "Widget '{}' has empty bounds", id),
            ValidationError::UnknownLabel { button, target } => {
                write!(f, "Button '{}' targets unknown label '{}'", button, target)
            }
            ValidationError::EmptyNavigation(id) => {
                write!(f, "Button '{}' navigates to an empty view name", id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// View validator that checks for common errors
pub struct ViewValidator;

impl ViewValidator {
    /// Validate a view, returning all errors found
    pub fn validate(view: &ViewDescription) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if view.width == 0 || view.height == 0 {
            errors.push(ValidationError::ZeroSize);
        }

        let mut seen_ids = HashSet::new();
        for widget in &view.widgets {
            if !seen_ids.insert(widget.id()) {
                errors.push(ValidationError::DuplicateId(widget.id().to_string()));
            }
        }

        let labels: HashSet<&str> = view
            .widgets
            .iter()
            .filter_map(|w| match w {
                Widget::Label { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect();

        let mut canvases = 0;
        for widget in &view.widgets {
            match widget {
                Widget::Label { .. } => {}
                Widget::Button { id, bounds, on_click, .. } => {
                    if bounds.is_empty() {
                        errors.push(ValidationError::EmptyBounds(id.clone()));
                    }
                    match on_click {
                        UiAction::SetText { target, .. } if !labels.contains(target.as_str()) => {
                            errors.push(ValidationError::UnknownLabel {
                                button: id.clone(),
                                target: target.clone(),
                            });
                        }
                        UiAction::Navigate { view } if view.trim().is_empty() => {
                            errors.push(ValidationError::EmptyNavigation(id.clone()));
                        }
                        _ => {}
                    }
                }
                Widget::Canvas { id, bounds, .. } => {
                    canvases += 1;
                    if bounds.is_empty() {
                        errors.push(ValidationError::EmptyBounds(id.clone()));
                    }
                }
            }
        }

        if canvases > 1 {
            errors.push(ValidationError::MultipleCanvases);
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(view: &ViewDescription) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(view);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkle_math::{Color, Rect, Vec2};

    fn label(id: &str) -> Widget {
        Widget::Label {
            id: id.to_string(),
            text: String::new(),
            position: Vec2::new(10.0, 20.0),
            color: Color::BLACK,
        }
    }

    fn button(id: &str, on_click: UiAction) -> Widget {
        Widget::Button {
            id: id.to_string(),
            text: "Go".to_string(),
            bounds: Rect::new(0.0, 0.0, 80.0, 30.0),
            on_click,
        }
    }

    fn canvas(id: &str) -> Widget {
        Widget::Canvas {
            id: id.to_string(),
            bounds: Rect::from_size(100.0, 100.0),
            background: Color::WHITE,
        }
    }

    #[test]
    fn test_valid_view() {
        let view = ViewDescription::new("welcome", 320, 240)
            .with_widget(label("text"))
            .with_widget(button(
                "hello",
                UiAction::SetText {
                    target: "text".to_string(),
                    text: "hi".to_string(),
                },
            ))
            .with_widget(button("go", UiAction::Navigate { view: "canvas".to_string() }));
        assert!(ViewValidator::validate_or_error(&view).is_ok());
    }

    #[test]
    fn test_zero_size() {
        let view = ViewDescription::new("empty", 0, 240);
        assert_eq!(ViewValidator::validate(&view), vec![ValidationError::ZeroSize]);
    }

    #[test]
    fn test_duplicate_id() {
        let view = ViewDescription::new("v", 10, 10)
            .with_widget(label("a"))
            .with_widget(label("a"));
        assert_eq!(
            ViewValidator::validate(&view),
            vec![ValidationError::DuplicateId("a".to_string())]
        );
    }

    #[test]
    fn test_unknown_label_target() {
        let view = ViewDescription::new("v", 10, 10).with_widget(button(
            "b",
            UiAction::SetText {
                target: "missing".to_string(),
                text: "x".to_string(),
            },
        ));
        assert_eq!(
            ViewValidator::validate(&view),
            vec![ValidationError::UnknownLabel {
                button: "b".to_string(),
                target: "missing".to_string()
            }]
        );
    }

    #[test]
    fn test_set_text_cannot_target_button() {
        let view = ViewDescription::new("v", 10, 10)
            .with_widget(button("other", UiAction::Navigate { view: "x".to_string() }))
            .with_widget(button(
                "b",
                UiAction::SetText {
                    target: "other".to_string(),
                    text: "x".to_string(),
                },
            ));
        assert_eq!(ViewValidator::validate(&view).len(), 1);
    }

    #[test]
    fn test_multiple_canvases() {
        let view = ViewDescription::new("v", 10, 10)
            .with_widget(canvas("c1"))
            .with_widget(canvas("c2"));
        assert_eq!(
            ViewValidator::validate(&view),
            vec![ValidationError::MultipleCanvases]
        );
    }

    #[test]
    fn test_empty_navigation() {
        let view = ViewDescription::new("v", 10, 10)
            .with_widget(button("b", UiAction::Navigate { view: "  ".to_string() }));
        assert_eq!(
            ViewValidator::validate(&view),
            vec![ValidationError::EmptyNavigation("b".to_string())]
        );
    }

    #[test]
    fn test_empty_canvas_bounds() {
        let view = ViewDescription::new("v", 10, 10).with_widget(Widget::Canvas {
            id: "c".to_string(),
            bounds: Rect::from_size(0.0, 10.0),
            background: Color::WHITE,
        });
        assert_eq!(
            ViewValidator::validate(&view),
            vec![ValidationError::EmptyBounds("c".to_string())]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::DuplicateId("hello".to_string());
        assert!(err.to_string().contains("hello"));
    }
}
