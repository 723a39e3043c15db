//! Flat list of drawable marks produced by the chart layouts.

use super::geometry::Rect;
use crate::core::palette::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        rect: Rect,
        radius: f64,
    },
    Circle {
        center: (f64, f64),
        r: f64,
    },
    Path {
        d: String,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
    },
    /// Vertically centered on `at`; `\n` starts a new line.
    Text {
        at: (f64, f64),
        text: String,
        size: f64,
        anchor: Anchor,
        bold: bool,
        /// Rotation in degrees around `at`.
        rotate: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    pub stroke_width: f64,
    pub dash: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub shape: Shape,
    pub style: Style,
    pub tooltip: Option<String>,
}

impl Mark {
    fn new(shape: Shape) -> Self {
        Self {
            shape,
            style: Style::default(),
            tooltip: None,
        }
    }

    pub fn rect(rect: Rect, radius: f64) -> Self {
        Self::new(Shape::Rect { rect, radius })
    }

    pub fn circle(center: (f64, f64), r: f64) -> Self {
        Self::new(Shape::Circle { center, r })
    }

    pub fn path(d: String) -> Self {
        Self::new(Shape::Path { d })
    }

    pub fn line(from: (f64, f64), to: (f64, f64), color: Rgba, width: f64) -> Self {
        Self::new(Shape::Line { from, to }).stroke(color, width)
    }

    pub fn text(at: (f64, f64), text: impl Into<String>, size: f64, anchor: Anchor, color: Rgba) -> Self {
        Self::new(Shape::Text {
            at,
            text: text.into(),
            size,
            anchor,
            bold: false,
            rotate: None,
        })
        .fill(color)
    }

    pub fn fill(mut self, color: Rgba) -> Self {
        self.style.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Rgba, width: f64) -> Self {
        self.style.stroke = Some(color);
        self.style.stroke_width = width;
        self
    }

    pub fn dash(mut self, dash: Option<(f64, f64)>) -> Self {
        self.style.dash = dash;
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        let tooltip = tooltip.into();
        self.tooltip = (!tooltip.is_empty()).then_some(tooltip);
        self
    }

    pub fn bold(mut self) -> Self {
        if let Shape::Text { bold, .. } = &mut self.shape {
            *bold = true;
        }
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        if let Shape::Text { rotate, .. } = &mut self.shape {
            *rotate = Some(degrees);
        }
        self
    }
}

/// Everything needed to draw one chart into a `width` × `height` view box.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    marks: Vec<Mark>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            marks: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(|mark| match &mark.shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn tooltips(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(|mark| mark.tooltip.as_deref())
    }
}

/// Rough advance width of `text` at `size`, for margin estimates.
pub fn text_width(text: &str, size: f64) -> f64 {
    text.lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as f64
        * size
        * 0.56
}
