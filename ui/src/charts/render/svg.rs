//! Serializes a [`Scene`] to SVG markup.

use std::fmt::Write;

use super::scene::{Mark, Scene, Shape, Style};

const LINE_HEIGHT_EM: f64 = 1.2;

pub fn markup(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid meet" role="img" font-family="Inter, system-ui, sans-serif">"#,
        w = scene.width,
        h = scene.height,
    );
    for mark in scene.marks() {
        write_mark(&mut out, mark);
    }
    out.push_str("</svg>");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    let style = style_attrs(&mark.style);
    let (open, close) = match &mark.shape {
        Shape::Rect { rect, radius } => (
            format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{radius}"{style}>"#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height()
            ),
            "</rect>",
        ),
        Shape::Circle { center, r } => (
            format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{r:.2}"{style}>"#,
                center.0, center.1
            ),
            "</circle>",
        ),
        Shape::Path { d } => (format!(r#"<path d="{d}"{style}>"#), "</path>"),
        Shape::Line { from, to } => (
            format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{style}>"#,
                from.0, from.1, to.0, to.1
            ),
            "</line>",
        ),
        Shape::Text {
            at,
            text,
            size,
            anchor,
            bold,
            rotate,
        } => {
            let weight = if *bold { "700" } else { "500" };
            let transform = rotate
                .map(|deg| format!(r#" transform="rotate({deg} {:.2} {:.2})""#, at.0, at.1))
                .unwrap_or_default();
            let lines: Vec<&str> = text.split('\n').collect();
            let first_dy = match lines.len() {
                0 | 1 => 0.0,
                n => -((n - 1) as f64) / 2.0 * LINE_HEIGHT_EM,
            };
            let mut body = String::new();
            for (i, line) in lines.iter().enumerate() {
                let dy = if i == 0 { first_dy } else { LINE_HEIGHT_EM };
                let _ = write!(
                    body,
                    r#"<tspan x="{:.2}" dy="{dy}em">{}</tspan>"#,
                    at.0,
                    escape(line)
                );
            }
            (
                format!(
                    r#"<text x="{:.2}" y="{:.2}" font-size="{size}" font-weight="{weight}" text-anchor="{}" dominant-baseline="middle"{transform}{style}>{body}"#,
                    at.0,
                    at.1,
                    anchor.as_svg()
                ),
                "</text>",
            )
        }
    };
    out.push_str(&open);
    if let Some(tooltip) = &mark.tooltip {
        let _ = write!(out, "<title>{}</title>", escape(tooltip));
    }
    out.push_str(close);
}

fn style_attrs(style: &Style) -> String {
    let mut attrs = String::new();
    match style.fill {
        Some(fill) => {
            let _ = write!(attrs, r#" fill="{fill}""#);
        }
        None => attrs.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = style.stroke {
        let _ = write!(
            attrs,
            r#" stroke="{stroke}" stroke-width="{}""#,
            style.stroke_width
        );
    }
    if let Some((on, off)) = style.dash {
        let _ = write!(attrs, r#" stroke-dasharray="{on} {off}""#);
    }
    attrs
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::render::{geometry::Rect, scene::Anchor};
    use crate::core::palette::{DARK, WHITE};

    #[test]
    fn tooltips_become_title_elements() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.push(
            Mark::rect(Rect::new(0.0, 0.0, 10.0, 20.0), 4.0)
                .fill(WHITE.with_alpha(0.5))
                .tooltip("Female: 96 respondents (62.3%)"),
        );
        let svg = markup(&scene);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(svg.contains(r#"fill="rgba(255, 255, 255, 0.5)""#));
        assert!(svg.contains("<title>Female: 96 respondents (62.3%)</title></rect>"));
    }

    #[test]
    fn multi_line_labels_use_tspans() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.push(Mark::text((50.0, 50.0), "62.3%\n(96)", 18.0, Anchor::Middle, WHITE).bold());
        let svg = markup(&scene);
        assert!(svg.contains(r#"<tspan x="50.00" dy="-0.6em">62.3%</tspan>"#));
        assert!(svg.contains(r#"<tspan x="50.00" dy="1.2em">(96)</tspan>"#));
        assert!(svg.contains(r#"font-weight="700""#));
    }

    #[test]
    fn text_is_escaped() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.push(Mark::text((0.0, 0.0), "Lighting & Music", 11.0, Anchor::End, DARK));
        assert!(markup(&scene).contains("Lighting &amp; Music"));
    }

    #[test]
    fn dashed_unfilled_path() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.push(
            Mark::path("M0,0 L1,1".into())
                .stroke(DARK, 2.0)
                .dash(Some((6.0, 4.0))),
        );
        let svg = markup(&scene);
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r#"stroke-dasharray="6 4""#));
        assert!(svg.contains(r##"stroke="#1a1a2e""##));
    }
}
