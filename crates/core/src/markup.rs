//! SVG/HTML and plain-text renderings of visual aids.

use crate::model::{Icon, Shape};

const STROKE: &str = "#374151";
const SHAPE_STROKE: &str = "#3b82f6";
const MAX_NUMBER_LINE_WIDTH: f64 = 800.0;
const PX_PER_UNIT: f64 = 50.0;

/// Number line with one tick and label per integer in `start..=end`.
///
/// `highlight` marks a single position with a dot.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn number_line_svg(start: i64, end: i64, highlight: Option<i64>) -> String {
    let range = (end - start).max(1) as f64;
    let width = MAX_NUMBER_LINE_WIDTH.min(range * PX_PER_UNIT);
    let scale = width / range;

    let mut svg = format!(
        r#"<svg width="{width}" height="120" viewBox="0 0 {width} 120" class="number-line">"#
    );
    svg.push_str(&format!(
        r#"<line x1="0" y1="60" x2="{width}" y2="60" stroke="{STROKE}" stroke-width="3"/>"#
    ));

    for i in start..=end {
        let x = (i - start) as f64 * scale;
        svg.push_str(&format!(
            r#"<line x1="{x}" y1="50" x2="{x}" y2="70" stroke="{STROKE}" stroke-width="2"/>"#
        ));
        svg.push_str(&format!(
            r#"<text x="{x}" y="90" text-anchor="middle" font-size="14" font-weight="600" fill="{STROKE}">{i}</text>"#
        ));
        if highlight == Some(i) {
            svg.push_str(&format!(
                r##"<circle cx="{x}" cy="60" r="8" fill="#ef4444" stroke="#fff" stroke-width="2"/>"##
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Terminal number line, e.g. `|--|--|` over `-1  0  1`.
#[must_use]
pub fn number_line_text(start: i64, end: i64) -> String {
    let labels: Vec<String> = (start..=end).map(|i| i.to_string()).collect();
    let cell = labels.iter().map(String::len).max().unwrap_or(1) + 2;

    let mut line = String::new();
    let mut row = String::new();
    for (idx, label) in labels.iter().enumerate() {
        if idx > 0 {
            line.push_str(&"-".repeat(cell - 1));
        }
        line.push('|');
        row.push_str(&format!("{label:<cell$}"));
    }
    format!("{line}\n{}", row.trim_end())
}

/// Repeated icon spans with a staggered pop-in delay.
#[must_use]
pub fn icon_group_html(icon: Icon, count: u32) -> String {
    let mut html = String::from(r#"<div class="counting-objects">"#);
    for i in 0..count {
        let delay = f64::from(i) * 0.1;
        html.push_str(&format!(
            r#"<span class="counting-object" style="animation-delay: {delay:.1}s">{}</span>"#,
            icon.glyph()
        ));
    }
    html.push_str("</div>");
    html
}

/// `count` shapes laid out in a wrapping row; a single shape is centered.
#[must_use]
pub fn shape_group_html(shape: Shape, count: u32, size: u32) -> String {
    let class = if count > 1 {
        "flex flex-wrap justify-center gap-2 mb-4"
    } else {
        "flex justify-center mb-4"
    };
    let mut html = format!(r#"<div class="{class}">"#);
    for _ in 0..count {
        html.push_str(&shape_svg(shape, size));
    }
    html.push_str("</div>");
    html
}

/// Outline drawing of one shape inside a `size`-pixel square.
#[must_use]
pub fn shape_svg(shape: Shape, size: u32) -> String {
    let s = f64::from(size);
    let body = match shape {
        Shape::Triangle => format!(
            "<polygon points=\"{},10 10,{} {},{}\"",
            s / 2.0,
            s - 10.0,
            s - 10.0,
            s - 10.0
        ),
        Shape::Square => format!(
            "<rect x=\"10\" y=\"10\" width=\"{}\" height=\"{}\"",
            s - 20.0,
            s - 20.0
        ),
        Shape::Rectangle => format!(
            "<rect x=\"10\" y=\"20\" width=\"{}\" height=\"{}\"",
            s - 20.0,
            s - 40.0
        ),
        Shape::Circle => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            s / 2.0,
            s / 2.0,
            (s - 20.0) / 2.0
        ),
        Shape::Pentagon => format!(
            "<polygon points=\"{},10 {},{} {},{} {},{} 10,{}\"",
            s / 2.0,
            s - 10.0,
            s / 3.0,
            s * 0.75,
            s - 10.0,
            s * 0.25,
            s - 10.0,
            s / 3.0
        ),
        Shape::Hexagon => format!(
            "<polygon points=\"{},10 {},{} {},{} {},{} 10,{} 10,{}\"",
            s / 2.0,
            s - 10.0,
            s / 4.0,
            s - 10.0,
            s * 0.75,
            s / 2.0,
            s - 10.0,
            s * 0.75,
            s / 4.0
        ),
    };
    format!(
        r#"<svg width="{size}" height="{size}" class="shape-svg">{body} fill="none" stroke="{SHAPE_STROKE}" stroke-width="3"/></svg>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_line_has_one_label_per_integer() {
        let svg = number_line_svg(-1, 3, None);
        assert!(svg.starts_with(r#"<svg width="200" height="120""#));
        assert_eq!(svg.matches("<text").count(), 5);
        assert!(svg.contains(">-1</text>"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn number_line_width_is_capped() {
        let svg = number_line_svg(0, 40, Some(7));
        assert!(svg.starts_with(r#"<svg width="800""#));
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn number_line_text_aligns_ticks_and_labels() {
        let text = number_line_text(0, 2);
        assert_eq!(text, "|--|--|\n0  1  2");
    }

    #[test]
    fn icon_group_repeats_glyph() {
        let html = icon_group_html(Icon::Apple, 3);
        assert_eq!(html.matches("🍎").count(), 3);
        assert!(html.contains("animation-delay: 0.2s"));
    }

    #[test]
    fn shape_svg_uses_requested_size() {
        let svg = shape_svg(Shape::Square, 120);
        assert!(svg.contains(r#"width="100" height="100""#));
        assert!(svg.starts_with(r#"<svg width="120" height="120""#));

        let group = shape_group_html(Shape::Circle, 3, 60);
        assert_eq!(group.matches("<circle").count(), 3);
    }
}
