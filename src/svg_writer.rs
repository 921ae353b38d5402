use crate::path::{PathSpec, VectorDrawable};

/// Side length of the synthesized SVG canvas. The drawable's declared
/// width/height are not used here.
pub const CANVAS_SIZE: u32 = 512;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn path_element(path: &PathSpec) -> String {
    let mut element = format!(
        "  <path d=\"{}\" fill=\"{}\"",
        escape_attr(&path.path_data),
        escape_attr(&path.fill_color)
    );
    if path.has_stroke() {
        element.push_str(&format!(
            " stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\"",
            escape_attr(&path.stroke_color),
            escape_attr(&path.stroke_width),
            escape_attr(&path.stroke_line_cap)
        ));
    }
    element.push_str("/>");
    element
}

pub fn synthesize_svg(drawable: &VectorDrawable) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(
            "<svg xmlns=\"{SVG_NS}\" width=\"{CANVAS_SIZE}\" height=\"{CANVAS_SIZE}\" viewBox=\"0 0 {} {}\">",
            escape_attr(&drawable.viewport_width),
            escape_attr(&drawable.viewport_height)
        ),
    ];
    lines.extend(
        drawable
            .paths
            .iter()
            .filter(|p| !p.path_data.trim().is_empty())
            .map(path_element),
    );
    lines.push("</svg>".to_string());
    lines.join("\n")
}
