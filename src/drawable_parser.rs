use crate::error::IconError;
use crate::path::{
    DEFAULT_DIMENSION, DEFAULT_FILL, DEFAULT_LINE_CAP, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH,
    PathSpec, VectorDrawable,
};
use roxmltree::{Document, Node};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

fn android_attr<'a>(node: &Node<'a, '_>, name: &str, default: &'a str) -> &'a str {
    node.attribute((ANDROID_NS, name)).unwrap_or(default)
}

/// Declared sizes are written as e.g. "108dp"; keep only the number.
fn strip_dp(value: &str) -> String {
    value.strip_suffix("dp").unwrap_or(value).to_string()
}

/// Collects every `path` element below `root`, matched on the local tag name so
/// prefixed and unprefixed documents both work.
pub fn visit_paths<'a, 'input>(root: Node<'a, 'input>, paths: &mut Vec<Node<'a, 'input>>) {
    for node in root.children().filter(Node::is_element) {
        if node.tag_name().name() == "path" {
            paths.push(node);
        }
        visit_paths(node, paths);
    }
}

pub fn parse_drawable(path: &Path) -> Result<VectorDrawable, IconError> {
    let xml = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IconError::InputNotFound(path.to_path_buf()),
        _ => IconError::io(path, e),
    })?;
    parse_drawable_str(&xml)
}

pub fn parse_drawable_str(xml: &str) -> Result<VectorDrawable, IconError> {
    let doc = Document::parse(xml).map_err(|e| IconError::Parse(e.to_string()))?;
    let root = doc.root_element();

    let mut nodes = vec![];
    visit_paths(root, &mut nodes);
    info!("found {} path elements", nodes.len());

    let mut drawable = VectorDrawable {
        width: strip_dp(android_attr(&root, "width", DEFAULT_DIMENSION)),
        height: strip_dp(android_attr(&root, "height", DEFAULT_DIMENSION)),
        viewport_width: android_attr(&root, "viewportWidth", DEFAULT_DIMENSION).to_string(),
        viewport_height: android_attr(&root, "viewportHeight", DEFAULT_DIMENSION).to_string(),
        ..Default::default()
    };
    debug!(
        "declared size {}x{}, viewport {}x{}",
        drawable.width, drawable.height, drawable.viewport_width, drawable.viewport_height
    );

    for (i, node) in nodes.iter().enumerate() {
        let path_data = android_attr(node, "pathData", "");
        if path_data.trim().is_empty() {
            warn!(index = i, "path element has no pathData, skipping");
            drawable.skipped_paths += 1;
            continue;
        }
        let path = PathSpec::new(path_data)
            .with_fill(android_attr(node, "fillColor", DEFAULT_FILL))
            .with_stroke(
                android_attr(node, "strokeColor", DEFAULT_STROKE),
                android_attr(node, "strokeWidth", DEFAULT_STROKE_WIDTH),
                android_attr(node, "strokeLineCap", DEFAULT_LINE_CAP),
            );
        debug!(index = i, fill = %path.fill_color, stroke = %path.stroke_color, "parsed path");
        drawable.paths.push(path);
    }

    Ok(drawable)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOREGROUND: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="108dp"
    android:height="96dp"
    android:viewportWidth="108"
    android:viewportHeight="96">
    <group android:translateX="4">
        <path
            android:pathData="M30,30 L78,30 L78,78 Z"
            android:fillColor="#FF3DDC84" />
    </group>
    <path
        android:pathData="M20,54 L88,54"
        android:fillColor="#00000000"
        android:strokeColor="#FFFFFFFF"
        android:strokeWidth="4"
        android:strokeLineCap="round" />
</vector>"##;

    #[test]
    fn reads_root_dimensions() {
        let drawable = parse_drawable_str(FOREGROUND).unwrap();
        assert_eq!(drawable.width, "108");
        assert_eq!(drawable.height, "96");
        assert_eq!(drawable.viewport_width, "108");
        assert_eq!(drawable.viewport_height, "96");
    }

    #[test]
    fn finds_nested_paths_in_document_order() {
        let drawable = parse_drawable_str(FOREGROUND).unwrap();
        assert_eq!(drawable.paths.len(), 2);
        assert_eq!(drawable.paths[0].path_data, "M30,30 L78,30 L78,78 Z");
        assert_eq!(drawable.paths[0].fill_color, "#FF3DDC84");
        assert!(!drawable.paths[0].has_stroke());

        let stroked = &drawable.paths[1];
        assert_eq!(stroked.fill_color, "none");
        assert_eq!(stroked.stroke_color, "#FFFFFFFF");
        assert_eq!(stroked.stroke_width, "4");
        assert_eq!(stroked.stroke_line_cap, "round");
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let xml = r#"<vector xmlns:android="http://schemas.android.com/apk/res/android">
            <path android:pathData="M0,0 L1,1" />
        </vector>"#;
        let drawable = parse_drawable_str(xml).unwrap();
        assert_eq!(drawable.viewport_width, "108");
        assert_eq!(drawable.viewport_height, "108");
        let path = &drawable.paths[0];
        assert_eq!(path.fill_color, "none");
        assert_eq!(path.stroke_color, "none");
        assert_eq!(path.stroke_width, "0");
        assert_eq!(path.stroke_line_cap, "butt");
    }

    #[test]
    fn empty_path_data_is_skipped() {
        let xml = r##"<vector xmlns:android="http://schemas.android.com/apk/res/android">
            <path android:pathData="" android:fillColor="#FF000000" />
            <path android:fillColor="#FF000000" />
            <path android:pathData="M0,0 L1,1" />
        </vector>"##;
        let drawable = parse_drawable_str(xml).unwrap();
        assert_eq!(drawable.paths.len(), 1);
        assert_eq!(drawable.skipped_paths, 2);
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err = parse_drawable_str("<vector><path></vector>").unwrap_err();
        assert!(matches!(err, IconError::Parse(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("ic_launcher_foreground.xml");
        let err = parse_drawable(&missing).unwrap_err();
        assert!(matches!(err, IconError::InputNotFound(p) if p == missing));
    }
}
