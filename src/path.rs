/// Android's fully transparent color, treated the same as "none".
pub const TRANSPARENT: &str = "#00000000";

pub const DEFAULT_DIMENSION: &str = "108";
pub const DEFAULT_FILL: &str = "none";
pub const DEFAULT_STROKE: &str = "none";
pub const DEFAULT_STROKE_WIDTH: &str = "0";
pub const DEFAULT_LINE_CAP: &str = "butt";

#[derive(Debug, Clone, PartialEq)]
pub struct PathSpec {
    pub path_data: String,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: String,
    pub stroke_line_cap: String,
}

impl PathSpec {
    pub fn new(path_data: &str) -> Self {
        Self {
            path_data: path_data.to_string(),
            fill_color: DEFAULT_FILL.to_string(),
            stroke_color: DEFAULT_STROKE.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH.to_string(),
            stroke_line_cap: DEFAULT_LINE_CAP.to_string(),
        }
    }

    /// Sets the fill, mapping the transparent sentinel to "none".
    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill_color = if fill == TRANSPARENT {
            DEFAULT_FILL.to_string()
        } else {
            fill.to_string()
        };
        self
    }

    pub fn with_stroke(mut self, color: &str, width: &str, line_cap: &str) -> Self {
        self.stroke_color = color.to_string();
        self.stroke_width = width.to_string();
        self.stroke_line_cap = line_cap.to_string();
        self
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke_color != DEFAULT_STROKE && self.stroke_color != TRANSPARENT
    }
}

/// A parsed vector drawable. Dimensions are kept as the strings found in the
/// document; `width` and `height` are informational only.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDrawable {
    pub width: String,
    pub height: String,
    pub viewport_width: String,
    pub viewport_height: String,
    pub paths: Vec<PathSpec>,
    /// Path elements dropped because they had no drawing commands.
    pub skipped_paths: usize,
}

impl Default for VectorDrawable {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION.to_string(),
            height: DEFAULT_DIMENSION.to_string(),
            viewport_width: DEFAULT_DIMENSION.to_string(),
            viewport_height: DEFAULT_DIMENSION.to_string(),
            paths: Vec::new(),
            skipped_paths: 0,
        }
    }
}
