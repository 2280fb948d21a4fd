use std::fmt;

/// Which side of the zero-intensity boundary a column belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClass {
    /// Any non-zero intensity
    Land,
    /// Exactly zero intensity
    Water,
}

impl LineClass {
    /// Binary membership test for a single intensity value.
    /// The boundary is hard at zero, there is no partial membership.
    pub fn accepts(self, value: u8) -> bool {
        match self {
            LineClass::Land => value > 0,
            LineClass::Water => value == 0,
        }
    }
}

impl fmt::Display for LineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineClass::Land => write!(f, "land"),
            LineClass::Water => write!(f, "water"),
        }
    }
}

/// How a single document is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Land,
    Water,
    /// Every column of every row, unclassified
    Both,
}

impl RenderMode {
    /// The classifier class for this mode, `None` for `Both`
    pub fn class(self) -> Option<LineClass> {
        match self {
            RenderMode::Land => Some(LineClass::Land),
            RenderMode::Water => Some(LineClass::Water),
            RenderMode::Both => None,
        }
    }

    /// Lowercase name, also used as the output file suffix
    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Land => "land",
            RenderMode::Water => "water",
            RenderMode::Both => "both",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested output type: one mode, or all three as separate documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    Land,
    Water,
    Both,
    #[default]
    All,
}

impl OutputType {
    /// Render modes this output type produces, in output order
    pub fn modes(self) -> &'static [RenderMode] {
        match self {
            OutputType::Land => &[RenderMode::Land],
            OutputType::Water => &[RenderMode::Water],
            OutputType::Both => &[RenderMode::Both],
            OutputType::All => &[RenderMode::Land, RenderMode::Water, RenderMode::Both],
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Land => write!(f, "land"),
            OutputType::Water => write!(f, "water"),
            OutputType::Both => write!(f, "both"),
            OutputType::All => write!(f, "all"),
        }
    }
}

/// 2D point in document units: column and inverted-height y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Run of same-class points within one row.
/// Never empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    points: Vec<Point>,
}

impl Segment {
    /// Wrap a point list, returning `None` when it is empty
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Open polyline as rendered into a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Vector document with a fixed canvas and ordered polylines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub width: u32,
    pub height: u32,
    /// Row order first, then left-to-right within a row
    pub polylines: Vec<Polyline>,
}

impl Document {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            polylines: Vec::new(),
        }
    }

    /// Total number of points across all polylines
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(|p| p.points.len()).sum()
    }
}
