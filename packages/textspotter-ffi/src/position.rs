#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether the position addresses a pixel of a `width` x `height` image.
    pub fn within(&self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }
}

/// Outcome of a single match call.
///
/// Coordinates only exist on the `Found` arm, so a negative outcome can never
/// be drawn by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Found(Position),
    NotFound,
}

impl MatchResult {
    /// Interprets the raw `(bool, x, y)` triple written by the native library.
    ///
    /// The library reports "no match" as `(-1, -1)` and some builds return
    /// `true` regardless, so a negative slot always means not found.
    pub fn from_raw(found: bool, x: i32, y: i32) -> Self {
        match (found, u32::try_from(x), u32::try_from(y)) {
            (true, Ok(x), Ok(y)) => MatchResult::Found(Position { x, y }),
            _ => MatchResult::NotFound,
        }
    }

    pub fn found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            MatchResult::Found(pos) => Some(*pos),
            MatchResult::NotFound => None,
        }
    }

    pub fn x(&self) -> Option<u32> {
        self.position().map(|p| p.x)
    }

    pub fn y(&self) -> Option<u32> {
        self.position().map(|p| p.y)
    }
}
