//! Positions, distances, and nearest-candidate search.
//!
//! Every spatial judgment in the engine is a straight-line Euclidean
//! distance; site geometry is never used to plan paths.

/// Width of the playing field.
pub const FIELD_WIDTH: i32 = 1920;

/// Height of the playing field.
pub const FIELD_HEIGHT: i32 = 1000;

/// A point on the playing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Returns the field corner closest to this position.
    pub fn nearest_corner(self) -> Position {
        let x = if self.x < FIELD_WIDTH / 2 { 0 } else { FIELD_WIDTH };
        let y = if self.y < FIELD_HEIGHT / 2 { 0 } else { FIELD_HEIGHT };
        Position::new(x, y)
    }

    /// Clamps the position so it stays at least `margin_x`/`margin_y` away
    /// from every edge of the field. Margins wider than half the field pin
    /// the coordinate to the far bound instead of panicking.
    pub fn clamped(self, margin_x: i32, margin_y: i32) -> Position {
        Position::new(
            self.x.max(margin_x).min(FIELD_WIDTH - margin_x),
            self.y.max(margin_y).min(FIELD_HEIGHT - margin_y),
        )
    }
}

/// The winner of a nearest-candidate search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Index of the winning candidate in the searched sequence.
    pub index: usize,
    /// Distance from the origin to the winning candidate.
    pub distance: f64,
}

/// Finds the candidate closest to `origin`.
///
/// Linear scan; a later candidate replaces the current best only if it is
/// strictly closer, so ties go to the earlier candidate. Returns `None`
/// when `candidates` is empty.
pub fn nearest(origin: Position, candidates: &[Position]) -> Option<Nearest> {
    nearest_by(origin, candidates.iter(), |p| **p).map(|(index, _, distance)| Nearest {
        index,
        distance,
    })
}

/// Generalized form of [`nearest`] over any sequence of items that carry a
/// position. Returns the winning item together with its index and distance.
pub fn nearest_by<T, I, F>(origin: Position, items: I, position: F) -> Option<(usize, T, f64)>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Position,
{
    let mut best: Option<(usize, T, f64)> = None;
    for (i, item) in items.into_iter().enumerate() {
        let d = origin.distance(position(&item));
        let closer = match &best {
            Some((_, _, best_d)) => d < *best_d,
            None => true,
        };
        if closer {
            best = Some((i, item, d));
        }
    }
    best
}
