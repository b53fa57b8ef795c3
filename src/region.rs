use crate::board::{BOARD_SIZE, CELL_COUNT};
use crate::error::RegionError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

const SPAN: i32 = BOARD_SIZE as i32;

/// A block position inside some space (a world, a dimension, a scene...).
///
/// The space identifier is opaque to the engine; it is only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate<W> {
    /// The space this position belongs to.
    pub space: W,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl<W> Coordinate<W> {
    /// Creates a new coordinate in the given space.
    pub const fn new(space: W, x: i32, y: i32, z: i32) -> Self {
        Self { space, x, y, z }
    }
}

/// The pair of axes a board slab spans. The remaining axis is fixed.
///
/// Cell rows follow the first spanning axis and columns the second one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plane {
    /// Spans x and y, z is fixed. An upright board facing along z.
    #[default]
    XY,
    /// Spans x and z, y is fixed. A board lying flat on the ground.
    XZ,
    /// Spans y and z, x is fixed. An upright board facing along x.
    YZ,
}

impl Plane {
    /// Splits a coordinate into `(a, b, c)`: the two spanning components and the fixed one.
    pub fn project<W>(self, coordinate: &Coordinate<W>) -> (i32, i32, i32) {
        match self {
            Plane::XY => (coordinate.x, coordinate.y, coordinate.z),
            Plane::XZ => (coordinate.x, coordinate.z, coordinate.y),
            Plane::YZ => (coordinate.y, coordinate.z, coordinate.x),
        }
    }

    /// Inverse of [`Plane::project`].
    pub fn compose<W>(self, space: W, a: i32, b: i32, c: i32) -> Coordinate<W> {
        match self {
            Plane::XY => Coordinate::new(space, a, b, c),
            Plane::XZ => Coordinate::new(space, a, c, b),
            Plane::YZ => Coordinate::new(space, c, a, b),
        }
    }
}

/// The nine physical anchors of a match, one per cell, in row-major order
/// (`index = x * 3 + y`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorCoordinates<W> {
    anchors: [Coordinate<W>; CELL_COUNT],
}

impl<W> AnchorCoordinates<W> {
    /// Returns the anchor of cell `(x, y)`, or `None` outside the board.
    pub fn get(&self, x: usize, y: usize) -> Option<&Coordinate<W>> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        self.anchors.get(x * BOARD_SIZE + y)
    }

    /// Returns the anchor stored at a flat cell index (0..9).
    pub fn by_index(&self, index: usize) -> Option<&Coordinate<W>> {
        self.anchors.get(index)
    }

    /// Iterates the anchors in cell index order.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate<W>> {
        self.anchors.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate<W>] {
        &self.anchors
    }
}

impl<W: PartialEq> AnchorCoordinates<W> {
    /// Reverse lookup: which cell is anchored at `coordinate`, if any.
    pub fn cell_at(&self, coordinate: &Coordinate<W>) -> Option<(usize, usize)> {
        self.anchors
            .iter()
            .position(|anchor| anchor == coordinate)
            .map(|index| (index / BOARD_SIZE, index % BOARD_SIZE))
    }
}

/// Validates a region and derives the anchor coordinates of its cells.
///
/// `upper` must be exactly `BOARD_SIZE` blocks away from `lower` along both spanning axes
/// of `plane` and level with it on the fixed axis. Nothing is rounded, clamped or swapped:
/// any other shape is rejected. The anchors start at `lower` and walk the first spanning
/// axis in the outer loop and the second one in the inner loop, so the cell index of the
/// offset `(a, b)` is `a * 3 + b`.
pub fn map_region<W>(
    lower: &Coordinate<W>,
    upper: &Coordinate<W>,
    plane: Plane,
) -> Result<AnchorCoordinates<W>, RegionError<W>>
where
    W: PartialEq + Clone + Debug,
{
    if lower.space != upper.space {
        tracing::warn!(lower = ?lower.space, upper = ?upper.space, "region spans two spaces");
        return Err(RegionError::CrossSpace {
            lower: lower.space.clone(),
            upper: upper.space.clone(),
        });
    }

    let (lower_a, lower_b, lower_c) = plane.project(lower);
    let (upper_a, upper_b, upper_c) = plane.project(upper);

    let is_slab = lower_a.checked_add(SPAN) == Some(upper_a)
        && lower_b.checked_add(SPAN) == Some(upper_b)
        && lower_c == upper_c;
    if !is_slab {
        tracing::warn!(?lower, ?upper, ?plane, "region is not a 3x3 slab");
        return Err(RegionError::InvalidShape {
            plane,
            lower: lower.clone(),
            upper: upper.clone(),
        });
    }

    let anchors = std::array::from_fn(|index| {
        let a_offset = (index / BOARD_SIZE) as i32;
        let b_offset = (index % BOARD_SIZE) as i32;
        plane.compose(
            lower.space.clone(),
            lower_a + a_offset,
            lower_b + b_offset,
            lower_c,
        )
    });

    tracing::debug!(?lower, ?plane, "mapped region to anchor coordinates");
    Ok(AnchorCoordinates { anchors })
}
