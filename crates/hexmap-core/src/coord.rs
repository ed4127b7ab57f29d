//! Axial coordinates, world-space points, and the packed [`CoordKey`].

use std::fmt;

/// Integer axial coordinate `(q, r)` of a hex cell.
///
/// The third cube component `s = -q - r` is derived on demand and never
/// stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AxialCoord {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
}

impl AxialCoord {
    /// The origin cell `(0, 0)`.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a coordinate from its two axial components.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived cube component `s = -q - r`, widened so it exists for every
    /// `(q, r)`.
    pub const fn s(self) -> i64 {
        -(self.q as i64) - self.r as i64
    }

    /// The adjacent coordinate in `direction`.
    ///
    /// # Panics
    ///
    /// Panics on overflow in debug builds when `self` sits on the `i32`
    /// boundary in that direction. Use [`checked_neighbour`] for cells that
    /// may lie on the edge of the coordinate space.
    ///
    /// [`checked_neighbour`]: Self::checked_neighbour
    pub fn neighbour(self, direction: HexDirection) -> Self {
        let (dq, dr) = direction.offset();
        Self::new(self.q + dq, self.r + dr)
    }

    /// The adjacent coordinate in `direction`, or `None` if it is not
    /// representable.
    pub fn checked_neighbour(self, direction: HexDirection) -> Option<Self> {
        let (dq, dr) = direction.offset();
        Some(Self::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }

    /// All six adjacent coordinates in [`HexDirection::ALL`] order.
    ///
    /// Same overflow behaviour as [`neighbour`](Self::neighbour).
    pub fn neighbours(self) -> [Self; 6] {
        HexDirection::ALL.map(|d| self.neighbour(d))
    }

    /// Representable adjacent coordinates in [`HexDirection::ALL`] order.
    ///
    /// Directions that would leave the `i32` range are skipped.
    pub fn checked_neighbours(self) -> impl Iterator<Item = Self> {
        HexDirection::ALL
            .into_iter()
            .filter_map(move |d| self.checked_neighbour(d))
    }

    /// Packed lookup key for this coordinate.
    pub fn key(self) -> CoordKey {
        CoordKey::pack(self)
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

impl From<(i32, i32)> for AxialCoord {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

/// Hex distance between two cells: the minimum number of steps on an
/// unbounded hex grid.
///
/// Computed as `(|dq| + |dq + dr| + |dr|) / 2`, which equals
/// `max(|dq|, |dr|, |dq + dr|)`. Admissible and consistent as an A*
/// heuristic for unit-cost moves.
///
/// Saturates at `u32::MAX` for pairs further apart than that.
pub fn hex_distance(a: AxialCoord, b: AxialCoord) -> u32 {
    let dq = (a.q as i64 - b.q as i64).abs();
    let dr = (a.r as i64 - b.r as i64).abs();
    let ds = (a.s() - b.s()).abs();
    u32::try_from((dq + ds + dr) / 2).unwrap_or(u32::MAX)
}

/// The six pointy-top neighbour directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexDirection {
    /// `(+1, 0)`
    East,
    /// `(+1, -1)`
    NorthEast,
    /// `(0, -1)`
    NorthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, +1)`
    SouthWest,
    /// `(0, +1)`
    SouthEast,
}

impl HexDirection {
    /// Canonical enumeration order: east, then counter-clockwise.
    ///
    /// Neighbour lists are always produced in this order.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Axial `(dq, dr)` offset of this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::NorthEast => (1, -1),
            Self::NorthWest => (0, -1),
            Self::West => (-1, 0),
            Self::SouthWest => (-1, 1),
            Self::SouthEast => (0, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::West => Self::East,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
        }
    }
}

/// Collision-free packed key for an [`AxialCoord`].
///
/// Layout: `q` in the high 32 bits, `r` in the low 32 bits, both as their
/// two's-complement bit patterns. Distinct `(q, r)` pairs never share a
/// key and [`unpack`](Self::unpack) is an exact inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordKey(u64);

impl CoordKey {
    /// Pack a coordinate.
    pub const fn pack(coord: AxialCoord) -> Self {
        Self(((coord.q as u32 as u64) << 32) | (coord.r as u32 as u64))
    }

    /// Recover the coordinate this key was packed from.
    pub const fn unpack(self) -> AxialCoord {
        AxialCoord {
            q: (self.0 >> 32) as u32 as i32,
            r: self.0 as u32 as i32,
        }
    }

    /// Raw packed value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<AxialCoord> for CoordKey {
    fn from(coord: AxialCoord) -> Self {
        Self::pack(coord)
    }
}

/// A point in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component (grows downward in screen space).
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Non-integer axial coordinate, produced by the inverse transform.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FractionalAxial {
    /// Fractional column axis.
    pub q: f64,
    /// Fractional row axis.
    pub r: f64,
}

impl FractionalAxial {
    /// Create a fractional coordinate.
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }
}

impl From<AxialCoord> for FractionalAxial {
    fn from(coord: AxialCoord) -> Self {
        Self::new(coord.q as f64, coord.r as f64)
    }
}
