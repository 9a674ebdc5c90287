//! Grid, vehicles and the derived occupancy grid.
//!
//! A [`Board`] is one complete puzzle configuration: the square grid size,
//! the ordered vehicle list (orientation and length are fixed per puzzle,
//! positions change between configurations) and a free-cell grid derived
//! from the positions. The grid is always recomputed wholesale from the
//! position list, never patched in place, so it is a pure function of the
//! positions whenever a recomputation has succeeded.

use std::fmt;

use crate::state::Move;

/// Axis a vehicle slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A 1-indexed grid cell. `col` grows rightward, `row` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: i32,
    pub row: i32,
}

impl Pos {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// The fixed half of a vehicle; its position lives in the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vehicle {
    pub orientation: Orientation,
    pub length: i32,
}

impl Vehicle {
    pub fn new(orientation: Orientation, length: i32) -> Self {
        Self {
            orientation,
            length,
        }
    }
}

#[derive(Debug)]
/// Structured errors for board construction and mutation.
pub enum BoardError {
    /// Grid side must be at least 1.
    SizeTooSmall { size: i32 },
    /// Vehicle list and position list lengths disagree.
    VehicleCountMismatch { vehicles: usize, positions: usize },
    /// A vehicle has a non-positive length.
    BadLength { vehicle: usize, length: i32 },
    /// A vehicle footprint leaves the grid.
    OutOfBounds { vehicle: usize },
    /// A vehicle footprint claims a cell already taken by a lower-indexed one.
    Overlap { vehicle: usize },
    /// The target index does not name a vehicle.
    BadTarget { target: usize, vehicles: usize },
    /// The target vehicle must be horizontal (it exits rightward).
    TargetNotHorizontal { target: usize },
    /// A move names a vehicle that does not exist.
    UnknownVehicle { vehicle: usize },
    /// A move step must be -1 or +1.
    BadStep { step: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::SizeTooSmall { size } => {
                write!(f, "grid size {size} is too small (minimum 1)")
            }
            BoardError::VehicleCountMismatch {
                vehicles,
                positions,
            } => write!(
                f,
                "vehicle list has {vehicles} entries but position list has {positions}"
            ),
            BoardError::BadLength { vehicle, length } => {
                write!(f, "vehicle {vehicle} has invalid length {length}")
            }
            BoardError::OutOfBounds { vehicle } => {
                write!(f, "vehicle {vehicle} does not fit inside the grid")
            }
            BoardError::Overlap { vehicle } => {
                write!(f, "vehicle {vehicle} overlaps an earlier vehicle")
            }
            BoardError::BadTarget { target, vehicles } => {
                write!(f, "target index {target} is out of range for {vehicles} vehicles")
            }
            BoardError::TargetNotHorizontal { target } => {
                write!(f, "target vehicle {target} is not horizontal")
            }
            BoardError::UnknownVehicle { vehicle } => {
                write!(f, "move names unknown vehicle {vehicle}")
            }
            BoardError::BadStep { step } => {
                write!(f, "move step {step} is not -1 or +1")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// One grid configuration.
///
/// Equality and hashing cover the full snapshot: size, target index,
/// vehicle list, positions and the free grid. A board whose grid went stale
/// (positions changed, recomputation not run or failed) therefore compares
/// unequal to the recomputed board with the same positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: i32,
    target: usize,
    vehicles: Vec<Vehicle>,
    positions: Vec<Pos>,
    /// Row-major, `true` = free.
    free: Vec<bool>,
}

impl Board {
    /// Build and validate a board. Vehicle 0 is the target; use
    /// [`Board::with_target`] to designate another vehicle.
    pub fn new(size: i32, vehicles: Vec<Vehicle>, positions: Vec<Pos>) -> Result<Board, BoardError> {
        if size < 1 {
            return Err(BoardError::SizeTooSmall { size });
        }
        if vehicles.len() != positions.len() {
            return Err(BoardError::VehicleCountMismatch {
                vehicles: vehicles.len(),
                positions: positions.len(),
            });
        }
        for (i, v) in vehicles.iter().enumerate() {
            if v.length < 1 {
                return Err(BoardError::BadLength {
                    vehicle: i,
                    length: v.length,
                });
            }
        }

        let cells = (size as usize) * (size as usize);
        let mut board = Board {
            size,
            target: 0,
            vehicles,
            positions,
            free: vec![true; cells],
        };
        board.check_target()?;
        board.recompute_free()?;
        Ok(board)
    }

    /// Designate `target` as the vehicle whose exit ends the puzzle.
    pub fn with_target(mut self, target: usize) -> Result<Board, BoardError> {
        self.target = target;
        self.check_target()?;
        Ok(self)
    }

    fn check_target(&self) -> Result<(), BoardError> {
        if self.target >= self.vehicles.len() {
            return Err(BoardError::BadTarget {
                target: self.target,
                vehicles: self.vehicles.len(),
            });
        }
        if self.vehicles[self.target].orientation != Orientation::Horizontal {
            return Err(BoardError::TargetNotHorizontal {
                target: self.target,
            });
        }
        Ok(())
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    /// Whether the cell is inside the grid and unoccupied. Out-of-range
    /// coordinates count as occupied.
    pub fn is_free(&self, col: i32, row: i32) -> bool {
        if col < 1 || col > self.size || row < 1 || row > self.size {
            return false;
        }
        let n = self.size as usize;
        self.free[(row as usize - 1) * n + (col as usize - 1)]
    }

    /// Slide `vehicle` by `step` cells along its axis (a unit slide is -1 or
    /// +1). Only the position changes; the free grid keeps its previous
    /// contents until [`Board::recompute_free`] runs.
    ///
    /// Panics if `vehicle` is out of range.
    pub fn shift(&mut self, vehicle: usize, step: i32) {
        let orientation = self.vehicles[vehicle].orientation;
        let pos = &mut self.positions[vehicle];
        match orientation {
            Orientation::Horizontal => pos.col += step,
            Orientation::Vertical => pos.row += step,
        }
    }

    /// Rebuild the free grid from the position list.
    ///
    /// The walk visits vehicles in index order and fails on the first
    /// footprint cell that leaves the grid or was already claimed. The new
    /// grid is committed only on success; on failure the previous grid stays
    /// in place, stale relative to the positions, and the board must be
    /// discarded by the caller.
    pub fn recompute_free(&mut self) -> Result<(), BoardError> {
        let n = self.size as usize;
        let mut fresh = vec![true; n * n];

        for (i, (vehicle, pos)) in self.vehicles.iter().zip(self.positions.iter()).enumerate() {
            for k in 0..vehicle.length {
                let (col, row) = match vehicle.orientation {
                    Orientation::Horizontal => (pos.col + k, pos.row),
                    Orientation::Vertical => (pos.col, pos.row + k),
                };
                if col < 1 || col > self.size || row < 1 || row > self.size {
                    return Err(BoardError::OutOfBounds { vehicle: i });
                }
                let cell = (row as usize - 1) * n + (col as usize - 1);
                if !fresh[cell] {
                    return Err(BoardError::Overlap { vehicle: i });
                }
                fresh[cell] = false;
            }
        }

        self.free = fresh;
        Ok(())
    }

    /// Whether the target vehicle's trailing edge sits on the right boundary.
    pub fn is_solved(&self) -> bool {
        let vehicle = self.vehicles[self.target];
        let pos = self.positions[self.target];
        pos.col + vehicle.length - 1 == self.size
    }

    /// Apply one unit slide and return the resulting board.
    ///
    /// The slide is validated: the vehicle must exist, the step must be a
    /// unit step, and the moved layout must pass recomputation.
    pub fn apply(&self, mv: Move) -> Result<Board, BoardError> {
        if mv.vehicle >= self.vehicles.len() {
            return Err(BoardError::UnknownVehicle {
                vehicle: mv.vehicle,
            });
        }
        if mv.step != -1 && mv.step != 1 {
            return Err(BoardError::BadStep { step: mv.step });
        }

        let mut next = self.clone();
        next.shift(mv.vehicle, mv.step);
        next.recompute_free()?;
        Ok(next)
    }
}

impl fmt::Display for Board {
    /// `.` for free cells, `#` for occupied, one row per line, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size as usize;
        let mut line = String::with_capacity(n);
        for row in 0..n {
            line.clear();
            for col in 0..n {
                line.push(if self.free[row * n + col] { '.' } else { '#' });
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
