//! Fixed station and row indexing for a single axial stage.
//!
//! Station 1 (inlet) is always the non-dimensionalisation reference.
//! Row 0 is the stator (vane), row 1 the rotor (blade).

use core::ops::Index;

/// Axial measurement station.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Station {
    /// Stator inlet (station 1).
    Inlet,
    /// Stator exit / rotor inlet (station 2).
    Inter,
    /// Rotor exit (station 3).
    Exit,
}

impl Station {
    pub const ALL: [Station; 3] = [Station::Inlet, Station::Inter, Station::Exit];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Station::Inlet => 0,
            Station::Inter => 1,
            Station::Exit => 2,
        }
    }
}

/// Blade row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Row {
    Stator,
    Rotor,
}

impl Row {
    pub const ALL: [Row; 2] = [Row::Stator, Row::Rotor];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Row::Stator => 0,
            Row::Rotor => 1,
        }
    }

    /// Stations bounding this row: (leading edge, trailing edge).
    #[inline]
    pub fn stations(self) -> (Station, Station) {
        match self {
            Row::Stator => (Station::Inlet, Station::Inter),
            Row::Rotor => (Station::Inter, Station::Exit),
        }
    }
}

/// One value per station.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerStation<T>(pub [T; 3]);

impl<T> PerStation<T> {
    pub fn new(inlet: T, inter: T, exit: T) -> Self {
        Self([inlet, inter, exit])
    }

    pub fn from_fn(mut f: impl FnMut(Station) -> T) -> Self {
        Self([f(Station::Inlet), f(Station::Inter), f(Station::Exit)])
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerStation<U> {
        PerStation::from_fn(|s| f(&self[s]))
    }

    /// Fallible map; stops at the first station that fails.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(Station, &T) -> Result<U, E>) -> Result<PerStation<U>, E> {
        let [a, b, c] = &self.0;
        Ok(PerStation([
            f(Station::Inlet, a)?,
            f(Station::Inter, b)?,
            f(Station::Exit, c)?,
        ]))
    }

    pub fn as_array(&self) -> &[T; 3] {
        &self.0
    }
}

impl<T> Index<Station> for PerStation<T> {
    type Output = T;
    fn index(&self, s: Station) -> &T {
        &self.0[s.index()]
    }
}

/// One value per blade row.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerRow<T>(pub [T; 2]);

impl<T> PerRow<T> {
    pub fn new(stator: T, rotor: T) -> Self {
        Self([stator, rotor])
    }

    pub fn from_fn(mut f: impl FnMut(Row) -> T) -> Self {
        Self([f(Row::Stator), f(Row::Rotor)])
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerRow<U> {
        PerRow::from_fn(|r| f(&self[r]))
    }

    pub fn as_array(&self) -> &[T; 2] {
        &self.0
    }
}

impl<T> Index<Row> for PerRow<T> {
    type Output = T;
    fn index(&self, r: Row) -> &T {
        &self.0[r.index()]
    }
}
