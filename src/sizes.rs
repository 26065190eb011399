use std::{fmt, mem::size_of};

use crate::builders::{Dynamic, Marker};

pub fn marker_size() -> usize {
    size_of::<Marker>()
}

pub fn dynamic_size() -> usize {
    size_of::<Dynamic>()
}

/// Bytes one key/value slot occupies in a map keyed by `i64`.
pub fn entry_size<V>() -> usize {
    size_of::<(i64, V)>()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub marker: usize,
    pub dynamic: usize,
    pub marker_entry: usize,
    pub dynamic_entry: usize,
}

impl SizeReport {
    pub fn measure() -> SizeReport {
        SizeReport {
            marker: marker_size(),
            dynamic: dynamic_size(),
            marker_entry: entry_size::<Marker>(),
            dynamic_entry: entry_size::<Dynamic>(),
        }
    }

    pub fn overhead_per_entry(&self) -> usize {
        self.dynamic_entry - self.marker_entry
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10}{:>8}{:>8}", "value", "size", "entry")?;
        writeln!(f, "{:<10}{:>8}{:>8}", "marker", self.marker, self.marker_entry)?;
        writeln!(f, "{:<10}{:>8}{:>8}", "dynamic", self.dynamic, self.dynamic_entry)?;
        write!(f, "overhead per entry: {} bytes", self.overhead_per_entry())
    }
}
