//! Tagged shortest-path distances.
//!
//! "Unreachable" is its own variant; no arithmetic is ever performed on it.

use std::fmt;
use std::ops::Index;

use serde::{Serialize, Serializer};

use crate::graph::{VertexId, Weight};

/// Distance from the source to one vertex. Orders `Finite(_) < Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    Finite(i64),
    Unreachable,
}

impl Distance {
    #[inline] pub fn is_finite(self) -> bool { matches!(self, Distance::Finite(_)) }
    #[inline] pub fn finite(self) -> Option<i64> { match self { Distance::Finite(d) => Some(d), Distance::Unreachable => None } }

    /// `self + w` if `self` is finite. `Some(Err(()))` means the sum left the
    /// representable range (`i64::MAX` is reserved), which only a negative
    /// cycle can cause.
    #[inline]
    pub(crate) fn extend(self, w: Weight) -> Option<Result<i64, ()>> {
        let d = self.finite()?;
        Some(match d.checked_add(w as i64) { Some(x) if x != i64::MAX => Ok(x), _ => Err(()) })
    }
}

impl From<Option<i64>> for Distance {
    fn from(d: Option<i64>) -> Self { d.map_or(Distance::Unreachable, Distance::Finite) }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Distance::Finite(d) => write!(f, "{d}"), Distance::Unreachable => f.write_str("INF") }
    }
}

// finite -> number, unreachable -> null
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self { Distance::Finite(d) => s.serialize_some(d), Distance::Unreachable => s.serialize_none() }
    }
}

/// Final distances of one computation, indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistanceVector(Vec<Distance>);

impl DistanceVector {
    pub(crate) fn new(d: Vec<Distance>) -> Self { Self(d) }

    #[inline] pub fn len(&self) -> usize { self.0.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
    #[inline] pub fn get(&self, v: VertexId) -> Option<Distance> { self.0.get(v as usize).copied() }
    #[inline] pub fn is_reachable(&self, v: VertexId) -> bool { self.get(v).is_some_and(Distance::is_finite) }
    #[inline] pub fn as_slice(&self) -> &[Distance] { &self.0 }
    pub fn iter(&self) -> impl Iterator<Item = Distance> + '_ { self.0.iter().copied() }
    pub fn into_vec(self) -> Vec<Distance> { self.0 }

    /// `Some(d)` for reachable vertices, `None` otherwise.
    pub fn to_options(&self) -> Vec<Option<i64>> { self.0.iter().map(|d| d.finite()).collect() }
}

impl Index<usize> for DistanceVector {
    type Output = Distance;
    fn index(&self, v: usize) -> &Distance { &self.0[v] }
}

impl<'a> IntoIterator for &'a DistanceVector {
    type Item = &'a Distance;
    type IntoIter = std::slice::Iter<'a, Distance>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_never_extends() {
        assert_eq!(Distance::Unreachable.extend(-5), None);
        assert_eq!(Distance::Finite(3).extend(-5), Some(Ok(-2)));
    }

    #[test]
    fn extend_flags_overflow() {
        assert_eq!(Distance::Finite(i64::MIN + 1).extend(-2), Some(Err(())));
        assert_eq!(Distance::Finite(i64::MAX - 1).extend(1), Some(Err(())));
    }

    #[test]
    fn ordering_and_display() {
        assert!(Distance::Finite(i64::MAX - 1) < Distance::Unreachable);
        assert_eq!(Distance::Unreachable.to_string(), "INF");
        assert_eq!(Distance::Finite(-4).to_string(), "-4");
    }

    #[test]
    fn serializes_unreachable_as_null() {
        let v = DistanceVector::new(vec![Distance::Finite(0), Distance::Unreachable]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[0,null]");
        assert_eq!(v.to_options(), vec![Some(0), None]);
        assert!(v.is_reachable(0) && !v.is_reachable(1) && !v.is_reachable(9));
    }
}
