/*!
# Inertia Sets

An [`InertiaSet`] is a set of points `(p, q)` that is closed upwards under the componentwise
order: with `(p, q)` it also contains every `(p', q')` with `p <= p'` and `q <= q'`.
Such a set is stored by its *generators*, the minimal points, which form an antichain.
Inertia sets of graphs are symmetric, so the generators are always closed under swapping
coordinates.

```
use graph_inertia::inertia::InertiaSet;

let edge = InertiaSet::from_points([(0, 1)]);
let sum = &edge + &edge;

assert_eq!(sum, InertiaSet::from_points([(0, 2), (1, 1)]));
assert!(sum.contains((3, 1)));
assert!(!sum.contains((0, 1)));
```
*/

use std::{
    collections::BTreeSet,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, BitOr, BitOrAssign},
};

use itertools::Itertools;

use crate::prelude::*;

/// A candidate `(positive, negative)` eigenvalue count
pub type Point = (u32, u32);

/// Upward closed, symmetric set of points represented by its minimal generators.
///
/// `size` is the order of the matrices the set belongs to. It does not take part in the set
/// algebra; combining two sets keeps the left size if present and the right size otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InertiaSet {
    generators: BTreeSet<Point>,
    size: Option<NumNodes>,
}

impl InertiaSet {
    /// Creates the set generated by `points` (and their swapped counterparts)
    pub fn new<I>(points: I, size: Option<NumNodes>) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut generators: BTreeSet<Point> = points.into_iter().collect();
        let swapped = generators.iter().map(|&(p, q)| (q, p)).collect_vec();
        generators.extend(swapped);

        let mut set = Self { generators, size };
        set.reduce();
        set
    }

    /// Creates the set generated by `points` without a size
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::new(points, None)
    }

    /// `{(0, 0)}`, the neutral element of the Minkowski sum
    pub fn zero(size: Option<NumNodes>) -> Self {
        Self::new([(0, 0)], size)
    }

    /// `{(1, 1)}`
    pub fn one_one() -> Self {
        Self::from_points([(1, 1)])
    }

    /// Removes every generator that is dominated by another generator.
    ///
    /// Scanning the points in lexicographic order, a point is dominated exactly if some
    /// earlier point has a second coordinate not larger than its own.
    pub fn reduce(&mut self) {
        let mut min_second: Option<u32> = None;
        self.generators.retain(|&(_, q)| {
            let keep = min_second.is_none_or(|m| q < m);
            if keep {
                min_second = Some(q);
            }
            keep
        });
    }

    /// Returns the minimal generators in ascending order
    pub fn generators(&self) -> &BTreeSet<Point> {
        &self.generators
    }

    /// Iterates over the generators in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Point> + Clone + '_ {
        self.generators.iter().copied()
    }

    /// Returns the matrix order this set is associated with
    pub fn size(&self) -> Option<NumNodes> {
        self.size
    }

    /// Replaces the matrix order
    pub fn with_size(mut self, size: Option<NumNodes>) -> Self {
        self.size = size;
        self
    }

    /// Returns *true* if there are no generators
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Returns *true* if some generator is componentwise at most `p`
    pub fn contains(&self, p: Point) -> bool {
        self.generators.iter().any(|g| g.0 <= p.0 && g.1 <= p.1)
    }

    /// Union with another inertia set
    pub fn union(&self, other: &InertiaSet) -> InertiaSet {
        InertiaSet::new(
            self.iter().chain(other.iter()),
            self.size.or(other.size),
        )
    }

    /// Union with raw points; the size of `self` is kept
    pub fn union_points<I>(&self, points: I) -> InertiaSet
    where
        I: IntoIterator<Item = Point>,
    {
        InertiaSet::new(self.iter().chain(points), self.size)
    }

    /// Minkowski sum: all coordinatewise sums of one generator of each operand
    pub fn minkowski_sum(&self, other: &InertiaSet) -> InertiaSet {
        InertiaSet::new(
            self.iter()
                .cartesian_product(other.iter())
                .map(|((p1, q1), (p2, q2))| (p1 + p2, q1 + q2)),
            self.size.or(other.size),
        )
    }
}

impl fmt::Display for InertiaSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extended Inertia Set generated by {{{}}}",
            self.iter().map(|(p, q)| format!("({p}, {q})")).join(", ")
        )
    }
}

impl Add<&InertiaSet> for &InertiaSet {
    type Output = InertiaSet;

    fn add(self, rhs: &InertiaSet) -> InertiaSet {
        self.minkowski_sum(rhs)
    }
}

impl Add for InertiaSet {
    type Output = InertiaSet;

    fn add(self, rhs: InertiaSet) -> InertiaSet {
        self.minkowski_sum(&rhs)
    }
}

impl AddAssign<&InertiaSet> for InertiaSet {
    fn add_assign(&mut self, rhs: &InertiaSet) {
        *self = self.minkowski_sum(rhs);
    }
}

impl AddAssign for InertiaSet {
    fn add_assign(&mut self, rhs: InertiaSet) {
        *self += &rhs;
    }
}

impl Sum for InertiaSet {
    fn sum<I: Iterator<Item = InertiaSet>>(iter: I) -> Self {
        iter.fold(InertiaSet::zero(None), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a InertiaSet> for InertiaSet {
    fn sum<I: Iterator<Item = &'a InertiaSet>>(iter: I) -> Self {
        iter.fold(InertiaSet::zero(None), |acc, x| &acc + x)
    }
}

impl BitOr<&InertiaSet> for &InertiaSet {
    type Output = InertiaSet;

    fn bitor(self, rhs: &InertiaSet) -> InertiaSet {
        self.union(rhs)
    }
}

impl BitOr for InertiaSet {
    type Output = InertiaSet;

    fn bitor(self, rhs: InertiaSet) -> InertiaSet {
        self.union(&rhs)
    }
}

impl BitOrAssign<&InertiaSet> for InertiaSet {
    fn bitor_assign(&mut self, rhs: &InertiaSet) {
        *self = self.union(rhs);
    }
}

impl BitOrAssign for InertiaSet {
    fn bitor_assign(&mut self, rhs: InertiaSet) {
        *self |= &rhs;
    }
}

impl FromIterator<Point> for InertiaSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
