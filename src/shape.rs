use derive_more::{Deref, From, Into};
use std::fmt;

/// The dimension sizes of a dataset, slowest varying first.
///
/// A `Shape` is obtained once per build call from an
/// [`ArrayStore`](crate::ArrayStore) and never modified afterwards. Its `Display`
/// form is the space separated list of dimensions used in the `Dimensions`
/// attribute of a `DataItem`:
///
/// ```
/// let shape = xdmf::Shape::from(vec![6, 2]);
/// assert_eq!(shape.to_string(), "6 2");
/// assert_eq!(shape.rank(), 2);
/// assert_eq!(shape.rows(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, From, Into)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    /// number of dimensions
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// leading dimension, 0 for a rank 0 shape
    pub fn rows(&self) -> usize {
        self.0.first().copied().unwrap_or(0)
    }

    /// size of the second dimension, if there is one
    pub fn columns(&self) -> Option<usize> {
        self.0.get(1).copied()
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self(dims.to_vec())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dims = self.0.iter();

        if let Some(first) = dims.next() {
            write!(f, "{}", first)?;
        }

        for dim in dims {
            write!(f, " {}", dim)?;
        }

        Ok(())
    }
}
