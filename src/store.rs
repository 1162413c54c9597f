//! dataset references and a store that lives in memory
use crate::error;
use crate::prelude::*;

use ndarray::{ArrayBase, Data, Dimension};
use std::collections::BTreeMap;

/// A dataset inside some store: the pair every fragment builder starts from.
///
/// The store is only borrowed; the builders query it for the dataset's shape and the
/// store's name and never hold on to it.
#[derive(Debug)]
pub struct Dataset<'s, S: ?Sized> {
    store: &'s S,
    path: &'s str,
}

impl<'s, S: ?Sized> Clone for Dataset<'s, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, S: ?Sized> Copy for Dataset<'s, S> {}

impl<'s, S: ArrayStore + ?Sized> Dataset<'s, S> {
    pub fn new(store: &'s S, path: &'s str) -> Self {
        Self { store, path }
    }

    pub fn path(&self) -> &'s str {
        self.path
    }

    pub fn store(&self) -> &'s S {
        self.store
    }

    pub fn shape(&self) -> Result<Shape, Error> {
        self.store.shape_of(self.path)
    }

    /// the `DataItem` text addressing this dataset, `{store}:{path}`
    pub fn reference(&self) -> String {
        format!("{}:{}", self.store.name_of(), self.path)
    }
}

/// An [`ArrayStore`] that only remembers the shapes of the arrays registered with it.
///
/// Useful when the arrays are written by some other part of a pipeline and only their
/// layout is known here, and for tests.
///
/// ```
/// use xdmf::{ArrayStore, MemoryStore};
///
/// let coor = ndarray::Array2::<f64>::zeros((6, 2));
///
/// let mut store = MemoryStore::new("mesh.h5");
/// store.insert("/coor", &coor);
/// store.insert_shape("/conn", [2, 4]);
///
/// assert_eq!(store.shape_of("/coor").unwrap().dims(), &[6, 2]);
/// assert_eq!(store.shape_of("/conn").unwrap().dims(), &[2, 4]);
/// assert!(store.shape_of("/missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    name: String,
    format: DataFormat,
    shapes: BTreeMap<String, Shape>,
}

impl MemoryStore {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            format: DataFormat::default(),
            shapes: BTreeMap::new(),
        }
    }

    /// change the `Format` reported for every dataset in this store
    pub fn with_format(mut self, format: DataFormat) -> Self {
        self.format = format;
        self
    }

    /// register `array` under `path`, replacing any earlier entry. Only the shape is kept
    pub fn insert<A, D, P>(&mut self, path: P, array: &ArrayBase<A, D>) -> &mut Self
    where
        A: Data,
        D: Dimension,
        P: Into<String>,
    {
        self.shapes.insert(path.into(), Shape::from(array.shape()));
        self
    }

    pub fn insert_shape<P, T>(&mut self, path: P, shape: T) -> &mut Self
    where
        P: Into<String>,
        T: Into<Shape>,
    {
        self.shapes.insert(path.into(), shape.into());
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.shapes.contains_key(path)
    }

    pub fn dataset<'s>(&'s self, path: &'s str) -> Dataset<'s, Self> {
        Dataset::new(self, path)
    }
}

impl ArrayStore for MemoryStore {
    fn shape_of(&self, path: &str) -> Result<Shape, Error> {
        self.shapes
            .get(path)
            .cloned()
            .ok_or_else(|| error::MissingDataset::new(self.name.clone(), path.to_string()).into())
    }

    fn name_of(&self) -> String {
        self.name.clone()
    }

    fn format(&self) -> DataFormat {
        self.format
    }
}
