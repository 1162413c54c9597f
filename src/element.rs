//! # Element and attribute vocabulary
//!
//! The closed sets of values that end up as attribute strings in the emitted markup.
//! Every mapping from a variant to its canonical string is an exhaustive `match`, so
//! adding a variant without a mapping is a compile error rather than a runtime one.
//!
//! Mesh libraries usually carry their own element enumeration. Instead of teaching this
//! crate about each of them, wrap a conversion function in an [`ElementTypeAdapter`]
//! once and hand it to [`Builder::topology_with`](crate::Builder::topology_with).

use crate::error;
use crate::Error;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The cell type of a topology dataset
pub enum ElementType {
    /// one index per point, no cell connectivity
    Polyvertex,
    Triangle,
    Quadrilateral,
    Hexahedron,
}

impl ElementType {
    pub const ALL: [ElementType; 4] = [
        ElementType::Polyvertex,
        ElementType::Triangle,
        ElementType::Quadrilateral,
        ElementType::Hexahedron,
    ];

    /// the `TopologyType` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polyvertex => "Polyvertex",
            Self::Triangle => "Triangle",
            Self::Quadrilateral => "Quadrilateral",
            Self::Hexahedron => "Hexahedron",
        }
    }

    /// Nodes per element, which is the required column count of the connectivity
    /// dataset. `None` for `Polyvertex`, whose dataset is rank 1.
    pub fn node_count(&self) -> Option<usize> {
        match self {
            Self::Polyvertex => None,
            Self::Triangle => Some(3),
            Self::Quadrilateral => Some(4),
            Self::Hexahedron => Some(8),
        }
    }

    pub(crate) fn layout(&self) -> error::Layout {
        match self.node_count() {
            None => error::Layout::Rank1,
            Some(columns) => error::Layout::Columns(columns),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .into_iter()
            .find(|element| element.as_str() == s)
            .ok_or_else(|| error::UnknownVariant::new("ElementType", s.to_string()).into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Where an attribute's values live. Only copied into the `Center` attribute.
pub enum AttributeCenter {
    Cell,
    Node,
}

impl AttributeCenter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cell => "Cell",
            Self::Node => "Node",
        }
    }
}

impl fmt::Display for AttributeCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeCenter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cell" => Ok(Self::Cell),
            "Node" => Ok(Self::Node),
            other => Err(error::UnknownVariant::new("AttributeCenter", other.to_string()).into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// the `Format` attribute of a `DataItem`: how the referenced store lays out its arrays
pub enum DataFormat {
    #[default]
    Hdf,
    Xml,
    Binary,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hdf => "HDF",
            Self::Xml => "XML",
            Self::Binary => "Binary",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a foreign element enumeration onto [`ElementType`].
///
/// The conversion function is registered once and returns `None` for foreign values
/// that have no counterpart, which [`resolve`](ElementTypeAdapter::resolve) reports
/// as an `UnknownVariant` error naming the foreign type.
///
/// ```
/// use xdmf::{ElementType, ElementTypeAdapter};
///
/// #[derive(Debug)]
/// enum MeshKind { Tri3, Quad4, Hex8, Quad8 }
///
/// let adapter = ElementTypeAdapter::new(|kind: &MeshKind| match kind {
///     MeshKind::Tri3 => Some(ElementType::Triangle),
///     MeshKind::Quad4 => Some(ElementType::Quadrilateral),
///     MeshKind::Hex8 => Some(ElementType::Hexahedron),
///     MeshKind::Quad8 => None,
/// });
///
/// assert_eq!(adapter.resolve(&MeshKind::Quad4).unwrap(), ElementType::Quadrilateral);
/// assert!(adapter.resolve(&MeshKind::Quad8).is_err());
/// ```
pub struct ElementTypeAdapter<T> {
    convert: Box<dyn Fn(&T) -> Option<ElementType>>,
}

impl<T: fmt::Debug> ElementTypeAdapter<T> {
    pub fn new<F>(convert: F) -> Self
    where
        F: Fn(&T) -> Option<ElementType> + 'static,
    {
        Self {
            convert: Box::new(convert),
        }
    }

    pub fn resolve(&self, value: &T) -> Result<ElementType, Error> {
        (self.convert)(value).ok_or_else(|| {
            error::UnknownVariant::new(std::any::type_name::<T>(), format!("{:?}", value)).into()
        })
    }
}

impl<T> fmt::Debug for ElementTypeAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementTypeAdapter")
            .field("foreign_type", &std::any::type_name::<T>())
            .finish()
    }
}
