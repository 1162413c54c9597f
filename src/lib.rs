//! # xdmf
//!
//! Write [XDMF](https://www.xdmf.org/index.php/XDMF_Model_and_Format) index files for
//! data that already lives in an array store such as an HDF5 file. The index only
//! references the arrays (`file.h5:/coor`) and describes what they mean: node
//! coordinates, element connectivity, fields on nodes or cells, and how successive
//! time steps are grouped. The numeric data is never read or copied.
//!
//! Markup is assembled from [`Fragment`]s. The builders on [`Builder`] each query the
//! store for one dataset's shape and produce the fragment for its role; [`Grid`] and
//! [`TimeSeries`] nest fragments, and [`write`] wraps the result in the document root:
//!
//! ```
//! use xdmf::{Builder, ElementType, Grid, MemoryStore};
//!
//! let mut store = MemoryStore::new("file.h5");
//! store
//!     .insert_shape("/coor", [6, 2])
//!     .insert_shape("/conn", [2, 4]);
//!
//! let xdmf = Builder::new(&store);
//! let grid = Grid::new([
//!     xdmf.geometry("/coor")?,
//!     xdmf.topology("/conn", ElementType::Quadrilateral)?,
//! ]);
//!
//! let expected = r#"<Xdmf Version="3.0">
//!     <Domain>
//!         <Grid CollectionType="Temporal" GridType="Collection" Name="Grid">
//!             <Grid Name="Grid">
//!                 <Geometry GeometryType="XY">
//!                     <DataItem Dimensions="6 2" Format="HDF">file.h5:/coor</DataItem>
//!                 </Geometry>
//!                 <Topology NumberOfElements="2" TopologyType="Quadrilateral">
//!                     <DataItem Dimensions="2 4" Format="HDF">file.h5:/conn</DataItem>
//!                 </Topology>
//!             </Grid>
//!         </Grid>
//!     </Domain>
//! </Xdmf>"#;
//!
//! assert_eq!(xdmf.write(&grid), expected);
//! # Ok::<(), xdmf::Error>(())
//! ```
//!
//! Shape contracts (element node counts, matching row counts) are checked unless
//! [`Validation::Trusted`] is selected in the [`Options`], or the crate is built with
//! the `trusted` feature.

mod builder;
mod config;
mod element;
pub mod error;
mod fragment;
mod grid;
pub mod inspect;
pub mod markup;
pub mod prelude;
mod shape;
mod store;
mod time_series;
mod traits;
pub mod validate;
mod write_xdmf;

pub use builder::Builder;
pub use config::{Options, Validation, DEFAULT_INDENT};
pub use element::{AttributeCenter, DataFormat, ElementType, ElementTypeAdapter};
pub use fragment::{Fragment, Line};
pub use grid::{Grid, DEFAULT_GRID_NAME};
pub use shape::Shape;
pub use store::{Dataset, MemoryStore};
pub use time_series::{Step, TimeSeries, DEFAULT_SERIES_NAME};
pub use traits::{ArrayStore, Composite, TimeValue};
pub use write_xdmf::{document, join, write, write_file, write_to, XDMF_VERSION};

pub use ndarray;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug, derive_more::From)]
pub enum Error {
    #[error("{0}")]
    ShapeMismatch(error::ShapeMismatch),
    #[error("{0}")]
    UnsupportedDimensionality(error::UnsupportedDimensionality),
    #[error("{0}")]
    RowCountMismatch(error::RowCountMismatch),
    #[error("{0}")]
    UnknownVariant(error::UnknownVariant),
    #[error("{0}")]
    MissingDataset(error::MissingDataset),
    #[error("{0}")]
    Store(error::StoreQuery),
    #[error("{0}")]
    MalformedDocument(error::MalformedDocument),
    #[error("Could not read XML document: `{0}`")]
    Xml(quick_xml::Error),
    #[error("An io error occured: `{0}`")]
    Io(std::io::Error),
}

impl Error {
    /// wrap the failure of an external store's query for `path`
    pub fn store<E>(path: &str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Store(error::StoreQuery::new(path.to_string(), source.into()))
    }
}
