//! # Traits
//!
//! The seams between this crate and its callers. [`ArrayStore`] is the only thing the
//! builders need from the binary array store that actually holds the data, [`Composite`]
//! is anything that can be placed inside the `<Domain>` of a document, and
//! [`TimeValue`] turns a caller's time value into the string written to `<Time Value=..>`.

use crate::element::DataFormat;
use crate::fragment::Fragment;
use crate::Error;
use crate::Shape;

/// Read-only metadata queries against the store holding the raw arrays.
///
/// Neither query may have side effects. A failing query aborts the build call that
/// issued it; the builders never retry.
///
/// Implementing this for an HDF5 file handle is a handful of lines:
///
/// ```ignore
/// impl xdmf::ArrayStore for hdf5::File {
///     fn shape_of(&self, path: &str) -> Result<xdmf::Shape, xdmf::Error> {
///         let dataset = self
///             .dataset(path)
///             .map_err(|e| xdmf::Error::store(path, e))?;
///         Ok(xdmf::Shape::from(dataset.shape()))
///     }
///
///     fn name_of(&self) -> String {
///         self.filename()
///     }
/// }
/// ```
pub trait ArrayStore {
    /// dimension sizes of the dataset at `path`. Fails if the path is absent
    fn shape_of(&self, path: &str) -> Result<Shape, Error>;

    /// the name other programs use to address this store, the `file.h5` in `file.h5:/coor`
    fn name_of(&self) -> String;

    /// the `Format` written into every `DataItem` that references this store
    fn format(&self) -> DataFormat {
        DataFormat::Hdf
    }
}

impl<S: ArrayStore + ?Sized> ArrayStore for &S {
    fn shape_of(&self, path: &str) -> Result<Shape, Error> {
        (**self).shape_of(path)
    }

    fn name_of(&self) -> String {
        (**self).name_of()
    }

    fn format(&self) -> DataFormat {
        (**self).format()
    }
}

/// Anything that can be written as the single child of a document's `<Domain>`
pub trait Composite {
    fn fragment(&self) -> Fragment;
}

impl Composite for Fragment {
    fn fragment(&self) -> Fragment {
        self.clone()
    }
}

/// Formats a time step value for the `Value` attribute of a `<Time>` element
pub trait TimeValue {
    fn time_string(&self) -> String;
}

macro_rules! integer_time {
    ($($int:ty),*) => {
        $(
            impl TimeValue for $int {
                fn time_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_time!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl TimeValue for f64 {
    fn time_string(&self) -> String {
        let mut buffer = ryu::Buffer::new();
        buffer.format(*self).to_string()
    }
}

impl TimeValue for f32 {
    fn time_string(&self) -> String {
        let mut buffer = ryu::Buffer::new();
        buffer.format(*self).to_string()
    }
}

impl TimeValue for str {
    fn time_string(&self) -> String {
        self.to_string()
    }
}

impl TimeValue for String {
    fn time_string(&self) -> String {
        self.clone()
    }
}

impl<T: TimeValue + ?Sized> TimeValue for &T {
    fn time_string(&self) -> String {
        (**self).time_string()
    }
}
