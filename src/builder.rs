use crate::element::ElementTypeAdapter;
use crate::markup;
use crate::prelude::*;

use std::fmt;

/// One store and one set of [`Options`], with every fragment builder as a method.
///
/// ```
/// use xdmf::{AttributeCenter, Builder, ElementType, Grid, MemoryStore};
///
/// let mut store = MemoryStore::new("mesh.h5");
/// store
///     .insert_shape("/coor", [6, 2])
///     .insert_shape("/conn", [2, 4])
///     .insert_shape("/stress", [2]);
///
/// let xdmf = Builder::new(&store);
///
/// let grid = Grid::new([
///     xdmf.unstructured("/coor", "/conn", ElementType::Quadrilateral)?,
///     xdmf.attribute("/stress", AttributeCenter::Cell)?,
/// ]);
///
/// let document = xdmf.write(&grid);
/// assert!(document.starts_with("<Xdmf Version=\"3.0\">"));
/// # Ok::<(), xdmf::Error>(())
/// ```
pub struct Builder<'s, S: ?Sized> {
    store: &'s S,
    options: Options,
}

impl<'s, S: ArrayStore + ?Sized> Builder<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self::with_options(store, Options::default())
    }

    pub fn with_options(store: &'s S, options: Options) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn dataset<'a>(&'a self, path: &'a str) -> Dataset<'a, S> {
        Dataset::new(self.store, path)
    }

    pub fn geometry(&self, path: &str) -> Result<Fragment, Error> {
        markup::geometry(self.dataset(path), &self.options)
    }

    pub fn topology(&self, path: &str, element_type: ElementType) -> Result<Fragment, Error> {
        markup::topology(self.dataset(path), element_type, &self.options)
    }

    /// like [`topology`](Self::topology), with the element type given in some other
    /// library's vocabulary and translated by `adapter`
    pub fn topology_with<T: fmt::Debug>(
        &self,
        path: &str,
        adapter: &ElementTypeAdapter<T>,
        element_type: &T,
    ) -> Result<Fragment, Error> {
        self.topology(path, adapter.resolve(element_type)?)
    }

    /// an attribute named after its dataset path
    pub fn attribute(&self, path: &str, center: AttributeCenter) -> Result<Fragment, Error> {
        markup::attribute(self.dataset(path), center, None, &self.options)
    }

    pub fn attribute_named(
        &self,
        path: &str,
        center: AttributeCenter,
        name: &str,
    ) -> Result<Fragment, Error> {
        markup::attribute(self.dataset(path), center, Some(name), &self.options)
    }

    pub fn structured(&self, geometry: &str, topology: &str) -> Result<Fragment, Error> {
        markup::structured(self.dataset(geometry), self.dataset(topology), &self.options)
    }

    pub fn unstructured(
        &self,
        geometry: &str,
        topology: &str,
        element_type: ElementType,
    ) -> Result<Fragment, Error> {
        markup::unstructured(
            self.dataset(geometry),
            self.dataset(topology),
            element_type,
            &self.options,
        )
    }

    pub fn unstructured_with<T: fmt::Debug>(
        &self,
        geometry: &str,
        topology: &str,
        adapter: &ElementTypeAdapter<T>,
        element_type: &T,
    ) -> Result<Fragment, Error> {
        self.unstructured(geometry, topology, adapter.resolve(element_type)?)
    }

    /// the complete document for `composite`, formatted with this builder's options
    pub fn write<C: Composite + ?Sized>(&self, composite: &C) -> String {
        crate::write_xdmf::write(composite, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum MeshElement {
        Quad4,
        Quad9,
    }

    fn adapter() -> ElementTypeAdapter<MeshElement> {
        ElementTypeAdapter::new(|element: &MeshElement| match element {
            MeshElement::Quad4 => Some(ElementType::Quadrilateral),
            MeshElement::Quad9 => None,
        })
    }

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new("file.h5");
        store
            .insert_shape("/coor", [6, 2])
            .insert_shape("/conn", [2, 4]);
        store
    }

    #[test]
    fn adapter_feeds_topology() {
        let store = store();
        let xdmf = Builder::new(&store);

        let via_adapter = xdmf
            .topology_with("/conn", &adapter(), &MeshElement::Quad4)
            .unwrap();
        let direct = xdmf.topology("/conn", ElementType::Quadrilateral).unwrap();

        assert_eq!(via_adapter, direct);
    }

    #[test]
    fn unmapped_foreign_element_is_unknown_variant() {
        let store = store();
        let xdmf = Builder::new(&store);

        let err = xdmf
            .unstructured_with("/coor", "/conn", &adapter(), &MeshElement::Quad9)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownVariant(_)));
    }

    #[test]
    fn options_reach_the_builders() {
        let store = store();
        let trusted = Options::new().with_validation(Validation::Trusted);
        let xdmf = Builder::with_options(&store, trusted);

        assert_eq!(xdmf.options().validation, Validation::Trusted);
        assert!(xdmf.topology("/conn", ElementType::Triangle).is_ok());
        assert!(Builder::new(&store)
            .topology("/conn", ElementType::Triangle)
            .is_err());
    }
}
