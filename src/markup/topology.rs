use super::data_item;
use crate::prelude::*;
use crate::validate::validate;

/// Build the `<Topology>` fragment for a connectivity dataset.
///
/// With checked validation the dataset must satisfy the element type's contract
/// (see [`validate`](crate::validate::validate)) or a `ShapeMismatch` is returned.
/// `NumberOfElements` is the leading dimension of the dataset.
pub fn topology<S: ArrayStore + ?Sized>(
    dataset: Dataset<'_, S>,
    element_type: ElementType,
    options: &Options,
) -> Result<Fragment, Error> {
    let shape = dataset.shape()?;
    build(&dataset, &shape, element_type, options)
}

pub(crate) fn build<S: ArrayStore + ?Sized>(
    dataset: &Dataset<'_, S>,
    shape: &Shape,
    element_type: ElementType,
    options: &Options,
) -> Result<Fragment, Error> {
    if options.validation.is_checked() {
        validate(dataset.path(), shape, element_type)?;
    } else {
        log::debug!(
            "skipping {} shape check for `{}`",
            element_type,
            dataset.path()
        );
    }

    log::trace!("building Topology fragment for `{}`", dataset.path());

    Ok(Fragment::element(
        format!(
            "<Topology NumberOfElements=\"{}\" TopologyType=\"{}\">",
            shape.rows(),
            element_type
        ),
        [data_item(dataset, shape)],
        "</Topology>",
    ))
}
