use super::{attribute_value, data_item};
use crate::error;
use crate::prelude::*;

/// Build the `<Attribute>` fragment for a field defined on nodes or cells.
///
/// A rank 1 dataset is a `Scalar` attribute and a rank 2 dataset a `Vector`
/// attribute; other ranks are an `UnsupportedDimensionality` error. `name` defaults
/// to the dataset path.
pub fn attribute<S: ArrayStore + ?Sized>(
    dataset: Dataset<'_, S>,
    center: AttributeCenter,
    name: Option<&str>,
    options: &Options,
) -> Result<Fragment, Error> {
    let shape = dataset.shape()?;

    let attribute_type = match shape.rank() {
        1 => "Scalar",
        2 => "Vector",
        _ => {
            return Err(error::UnsupportedDimensionality::new(
                dataset.path().to_string(),
                "Attribute",
                "a rank 1 or rank 2 shape",
                shape,
            )
            .into())
        }
    };

    let name = name.unwrap_or_else(|| dataset.path());

    log::trace!(
        "building {} Attribute `{}` from `{}` ({:?} validation)",
        attribute_type,
        name,
        dataset.path(),
        options.validation
    );

    Ok(Fragment::element(
        format!(
            "<Attribute AttributeType=\"{}\" Center=\"{}\" Name=\"{}\">",
            attribute_type,
            center,
            attribute_value(name)
        ),
        [data_item(&dataset, &shape)],
        "</Attribute>",
    ))
}
