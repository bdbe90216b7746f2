use serde::Serialize;

use crate::error::{Error, Result};
use crate::transform::find;

/// One transformation applied to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Morphed {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<&'static str>,
    pub output: String,
}

/// Apply each named transformation to `input`, keeping the order of `names`.
pub fn morph<S: AsRef<str>>(names: &[S], input: &str) -> Result<Vec<Morphed>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let transformation =
                find(name).ok_or_else(|| Error::UnknownTransformation(name.to_string()))?;

            Ok(Morphed {
                name: transformation.name,
                glyph: transformation.glyph,
                output: transformation.apply(input),
            })
        })
        .collect()
}
