use serde::Serialize;
use serde::de::DeserializeOwned;

/// A JSON shape the generative model is asked to produce.
///
/// Decoding is all-or-nothing: a reply either yields a complete value or the
/// caller substitutes [`StructuredResponse::fallback`].
pub trait StructuredResponse: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Short name used in logs.
    const LABEL: &'static str;

    fn fallback() -> Self;
}
