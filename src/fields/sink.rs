//! Output boundary for derived fields

use super::DerivedScalarField;
use crate::error::EstrnResult;

/// Accepts a named derived field, e.g. a scratch frame
pub trait FieldSink {
    /// Store `field` under `name`
    ///
    /// Implementations reject a name that is already taken rather than
    /// overwriting it.
    fn put_field(
        &mut self,
        name: &str,
        description: &str,
        field: DerivedScalarField,
    ) -> EstrnResult<()>;
}
