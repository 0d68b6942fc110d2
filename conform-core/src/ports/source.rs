// conform-core/src/ports/source.rs
//
// Port for the tabular-data provider boundary: anything able to hand over
// already-parsed, already-column-mapped rows (a sheet, a file, a fixture).

use crate::domain::Row;
use crate::error::ConformError;

pub trait RowSource {
    /// Identifies the source in logs and summaries (file stem, sheet name...).
    fn name(&self) -> &str;

    /// Materializes every row of the source, in its native order.
    fn rows(&self) -> Result<Vec<Row>, ConformError>;
}
