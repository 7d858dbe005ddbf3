use crate::stats::Statistics;
use crate::SimulationError;
use std::io::Write;

/// How statistics are rendered when written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// The fixed width table produced by `Statistics`' `Display` impl
    #[default]
    Table,
    Json,
}

/// A public function to take in data i.e. `statistics` a `Statistics` object and write it to a writer
pub fn write_statistics(
    statistics: &Statistics,
    format: Format,
    mut writer: impl Write,
) -> Result<(), SimulationError> {
    match format {
        Format::Table => writeln!(writer, "{}", statistics)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, statistics)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
