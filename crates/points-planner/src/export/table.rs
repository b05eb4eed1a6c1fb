use super::ExportError;
use crate::plan::PlanBlock;

const HEADER: [&str; 6] = ["Section", "Source", "To", "Via", "Note", "Detail"];

/// Flattens a plan into CSV: path rows then detail rows per block, every field quoted.
pub fn to_csv(plan: &[PlanBlock]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for block in plan {
        let title = block.title.as_str();
        for path in block.paths() {
            writer.write_record([
                title,
                path.source.as_str(),
                path.destination.as_str(),
                path.via.as_deref().unwrap_or_default(),
                path.note.as_deref().unwrap_or_default(),
                "",
            ])?;
        }
        for detail in &block.details {
            writer.write_record([title, "", "", "", "", detail.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
