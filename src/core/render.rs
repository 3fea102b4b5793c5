use crate::utils::error::Result;
use serde::Serialize;

/// Two-space indented JSON, no trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(value)?)
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

/// Serializes `rows` with a header taken from the row type's field names.
pub fn to_csv<I, T>(rows: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut writer = csv_writer();
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(writer.into_inner()?)
}

pub fn records_to_csv<H, R>(header: &[H], records: R) -> Result<Vec<u8>>
where
    H: AsRef<[u8]>,
    R: IntoIterator<Item = Vec<String>>,
{
    let mut writer = csv_writer();
    writer.write_record(header)?;
    for record in records {
        writer.write_record(&record)?;
    }
    Ok(writer.into_inner()?)
}
