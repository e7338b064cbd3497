/// Basic CSV exporter for the merged table. Standard quoting rules apply, so
/// fields with embedded separators or newlines round-trip.
pub(crate) fn write_table<W: std::io::Write>(
    writer: W,
    header: &[String],
    body: &[Vec<String>],
) -> Result<(), anyhow::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(header)?;
    for row in body {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
