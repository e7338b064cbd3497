use std::path::Path;

/// Read a whole CSV into raw rows, header included. The reader is flexible on
/// purpose: rows with the wrong number of fields still come through and get
/// dropped later by the validity check, instead of failing the whole file.
pub(crate) fn read_table<R: std::io::Read>(reader: R) -> Result<Vec<Vec<String>>, anyhow::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

/// Load the accumulated history, if there is any. A missing, empty or
/// unreadable old file just means "no history yet" - the first run over a
/// fresh dataset has nothing to preserve.
pub(crate) fn read_history(path: &Path) -> Vec<Vec<String>> {
    let has_content = std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
    if !has_content {
        return Vec::new();
    }
    std::fs::File::open(path)
        .map_err(anyhow::Error::from)
        .and_then(read_table)
        .unwrap_or_default()
}
