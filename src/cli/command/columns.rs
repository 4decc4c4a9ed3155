//! Lists the columns of a table so they can be passed to `correct`.

use std::path::Path;

use anyhow::Result;

use crate::{cli::delimiter_byte, table::Table};

pub fn columns(file: &Path, delimiter: char) -> Result<Vec<String>> {
    let table = Table::from_path(file, delimiter_byte(delimiter)?)?;
    info!("{} has {} rows", file.display(), table.len());

    Ok(table.headers().to_vec())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_list_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, "FECHA\tHORA\tCAMPO\n01/01/2020\t101010\t1\n").unwrap();

        let names = columns(&path, '\t').unwrap();

        assert_eq!(names, vec!["FECHA", "HORA", "CAMPO"]);
    }

    #[test]
    fn should_report_missing_file_without_dataset() {
        let dir = TempDir::new().unwrap();
        let err = columns(&dir.path().join("base.csv"), ',').unwrap_err();

        let message = err.to_string();
        assert!(message.contains("base.csv"));
        assert!(!message.contains("stations"));
    }
}
