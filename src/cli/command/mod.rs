pub mod columns;
pub mod correct;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};

pub use columns::columns;
pub use correct::correct;

use crate::export::Format;

/// Name of the exported file, stamped with the local time of the run.
pub fn make_output_file_name(format: Format, now: DateTime<Local>) -> String {
    format!(
        "magcorr_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

pub fn make_output_path(dir: Option<&Path>, format: Format) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::home_dir().ok_or_else(|| anyhow!("Could not find the home directory"))?,
    };

    Ok(dir.join(make_output_file_name(format, Local::now())))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn should_make_timestamped_file_name() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();

        assert_eq!(
            make_output_file_name(Format::Csv, now),
            "magcorr_20240309_070501.csv"
        );
        assert_eq!(
            make_output_file_name(Format::Parquet, now),
            "magcorr_20240309_070501.parquet"
        );
    }

    #[test]
    fn should_place_output_in_given_dir() {
        let path = make_output_path(Some(Path::new("/tmp/out")), Format::Csv).unwrap();

        assert!(path.starts_with("/tmp/out"));
        assert_eq!(path.extension().unwrap(), "csv");
    }
}
