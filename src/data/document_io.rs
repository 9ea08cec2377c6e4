// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))] so no need to gate internally here

use {
    anyhow::{Context, Result},
    std::io::Read,
    std::path::Path,
};

/// Reads a whole weigh-in document. `None` or `-` means stdin.
pub fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read weigh-in file {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read weigh-in document from stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_document_from_file() {
        let path = std::env::temp_dir().join("weigh_in_candles_read_document.json");
        std::fs::write(&path, "[]").unwrap();
        assert_eq!(read_document(Some(&path)).unwrap(), "[]");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/definitely/not/here/weigh_ins.json");
        let err = read_document(Some(path)).unwrap_err();
        assert!(format!("{}", err).contains("weigh_ins.json"));
    }
}
