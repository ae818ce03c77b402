//! Resolution of the `--base` and `--compare` arguments into document text

use std::path::PathBuf;

use anyhow::{bail, Context};
use flowdiff_source::{is_compare_page, join_sides, read_path, HttpGraphSource};
use tracing::info;

/// Where one side of the comparison comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Downloaded with a GET
    Remote(String),
    /// Read from disk
    Local(PathBuf),
}

impl Input {
    /// Classify a command-line argument. A repository compare page is
    /// rejected; each side has to name a raw file.
    pub fn parse(arg: &str) -> anyhow::Result<Self> {
        if is_compare_page(arg) {
            bail!("{} is a compare page, pass the raw URL of each side instead", arg);
        }
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Ok(Input::Remote(arg.to_string()))
        } else {
            Ok(Input::Local(PathBuf::from(arg)))
        }
    }

    /// Fetch the document text. `Ok(None)` when the file does not exist.
    pub async fn load(&self, http: &HttpGraphSource) -> anyhow::Result<Option<String>> {
        let text = match self {
            Input::Remote(url) => http
                .fetch_url(url)
                .await
                .with_context(|| format!("Failed to download {}", url))?,
            Input::Local(path) => read_path(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?,
        };

        if text.is_none() {
            info!("{} does not exist, treating that side as absent", self);
        }
        Ok(text)
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Remote(url) => write!(f, "{}", url),
            Input::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load both sides concurrently. An unspecified side is absent.
pub async fn load_pair(
    base: Option<&Input>,
    compare: Option<&Input>,
    http: &HttpGraphSource,
) -> anyhow::Result<(Option<String>, Option<String>)> {
    join_sides(
        base.map(|input| input.load(http)),
        compare.map(|input| input.load(http)),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_parse() {
        assert_eq!(
            Input::parse("https://github.com/acme/flows/raw/main/a.json").unwrap(),
            Input::Remote("https://github.com/acme/flows/raw/main/a.json".to_string())
        );
        assert_eq!(
            Input::parse("http://localhost/a.json").unwrap(),
            Input::Remote("http://localhost/a.json".to_string())
        );
        assert_eq!(
            Input::parse("flows/a.json").unwrap(),
            Input::Local(PathBuf::from("flows/a.json"))
        );
    }

    #[test]
    fn test_compare_page_is_rejected() {
        let err = Input::parse("https://github.com/acme/flows/compare/main...dev").unwrap_err();
        assert!(err.to_string().contains("is a compare page"));
    }

    #[tokio::test]
    async fn test_load_pair_local() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("present.json");
        std::fs::write(&present, "{}").unwrap();

        let base = Input::Local(dir.path().join("missing.json"));
        let compare = Input::Local(present);
        let http = HttpGraphSource::new(Duration::from_secs(1)).unwrap();

        let (base_text, compare_text) = load_pair(Some(&base), Some(&compare), &http)
            .await
            .unwrap();
        assert!(base_text.is_none());
        assert_eq!(compare_text.as_deref(), Some("{}"));
    }
}
