use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // https://<host>/<owner>/<repo>/compare[/...]
    static ref COMPARE_PAGE_REGEX: Regex =
        Regex::new(r"^https://[^/]+/[^/]+/[^/]+/compare/?.*$").unwrap();
}

/// Where one version of a flow document lives in a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileLocator {
    /// Host name, e.g. `github.com`
    pub host: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch, tag or commit
    pub reference: String,
    /// Path of the document inside the repository
    pub path: String,
}

impl FileLocator {
    /// Create a new locator
    pub fn new(
        host: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        reference: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            repo: repo.into(),
            reference: reference.into(),
            path: path.into(),
        }
    }

    /// URL of the raw file
    pub fn raw_url(&self) -> String {
        self.raw_url_on(&format!("https://{}", self.host))
    }

    /// URL of the raw file under a different origin
    pub(crate) fn raw_url_on(&self, origin: &str) -> String {
        format!(
            "{}/{}/{}/raw/{}/{}",
            origin.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.reference,
            self.path
        )
    }

    /// The same file at another reference
    pub fn at(&self, reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for FileLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}@{}:{}",
            self.owner, self.repo, self.reference, self.path
        )
    }
}

/// Whether `url` is a repository compare page
pub fn is_compare_page(url: &str) -> bool {
    COMPARE_PAGE_REGEX.is_match(url)
}
