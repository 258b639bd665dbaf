//! HTTP checks against the dev server that serves the generated assets.

use std::time::Duration;

use anyhow::Context as _;
use tracing::debug;

use crate::foundation::error::SignResult;
use crate::manifest::DictionaryManifest;
use crate::verify::report::Report;

/// Dictionary words sampled for HTTP checks.
pub const SAMPLE_WORDS: [&str; 9] = [
    "hello", "thank_you", "family", "red", "one", "today", "go", "what", "i",
];

const ASSET_TIMEOUT: Duration = Duration::from_secs(3);
const SERVER_TIMEOUT: Duration = Duration::from_secs(5);
// Pause between requests so the dev server isn't hammered.
const REQUEST_GAP: Duration = Duration::from_millis(100);

/// Blocking checker for one base URL.
pub struct HttpChecker {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpChecker {
    pub fn new(base_url: impl Into<String>) -> SignResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(ASSET_TIMEOUT)
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET the base URL. Returns false (and records a failure) when the
    /// server is unreachable, so callers can skip the per-asset checks.
    pub fn check_server(&self, report: &mut Report) -> bool {
        match self
            .client
            .get(&self.base_url)
            .timeout(SERVER_TIMEOUT)
            .send()
        {
            Ok(resp) if resp.status().is_success() => {
                report.pass(format!("server {}", self.base_url));
                true
            }
            Ok(resp) => {
                report.fail(
                    format!("server {}", self.base_url),
                    format!("HTTP {}", resp.status()),
                );
                false
            }
            Err(err) => {
                report.fail(format!("server {}", self.base_url), err.to_string());
                false
            }
        }
    }

    /// HEAD one asset path and check status plus image content type.
    pub fn check_asset(&self, path: &str, report: &mut Report) {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "checking asset");
        match self.client.head(&url).send() {
            Ok(resp) if resp.status().is_success() => {
                let content_type = resp
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("");
                if content_type.contains("image") || content_type.contains("svg") {
                    report.pass(path.to_string());
                } else {
                    report.fail(
                        path.to_string(),
                        format!("unexpected content type '{content_type}'"),
                    );
                }
            }
            Ok(resp) => report.fail(path.to_string(), format!("HTTP {}", resp.status())),
            Err(err) => report.fail(path.to_string(), err.to_string()),
        }
    }

    /// HEAD a batch of asset paths with a small gap between requests.
    pub fn check_assets<I>(&self, paths: I, report: &mut Report)
    where
        I: IntoIterator<Item = String>,
    {
        for path in paths {
            self.check_asset(&path, report);
            std::thread::sleep(REQUEST_GAP);
        }
    }

    /// GET the dictionary manifest and validate it.
    pub fn check_manifest(&self, path: &str, report: &mut Report) {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let manifest: DictionaryManifest = match self
            .client
            .get(&url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json())
        {
            Ok(manifest) => manifest,
            Err(err) => {
                report.fail(path.to_string(), err.to_string());
                return;
            }
        };
        match manifest.validate() {
            Ok(()) => report.pass(format!("{path} ({} signs)", manifest.total_signs)),
            Err(err) => report.fail(path.to_string(), err.to_string()),
        }
    }
}

/// Asset paths checked against the server: the 26 alphabet PNGs and a sample
/// of dictionary SVGs.
pub fn default_asset_paths() -> Vec<String> {
    let mut paths: Vec<String> = ('a'..='z')
        .map(|letter| format!("images/signs/alphabet/{letter}.png"))
        .collect();
    paths.extend(
        SAMPLE_WORDS
            .iter()
            .map(|word| format!("images/signs/dictionary/{word}.svg")),
    );
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let checker = HttpChecker::new("http://localhost:3000/").unwrap();
        assert_eq!(checker.base_url(), "http://localhost:3000");
    }

    #[test]
    fn default_paths_cover_alphabet_and_samples() {
        let paths = default_asset_paths();
        assert_eq!(paths.len(), 26 + SAMPLE_WORDS.len());
        assert!(paths.contains(&"images/signs/alphabet/a.png".to_string()));
        assert!(paths.contains(&"images/signs/dictionary/thank_you.svg".to_string()));
    }

    #[test]
    fn unreachable_server_is_a_failed_check() {
        // Port 9 (discard) is essentially never bound on dev machines.
        let checker = HttpChecker::new("http://127.0.0.1:9").unwrap();
        let mut report = Report::default();
        assert!(!checker.check_server(&mut report));
        assert_eq!(report.failed(), 1);
    }
}
