//! Outbound Link Audit
//!
//! The front-end never checks its links; a dead hotline site is a content
//! maintenance problem. This module walks every link in the [`Catalog`] and
//! reports:
//!
//! - **offline**: whether each URL is a well-formed `https` address
//! - **online**: additionally, the HTTP status each distinct URL ends on
//!
//! Distinct URLs are probed once, `concurrency` at a time, and the findings
//! come back in catalog render order.

pub mod probe;

pub use probe::{HttpProbe, LinkProbe, ProbeError};

use chrono::{DateTime, Utc};
use futures_util::{stream, StreamExt};
use reqwest::Url;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::content::{Catalog, LinkRef};

/// Outcome for one link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkStatus {
    /// Parsed fine, not probed
    WellFormed,
    /// Probe ended on a 2xx or 3xx status
    Reachable { code: u16 },
    /// Probe ended on a 4xx or 5xx status
    Broken { code: u16 },
    /// No HTTP status at all (timeout, DNS, TLS, rate limit)
    Unreachable { reason: String },
    /// Not a usable https URL
    Malformed { reason: String },
}

impl LinkStatus {
    fn from_code(code: u16) -> Self {
        if (200..400).contains(&code) {
            LinkStatus::Reachable { code }
        } else {
            LinkStatus::Broken { code }
        }
    }

    pub fn is_problem(&self) -> bool {
        !matches!(self, LinkStatus::WellFormed | LinkStatus::Reachable { .. })
    }

    /// Short label for table output
    pub fn label(&self) -> String {
        match self {
            LinkStatus::WellFormed => "ok".to_string(),
            LinkStatus::Reachable { code } => format!("ok ({})", code),
            LinkStatus::Broken { code } => format!("broken ({})", code),
            LinkStatus::Unreachable { reason } => format!("unreachable: {}", reason),
            LinkStatus::Malformed { reason } => format!("malformed: {}", reason),
        }
    }
}

/// One audited link
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    #[serde(flatten)]
    pub link: LinkRef,
    #[serde(flatten)]
    pub status: LinkStatus,
}

/// Counts for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub total: usize,
    pub ok: usize,
    pub problems: usize,
    pub distinct_urls: usize,
}

/// Result of an audit run
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub checked_at: DateTime<Utc>,
    pub online: bool,
    pub summary: AuditSummary,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    fn new(online: bool, findings: Vec<Finding>) -> Self {
        let problems = findings.iter().filter(|f| f.status.is_problem()).count();
        let mut urls: Vec<_> = findings.iter().map(|f| f.link.url).collect();
        urls.sort_unstable();
        urls.dedup();

        Self {
            checked_at: Utc::now(),
            online,
            summary: AuditSummary {
                total: findings.len(),
                ok: findings.len() - problems,
                problems,
                distinct_urls: urls.len(),
            },
            findings,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.summary.problems == 0
    }

    pub fn problems(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.status.is_problem())
    }
}

/// Audit errors
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported scheme {0:?}, expected https")]
    Scheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Parse a catalog URL and require an https address with a dotted host
pub fn check_well_formed(raw: &str) -> Result<Url, AuditError> {
    let url = Url::parse(raw).map_err(|e| AuditError::InvalidUrl(e.to_string()))?;

    if url.scheme() != "https" {
        return Err(AuditError::Scheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if host.contains('.') => Ok(url),
        _ => Err(AuditError::MissingHost),
    }
}

/// Check every link without touching the network
pub fn audit_offline(links: &[LinkRef]) -> AuditReport {
    let findings = links
        .iter()
        .map(|link| Finding {
            link: *link,
            status: match check_well_formed(link.url) {
                Ok(_) => LinkStatus::WellFormed,
                Err(e) => LinkStatus::Malformed {
                    reason: e.to_string(),
                },
            },
        })
        .collect();

    AuditReport::new(false, findings)
}

/// Check every link and probe each distinct well-formed URL
pub async fn audit_online<P: LinkProbe>(
    links: &[LinkRef],
    probe: &P,
    concurrency: usize,
) -> AuditReport {
    let mut distinct: Vec<&'static str> = Vec::new();
    let mut statuses: HashMap<&'static str, LinkStatus> = HashMap::new();

    for link in links {
        if statuses.contains_key(link.url) || distinct.contains(&link.url) {
            continue;
        }
        match check_well_formed(link.url) {
            Ok(_) => distinct.push(link.url),
            Err(e) => {
                statuses.insert(
                    link.url,
                    LinkStatus::Malformed {
                        reason: e.to_string(),
                    },
                );
            }
        }
    }

    tracing::info!(
        links = links.len(),
        distinct = distinct.len(),
        concurrency,
        "probing outbound links"
    );

    let probed: Vec<(&'static str, LinkStatus)> = stream::iter(distinct)
        .map(|raw| async move {
            let status = match check_well_formed(raw) {
                Ok(url) => match probe.probe(&url).await {
                    Ok(code) => LinkStatus::from_code(code),
                    Err(e) => LinkStatus::Unreachable {
                        reason: e.to_string(),
                    },
                },
                Err(e) => LinkStatus::Malformed {
                    reason: e.to_string(),
                },
            };
            if status.is_problem() {
                tracing::warn!(url = raw, status = %status.label(), "link problem");
            }
            (raw, status)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    statuses.extend(probed);

    let findings = links
        .iter()
        .map(|link| Finding {
            link: *link,
            status: statuses
                .get(link.url)
                .cloned()
                .unwrap_or(LinkStatus::WellFormed),
        })
        .collect();

    AuditReport::new(true, findings)
}

/// Offline audit of the compiled catalog
pub fn audit_catalog_offline() -> AuditReport {
    audit_offline(&Catalog::get().links())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::View;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Canned {
        Code(u16),
        Timeout,
    }

    struct FakeProbe {
        responses: HashMap<&'static str, Canned>,
        calls: AtomicUsize,
    }

    impl FakeProbe {
        fn new(responses: Vec<(&'static str, Canned)>) -> Self {
            Self {
                responses: responses.into_iter().collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LinkProbe for FakeProbe {
        async fn probe(&self, url: &Url) -> Result<u16, ProbeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.responses.get(url.as_str()) {
                Some(Canned::Code(code)) => Ok(*code),
                Some(Canned::Timeout) => Err(ProbeError::Timeout),
                None => Ok(200),
            }
        }
    }

    fn link(title: &'static str, url: &'static str) -> LinkRef {
        LinkRef {
            view: View::Resources,
            section: "Test",
            title,
            url,
        }
    }

    #[test]
    fn test_check_well_formed() {
        assert!(check_well_formed("https://www.nami.org").is_ok());
        assert!(matches!(
            check_well_formed("http://www.nami.org"),
            Err(AuditError::Scheme(s)) if s == "http"
        ));
        assert!(matches!(
            check_well_formed("not a url"),
            Err(AuditError::InvalidUrl(_))
        ));
        assert!(matches!(
            check_well_formed("https://localhost/path"),
            Err(AuditError::MissingHost)
        ));
    }

    #[test]
    fn test_compiled_catalog_is_well_formed() {
        let report = audit_catalog_offline();
        let problems: Vec<_> = report.problems().map(|f| f.link.url).collect();
        assert!(problems.is_empty(), "malformed links: {:?}", problems);
        assert!(!report.online);
        assert_eq!(report.summary.total, Catalog::get().links().len());
    }

    #[test]
    fn test_offline_reports_malformed() {
        let links = [
            link("good", "https://www.7cups.com"),
            link("bad", "ftp://example.org/file"),
        ];
        let report = audit_offline(&links);

        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.problems, 1);
        assert!(!report.is_clean());
        assert_eq!(report.findings[0].status, LinkStatus::WellFormed);
        assert!(matches!(
            report.findings[1].status,
            LinkStatus::Malformed { .. }
        ));
    }

    #[tokio::test]
    async fn test_online_classifies_statuses() {
        let probe = FakeProbe::new(vec![
            ("https://ok.example.org/", Canned::Code(200)),
            ("https://moved.example.org/", Canned::Code(301)),
            ("https://gone.example.org/", Canned::Code(404)),
            ("https://slow.example.org/", Canned::Timeout),
        ]);
        let links = [
            link("ok", "https://ok.example.org/"),
            link("moved", "https://moved.example.org/"),
            link("gone", "https://gone.example.org/"),
            link("slow", "https://slow.example.org/"),
            link("bad", "http://insecure.example.org/"),
        ];

        let report = audit_online(&links, &probe, 2).await;

        let statuses: Vec<_> = report.findings.iter().map(|f| f.status.clone()).collect();
        assert_eq!(statuses[0], LinkStatus::Reachable { code: 200 });
        assert_eq!(statuses[1], LinkStatus::Reachable { code: 301 });
        assert_eq!(statuses[2], LinkStatus::Broken { code: 404 });
        assert_eq!(
            statuses[3],
            LinkStatus::Unreachable {
                reason: "Request timeout".to_string()
            }
        );
        assert!(matches!(statuses[4], LinkStatus::Malformed { .. }));

        assert!(report.online);
        assert_eq!(report.summary.ok, 2);
        assert_eq!(report.summary.problems, 3);
        // The malformed link is never probed
        assert_eq!(probe.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_online_probes_each_url_once() {
        let probe = FakeProbe::new(vec![]);
        let links = [
            link("a", "https://www.sleepfoundation.org/sleep"),
            link("b", "https://www.sleepfoundation.org/sleep"),
            link("c", "https://www.headspace.com/"),
        ];

        let report = audit_online(&links, &probe, 8).await;

        assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
        assert_eq!(report.summary.distinct_urls, 2);
        assert!(report.is_clean());
        // Order follows the input
        let titles: Vec<_> = report.findings.iter().map(|f| f.link.title).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn test_finding_serializes_flat() {
        let report = audit_offline(&[link("good", "https://www.7cups.com")]);
        let json = serde_json::to_value(&report.findings[0]).unwrap();
        assert_eq!(json["status"], "well_formed");
        assert_eq!(json["title"], "good");
        assert_eq!(json["view"], "resources");
    }
}
