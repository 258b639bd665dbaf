//! Per-item pass/fail collection for verification runs.

/// Outcome of one verification check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    /// Suspicious but not a failure (e.g. unexpected dimensions).
    Warn,
    Fail,
}

/// One recorded check.
#[derive(Clone, Debug)]
pub struct CheckItem {
    pub label: String,
    pub outcome: Outcome,
    pub detail: Option<String>,
}

/// Accumulated verification results. Checks never abort the run; they are
/// recorded here and summarized at the end.
#[derive(Clone, Debug, Default)]
pub struct Report {
    items: Vec<CheckItem>,
}

impl Report {
    pub fn pass(&mut self, label: impl Into<String>) {
        self.items.push(CheckItem {
            label: label.into(),
            outcome: Outcome::Pass,
            detail: None,
        });
    }

    pub fn warn(&mut self, label: impl Into<String>, detail: impl Into<String>) {
        self.items.push(CheckItem {
            label: label.into(),
            outcome: Outcome::Warn,
            detail: Some(detail.into()),
        });
    }

    pub fn fail(&mut self, label: impl Into<String>, detail: impl Into<String>) {
        self.items.push(CheckItem {
            label: label.into(),
            outcome: Outcome::Fail,
            detail: Some(detail.into()),
        });
    }

    pub fn items(&self) -> &[CheckItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.outcome == Outcome::Fail)
            .count()
    }

    pub fn passed(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.outcome == Outcome::Pass)
            .count()
    }

    /// True when no check failed (warnings allowed).
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Print every item and a one-line total to stdout.
    pub fn print_summary(&self, heading: &str) {
        println!("{heading}");
        for item in &self.items {
            let marker = match item.outcome {
                Outcome::Pass => "ok  ",
                Outcome::Warn => "warn",
                Outcome::Fail => "FAIL",
            };
            match &item.detail {
                Some(detail) => println!("  {marker} {}: {detail}", item.label),
                None => println!("  {marker} {}", item.label),
            }
        }
        println!(
            "{} checks: {} passed, {} failed",
            self.len(),
            self.passed(),
            self.failed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_tracks_failures_not_warnings() {
        let mut report = Report::default();
        report.pass("a");
        report.warn("b", "odd");
        assert!(report.is_success());

        report.fail("c", "broken");
        assert!(!report.is_success());
        assert_eq!(report.failed(), 1);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.len(), 3);
    }
}
