use anyhow::{Result, anyhow};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct ReportMeta {
    pub kind: String,
    pub window: String,
    pub generated_at: OffsetDateTime,
}

const REPORT_KINDS: &[&str] = &[
    "summary",
    "portfolio",
    "risk",
    "correlation",
    "volume",
    "smart-money",
    "volatility",
];

/// Mock analytics desk: validates report kinds and remembers what was
/// generated this session.
#[derive(Debug, Default)]
pub struct AnalyticsDesk {
    reports: Vec<ReportMeta>,
}

impl AnalyticsDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_report(&mut self, kind: &str, window: &str) -> Result<String> {
        if !REPORT_KINDS.contains(&kind) {
            return Err(anyhow!(
                "unknown report kind '{kind}' (expected one of: {})",
                REPORT_KINDS.join(", ")
            ));
        }
        self.reports.push(ReportMeta {
            kind: kind.to_string(),
            window: window.to_string(),
            generated_at: OffsetDateTime::now_utc(),
        });
        Ok(format!("Generated {kind} report over {window}"))
    }

    pub fn export_csv(&self) -> Result<String> {
        let mut out = String::from("kind,window\n");
        for r in &self.reports {
            out.push_str(&format!("{},{}\n", r.kind, r.window));
        }
        Ok(out)
    }

    pub fn reports(&self) -> &[ReportMeta] {
        &self.reports
    }
}
