use crate::core::{ConfigProvider, ProbeOutcome, ProbeReport, StatusSource, BANNER};
use crate::utils::error::Result;
use std::io::Write;

pub struct ConnectivityProbe<S: StatusSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: StatusSource, C: ConfigProvider> ConnectivityProbe<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    /// Prints the banner, requests the endpoint once and prints the outcome line.
    ///
    /// The banner is flushed before the request so it is visible even when the
    /// request fails; in that case no outcome line is written and the error is returned.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ProbeReport> {
        writeln!(out, "{}", BANNER)?;
        out.flush()?;

        let endpoint = self.config.endpoint();
        tracing::debug!("Probing endpoint: {}", endpoint);
        let status = self.source.fetch_status(endpoint).await?;

        let outcome = ProbeOutcome::from_status(status);
        tracing::debug!("Endpoint answered with status {} ({:?})", status, outcome);

        writeln!(out, "{}", outcome.message())?;
        out.flush()?;

        Ok(ProbeReport {
            endpoint: endpoint.to_string(),
            status,
            outcome,
        })
    }
}
