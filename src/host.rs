// Host facade: fetch + parse per metric, and whole snapshots

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::error::{Error, Result, SourceError};
use crate::models::{FieldValues, HostSnapshot, InterfaceTable, KeyedTable, LoadAverage, UptimeRecord};
use crate::parser::{parse_interfaces, parse_key_values, parse_load_average, parse_table, parse_uptime};
use crate::platform::{Layout, Metric, Platform};
use crate::provider::Provider;
use crate::source::{Collaborators, system_page_size};

pub struct Host {
    provider: Provider,
}

impl Host {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    /// Host for the running OS using real processes and files.
    pub fn detect(collaborators: Collaborators) -> Result<Self> {
        Ok(Self::new(Provider::new(Platform::detect()?, collaborators)))
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn platform(&self) -> Platform {
        self.provider.platform()
    }

    fn layout(&self) -> &'static Layout {
        self.platform().layout()
    }

    #[instrument(skip(self), fields(platform = %self.platform(), operation = "uptime"))]
    pub fn uptime(&self) -> Result<UptimeRecord> {
        let secs = self.provider.fetch_uptime()?;
        Ok(parse_uptime(secs)?)
    }

    /// Memory figures by raw label. Labels the platform did not print are
    /// absent (see [`FieldValues::require`]).
    #[instrument(skip(self), fields(platform = %self.platform(), operation = "memory"))]
    pub fn memory(&self) -> Result<FieldValues> {
        let raw = self.provider.fetch_memory()?;
        let fields = self.layout().memory;
        let values = parse_key_values(raw.text(), fields);
        if values.len() < fields.len() {
            let missing: Vec<&str> = fields.iter().copied().filter(|f| !values.contains(f)).collect();
            debug!(?missing, "memory fields not reported");
        }
        Ok(values)
    }

    #[instrument(skip(self), fields(platform = %self.platform(), operation = "swap"))]
    pub fn swap(&self) -> Result<KeyedTable> {
        let raw = self.provider.fetch_swap()?;
        Ok(parse_table(raw.text(), &self.layout().swap)?)
    }

    #[instrument(skip(self), fields(platform = %self.platform(), operation = "load_average"))]
    pub fn load_average(&self) -> Result<LoadAverage> {
        let raw = self.provider.fetch_loadavg()?;
        Ok(parse_load_average(raw.text(), &self.layout().load)?)
    }

    #[instrument(skip(self), fields(platform = %self.platform(), operation = "fs_usage"))]
    pub fn fs_usage(&self) -> Result<KeyedTable> {
        let raw = self.provider.fetch_fsusage()?;
        Ok(parse_table(raw.text(), &self.layout().fs_usage)?)
    }

    #[instrument(skip(self), fields(platform = %self.platform(), operation = "inodes"))]
    pub fn inodes(&self) -> Result<KeyedTable> {
        let raw = self.provider.fetch_inodes()?;
        Ok(parse_table(raw.text(), &self.layout().inodes)?)
    }

    #[instrument(skip(self), fields(platform = %self.platform(), operation = "io_stats"))]
    pub fn io_stats(&self) -> Result<KeyedTable> {
        let raw = self.provider.fetch_iostat()?;
        Ok(parse_table(raw.text(), &self.layout().io_stats)?)
    }

    #[instrument(skip(self), fields(platform = %self.platform(), operation = "interfaces"))]
    pub fn interfaces(&self) -> Result<InterfaceTable> {
        let raw = self.provider.fetch_interfaces()?;
        Ok(parse_interfaces(raw.text(), &self.layout().interfaces)?)
    }

    /// Capture `metrics` once. A failing metric is left out and its error
    /// recorded; the others are still returned.
    pub fn snapshot(&self, metrics: &[Metric]) -> HostSnapshot {
        let page_size = system_page_size()
            .map_err(|e| debug!(error = %e, "page size unavailable"))
            .ok();
        let mut snapshot =
            HostSnapshot::empty(self.platform(), chrono::Utc::now().timestamp(), page_size);

        for &metric in metrics {
            if let Err(e) = self.sample_into(metric, &mut snapshot) {
                warn!(metric = %metric, error = %e, "metric capture failed");
                snapshot.errors.insert(metric, e.to_string());
            }
        }
        snapshot
    }

    fn sample_into(&self, metric: Metric, snapshot: &mut HostSnapshot) -> Result<()> {
        match metric {
            Metric::Uptime => snapshot.uptime = Some(self.uptime()?),
            Metric::Memory => snapshot.memory = Some(self.memory()?),
            Metric::Swap => snapshot.swap = Some(self.swap()?),
            Metric::LoadAverage => snapshot.load_average = Some(self.load_average()?),
            Metric::FsUsage => snapshot.fs_usage = Some(self.fs_usage()?),
            Metric::Inodes => snapshot.inodes = Some(self.inodes()?),
            Metric::IoStat => snapshot.io_stats = Some(self.io_stats()?),
            Metric::Interfaces => snapshot.interfaces = Some(self.interfaces()?),
        }
        Ok(())
    }

    /// Run [`Host::snapshot`] on a blocking worker thread and give up after
    /// `timeout`. The worker is not cancelled; pair with a runner timeout so
    /// hung commands are killed too.
    pub async fn snapshot_blocking(
        self: Arc<Self>,
        metrics: Vec<Metric>,
        timeout: Duration,
    ) -> Result<HostSnapshot> {
        let task = tokio::task::spawn_blocking(move || self.snapshot(&metrics));
        match tokio::time::timeout(timeout, task).await {
            Ok(joined) => joined.map_err(|e| Error::Task(e.to_string())),
            Err(_) => Err(SourceError::Timeout {
                command: "snapshot".to_string(),
                after: timeout,
            }
            .into()),
        }
    }
}
