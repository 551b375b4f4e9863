//! Daily background refresh.
//!
//! One timer task owned by [`RefreshScheduler`] fires at the next local
//! midnight and then every 24 hours on the same grid, however long each
//! cycle takes. Each cycle reads
//! the run/stop status from the store; a stopped status skips the cycle
//! entirely.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::dictionary::Direction;
use crate::dom;
use crate::extractor::ContentExtractor;
use crate::fetch::Fetcher;
use crate::result::ElementCounts;
use crate::status::{Status, StatusStore};

/// Interval between refreshes after the first one.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Start of the day after `now`, in `now`'s time zone.
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    now.date_naive()
        .succ_opt()
        .and_then(|day| tz.from_local_datetime(&day.and_time(NaiveTime::MIN)).earliest())
        .unwrap_or_else(|| now.clone() + TimeDelta::days(1))
}

/// Time left until the next local midnight.
#[must_use]
pub fn delay_until_midnight(now: &DateTime<Local>) -> Duration {
    (next_midnight(now) - *now).to_std().unwrap_or(Duration::ZERO)
}

/// Whether a cycle runs under `status`.
#[must_use]
pub fn should_refresh(status: Status) -> bool {
    status == Status::Running
}

/// What one scheduled cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Status was `stopped`; nothing was fetched.
    Skipped,
    /// Page fetched; `counts` is set when the extraction step is enabled.
    Refreshed {
        bytes: usize,
        counts: Option<ElementCounts>,
    },
    /// Status could not be read or the page could not be loaded.
    Failed { reason: String },
}

/// The work done on every fire: check status, fetch, optionally extract.
#[derive(Clone)]
pub struct RefreshJob {
    url: String,
    fetcher: Arc<dyn Fetcher>,
    status: Arc<dyn StatusStore>,
    extractor: Option<Arc<ContentExtractor>>,
    direction: Direction,
}

impl RefreshJob {
    pub fn new(url: impl Into<String>, fetcher: Arc<dyn Fetcher>, status: Arc<dyn StatusStore>) -> Self {
        Self {
            url: url.into(),
            fetcher,
            status,
            extractor: None,
            direction: Direction::default(),
        }
    }

    /// Also run the extraction pipeline on each fetched page.
    #[must_use]
    pub fn with_extraction(mut self, extractor: Arc<ContentExtractor>, direction: Direction) -> Self {
        self.extractor = Some(extractor);
        self.direction = direction;
        self
    }

    /// Run one cycle now.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let status = match self.status.load() {
            Ok(status) => status,
            Err(err) => {
                return CycleOutcome::Failed {
                    reason: format!("status unavailable: {err}"),
                }
            }
        };
        if !should_refresh(status) {
            return CycleOutcome::Skipped;
        }

        match self.fetcher.fetch_raw_html(&self.url).await {
            Ok(html) => CycleOutcome::Refreshed {
                bytes: html.len(),
                counts: self
                    .extractor
                    .as_ref()
                    .map(|ex| ex.extract(&dom::parse(&html), self.direction).counts),
            },
            Err(err) => CycleOutcome::Failed {
                reason: err.to_string(),
            },
        }
    }
}

fn log_outcome(url: &str, outcome: &CycleOutcome) {
    match outcome {
        CycleOutcome::Skipped => log::info!("refresh skipped: status is stopped"),
        CycleOutcome::Refreshed { bytes, counts } => match counts {
            Some(c) => log::info!(
                "refreshed {url} ({bytes} bytes; {} headings, {} tables, {} charts)",
                c.headings,
                c.tables,
                c.charts
            ),
            None => log::info!("refreshed {url} ({bytes} bytes)"),
        },
        CycleOutcome::Failed { reason } => log::error!("refresh of {url} failed: {reason}"),
    }
}

/// Recurring timer running a [`RefreshJob`].
///
/// Dropping the scheduler also stops the timer task.
pub struct RefreshScheduler {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    outcomes: watch::Receiver<Option<CycleOutcome>>,
}

impl RefreshScheduler {
    /// First fire at the next local midnight, then every [`REFRESH_PERIOD`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(job: RefreshJob) -> Self {
        let first = delay_until_midnight(&Local::now());
        log::info!("first refresh in {}s", first.as_secs());
        Self::start_with(job, first, REFRESH_PERIOD)
    }

    /// Fire after `first_delay`, then every `period`.
    ///
    /// Fires are spaced from scheduled times, not from the end of the previous
    /// cycle, so a slow fetch does not push later fires back. A cycle that
    /// outlasts `period` is followed by an immediate fire.
    pub fn start_with(job: RefreshJob, first_delay: Duration, period: Duration) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let (outcome_tx, outcome_rx) = watch::channel(None);

        // interval_at rejects a zero period
        let period = period.max(Duration::from_millis(1));
        let task = tokio::spawn(async move {
            let mut timer = tokio::time::interval_at(Instant::now() + first_delay, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = timer.tick() => {}
                }
                tokio::select! {
                    _ = &mut stop_rx => break,
                    outcome = job.run_cycle() => {
                        log_outcome(&job.url, &outcome);
                        outcome_tx.send_replace(Some(outcome));
                    }
                }
            }
            log::debug!("refresh timer stopped");
        });

        Self {
            stop: Some(stop_tx),
            task,
            outcomes: outcome_rx,
        }
    }

    /// Receiver updated with the outcome of every completed cycle.
    #[must_use]
    pub fn outcomes(&self) -> watch::Receiver<Option<CycleOutcome>> {
        self.outcomes.clone()
    }

    /// Cancel the timer and wait for the task to finish.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Err(err) = (&mut self.task).await {
            log::warn!("refresh task ended abnormally: {err}");
        }
    }
}
