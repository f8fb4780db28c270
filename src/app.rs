//! Top-level dashboard controller.
//!
//! Owns the explicit UI state (current range, current result, loading and
//! error flags) and drives one validate -> fetch -> aggregate pass per
//! submission. State changes only through the transition methods; at most one
//! pass is in flight, and `loading` is cleared on every exit path.

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::fetch::NeoFeedApi;
use crate::stats::{NeoSummary, aggregate};
use crate::validate::{DateRange, validate};

/// State mirrored by the presentation layer. A pass replaces `result`
/// wholesale; a failed pass leaves the previous `result` visible.
#[derive(Debug, Default)]
pub struct AppState {
    pub range: Option<DateRange>,
    pub result: Option<NeoSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AppState {
    /// Marks a pass in flight. Returns `false` and changes nothing while
    /// another pass is outstanding.
    fn submit(&mut self, range: DateRange) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.range = Some(range);
        true
    }

    fn succeed(&mut self, result: NeoSummary) {
        self.result = Some(result);
        self.error = None;
        self.loading = false;
    }

    fn fail(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
    }
}

/// Runs aggregation passes against a [`NeoFeedApi`] implementation.
pub struct Dashboard<A> {
    api: A,
    state: AppState,
}

impl<A: NeoFeedApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs one pass for the submitted window.
    ///
    /// Validation failures short-circuit before any network call and become
    /// the inline error. Fetch and aggregation failures are surfaced into
    /// `state.error` as well as the log; they never clobber a previously
    /// displayed result.
    pub async fn run(&mut self, range: DateRange, today: NaiveDate) {
        if let Err(e) = validate(range.start, range.end, today) {
            info!(error = %e, "Date range rejected");
            self.state.fail(e.to_string());
            return;
        }

        if !self.state.submit(range) {
            warn!("A pass is already in flight; submission rejected");
            return;
        }

        match self.api.feed(&range).await {
            Ok(payload) => match aggregate(&payload) {
                Ok(summary) => {
                    info!(
                        days = summary.series.len(),
                        average_size_km = summary.stats.average_size_km,
                        "Aggregation pass complete"
                    );
                    self.state.succeed(summary);
                }
                Err(e) => {
                    error!(error = %e, "Aggregation failed");
                    self.state.fail(e.to_string());
                }
            },
            Err(e) => {
                error!(error = %e, "Feed fetch failed");
                self.state.fail(e.to_string());
            }
        }
    }
}
