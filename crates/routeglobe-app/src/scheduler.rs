//! Foreground scheduler driving the feed and the highlight engine.
//!
//! Single-writer by construction: the scheduler task owns the feed, the
//! engine, and the display sink. Fetches run as spawned tasks and report
//! back over a channel with a generation number; a completion that is not
//! the latest issued fetch is discarded, so overlapping refreshes cannot
//! clobber a newer result.

use crate::display::DisplaySink;
use routeglobe_core::{FlightRecord, HighlightEngine};
use routeglobe_feed::{FeedError, FlightFeed};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// User-triggered actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Refresh { limit: u32 },
    Quit,
}

type FetchOutcome = (u64, Result<Vec<FlightRecord>, FeedError>);

pub struct Scheduler {
    feed: FlightFeed,
    engine: HighlightEngine,
    display: Box<dyn DisplaySink>,
    tick_interval: Duration,
    fetch_generation: u64,
}

impl Scheduler {
    pub fn new(
        feed: FlightFeed,
        engine: HighlightEngine,
        display: Box<dyn DisplaySink>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            feed,
            engine,
            display,
            tick_interval,
            fetch_generation: 0,
        }
    }

    /// Run until the command channel closes or a `Quit` arrives.
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        let mut ticker = interval(self.tick_interval);
        let (results_tx, mut results_rx) = mpsc::channel::<FetchOutcome>(4);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.apply_current_route(),
                command = commands.recv() => match command {
                    None | Some(Command::Quit) => break,
                    Some(command) => self.handle_command(command, &results_tx),
                },
                Some((generation, outcome)) = results_rx.recv() => {
                    self.complete_fetch(generation, outcome);
                }
            }
        }

        tracing::info!("scheduler shutting down");
    }

    /// One observation cycle: read the current route, drive the engine.
    fn apply_current_route(&mut self) {
        let route = self.feed.current_route();
        self.engine.apply(&route);
    }

    fn handle_command(&mut self, command: Command, results: &mpsc::Sender<FetchOutcome>) {
        match command {
            Command::Next => {
                self.feed.next();
                self.apply_current_route();
                self.show_current();
            }
            Command::Previous => {
                self.feed.previous();
                self.apply_current_route();
                self.show_current();
            }
            Command::Refresh { limit } => self.begin_fetch(limit, results),
            Command::Quit => {}
        }
    }

    /// Issue a fetch without blocking the tick. The prior flight set keeps
    /// serving reads until the replacement lands.
    fn begin_fetch(&mut self, limit: u32, results: &mpsc::Sender<FetchOutcome>) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        let client = self.feed.client().clone();
        let results = results.clone();

        tracing::info!(limit, generation, "flight refresh started");
        tokio::spawn(async move {
            let outcome = client.fetch_flights(limit).await;
            let _ = results.send((generation, outcome)).await;
        });
    }

    /// Resume a finished fetch on the scheduler thread. Stale generations
    /// (a newer fetch was issued meanwhile) are dropped without touching
    /// state; errors are surfaced to the display and likewise leave the
    /// feed untouched.
    fn complete_fetch(&mut self, generation: u64, outcome: Result<Vec<FlightRecord>, FeedError>) {
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                latest = self.fetch_generation,
                "discarding superseded fetch"
            );
            return;
        }

        match outcome.and_then(|records| self.feed.accept(records)) {
            Ok(count) => {
                tracing::info!(count, "flight refresh complete");
                self.apply_current_route();
                self.show_current();
            }
            Err(err) => {
                tracing::warn!("flight refresh failed: {err}");
                self.display.show_message(&format!("Flight refresh failed: {err}"));
            }
        }
    }

    fn show_current(&self) {
        if let Some(summary) = self.feed.summary() {
            self.display.show_flight(&summary);
        }
    }
}
