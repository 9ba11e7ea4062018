use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::SnapshotSource;
use crate::models::PriceSnapshot;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// only before the first cycle commits
    Loading,
    Ready(PriceSnapshot),
    Error,
}

/// What observers see: the current view and the cycle that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub view: View,
    cycle: u64,
}

/// Handle to a mounted dashboard. Dropping it tears the dashboard down.
pub struct Dashboard {
    state: watch::Receiver<Panel>,
    token: CancellationToken,
    poller: JoinHandle<()>,
}

impl Dashboard {
    /// Starts polling right away, then once per `every`
    pub fn mount<S>(source: S, every: Duration) -> Self
    where
        S: SnapshotSource + 'static,
    {
        let (tx, state) = watch::channel(Panel {
            view: View::Loading,
            cycle: 0,
        });
        let token = CancellationToken::new();
        let poller = tokio::spawn(poll(Arc::new(source), Arc::new(tx), token.clone(), every));
        Self {
            state,
            token,
            poller,
        }
    }
    pub fn view(&self) -> View {
        self.state.borrow().view.clone()
    }
    pub fn subscribe(&self) -> watch::Receiver<Panel> {
        self.state.clone()
    }
    /// Stops scheduling cycles. Requests already in flight finish, their results are dropped.
    pub fn teardown(&self) {
        self.token.cancel();
    }
    pub fn is_torn_down(&self) -> bool {
        self.token.is_cancelled() || self.poller.is_finished()
    }
}
impl Drop for Dashboard {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn poll<S>(
    source: Arc<S>,
    tx: Arc<watch::Sender<Panel>>,
    token: CancellationToken,
    every: Duration,
) where
    S: SnapshotSource + 'static,
{
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut cycle = 0;
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                cycle += 1;
                tokio::spawn(refresh(cycle, source.clone(), tx.clone(), token.clone()));
            }
        }
    }
    tracing::debug!("dashboard polling stopped after {cycle} cycles");
}

async fn refresh<S>(
    cycle: u64,
    source: Arc<S>,
    tx: Arc<watch::Sender<Panel>>,
    token: CancellationToken,
) where
    S: SnapshotSource + 'static,
{
    let view = match source.fetch().await {
        Ok(snapshot) => View::Ready(snapshot),
        Err(e) => {
            tracing::warn!("price refresh {cycle} failed: {e}");
            View::Error
        }
    };
    let applied = tx.send_if_modified(|panel| {
        if token.is_cancelled() || panel.cycle > cycle {
            return false;
        }
        panel.cycle = cycle;
        panel.view = view;
        true
    });
    if !applied {
        tracing::debug!("discarded result of price refresh {cycle}");
    }
}
