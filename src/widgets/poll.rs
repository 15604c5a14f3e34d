use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Cadence shared by both pollers.
pub const POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Handle to a running poller. The page lifecycle never cancels one; the
/// handle exists so a teardown path can.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Run `cycle` once immediately, then on every tick, forever. Cycles are
/// awaited in sequence: a slow fetch delays its own render and pushes the
/// next tick out rather than piling up.
pub fn spawn_poller<F, Fut>(period: Duration, mut cycle: F) -> PollerHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            cycle().await;
        }
    });
    PollerHandle { task }
}
