use std::time::Duration;

use chrono::Local;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;

pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Sends the current local time once per period, starting immediately.
#[derive(Clone)]
pub struct ClockService {
    period: Duration,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    cancel_token: CancellationToken,
}

impl ClockService {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>, cancel_token: CancellationToken) -> Self {
        Self::with_period(CLOCK_PERIOD, raw_tx, cancel_token)
    }

    pub fn with_period(
        period: Duration,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            period,
            raw_tx,
            cancel_token,
        }
    }

    /// Run the ticker in a background task until cancelled or the receiver goes away.
    pub fn run(&self) -> JoinHandle<()> {
        let period = self.period;
        let raw_tx = self.raw_tx.clone();
        let cancel_token = self.cancel_token.clone();

        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        log::info!("ClockService received cancellation signal");
                        break;
                    }
                    _ = ticker.tick() => {
                        if raw_tx.send(RawMsg::ClockTick(Local::now())).is_err() {
                            break;
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn test_first_tick_is_immediate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        let service = ClockService::new(tx, token.clone());

        let _handle = service.run();
        let first = timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("tick before the first period elapses");
        assert!(matches!(first, Some(RawMsg::ClockTick(_))));

        token.cancel();
    }

    #[tokio::test]
    async fn test_ticks_repeat_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        let service = ClockService::with_period(Duration::from_millis(10), tx, token.clone());

        let handle = service.run();
        for _ in 0..3 {
            let tick = timeout(Duration::from_millis(500), rx.recv()).await;
            assert!(matches!(tick, Ok(Some(RawMsg::ClockTick(_)))));
        }

        token.cancel();
        timeout(Duration::from_millis(500), handle)
            .await
            .expect("task stops")
            .expect("task did not panic");
    }
}
