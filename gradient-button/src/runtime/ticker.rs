//! Background counter that drives the gradient offset

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Receiving end of the gradient counter.
///
/// The handoff holds a single slot: the ticker overwrites it every period
/// and the frame loop picks up whatever is newest, so neither side ever
/// waits on the other.
pub struct OffsetReceiver {
    receiver: watch::Receiver<i32>,
}

impl OffsetReceiver {
    /// Latest published value, if one arrived since the previous call.
    /// Never blocks.
    pub fn try_latest(&mut self) -> Option<i32> {
        match self.receiver.has_changed() {
            Ok(true) => Some(*self.receiver.borrow_and_update()),
            // Nothing new, or the ticker has stopped
            _ => None,
        }
    }
}

/// Publishing end of the gradient counter
pub struct OffsetSender {
    sender: watch::Sender<i32>,
}

impl OffsetSender {
    /// Overwrite the slot with `value`
    pub fn publish(&self, value: i32) {
        self.sender.send_replace(value);
    }

    /// `true` once the receiver is gone
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Single-slot channel starting at `initial`. The initial value counts as
/// already seen.
pub fn offset_channel(initial: i32) -> (OffsetSender, OffsetReceiver) {
    let (sender, receiver) = watch::channel(initial);
    (OffsetSender { sender }, OffsetReceiver { receiver })
}

/// Ticks once per `period`, publishing `previous + 1` each time
pub struct GradientTicker;

impl GradientTicker {
    /// Start ticking on `handle`. The task ends on its own once the
    /// returned receiver is dropped.
    pub fn spawn(handle: &Handle, period: Duration) -> OffsetReceiver {
        let (sender, receiver) = offset_channel(0);
        handle.spawn(Self::run(sender, period));
        log::debug!("gradient ticker started ({period:?} period)");
        receiver
    }

    async fn run(sender: OffsetSender, period: Duration) {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut value: i32 = 0;
        loop {
            interval.tick().await;
            if sender.is_closed() {
                break;
            }
            value = value.wrapping_add(1);
            sender.publish(value);
        }
        log::debug!("gradient ticker stopped at {value}");
    }
}
