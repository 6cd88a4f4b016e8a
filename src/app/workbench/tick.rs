use super::Workbench;
use crate::kernel::Action as KernelAction;
use std::sync::mpsc;

impl Workbench {
    /// Drains background channels. Called by the main loop between input events.
    pub fn tick(&mut self) -> bool {
        self.poll_logs()
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.take() else {
            return false;
        };

        let mut changed = false;
        let mut disconnected = false;
        for _ in 0..super::MAX_LOG_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(line) => changed |= self.dispatch_kernel(KernelAction::LogLine(line)),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if !disconnected {
            self.log_rx = Some(rx);
        }
        changed
    }
}
