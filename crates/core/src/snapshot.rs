use crate::queue::NextQueue;
use crate::stack::HoldStack;

/// Full value copy of the queue and the reserve, indices included.
///
/// Restoring a snapshot reproduces the captured state exactly: same pieces in
/// the same slots with the same `head`, `tail` and lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub queue: NextQueue,
    pub stack: HoldStack,
}

impl SessionSnapshot {
    pub fn capture(queue: &NextQueue, stack: &HoldStack) -> Self {
        Self {
            queue: queue.clone(),
            stack: stack.clone(),
        }
    }

    /// Overwrite live state with this snapshot
    pub fn restore_into(self, queue: &mut NextQueue, stack: &mut HoldStack) {
        *queue = self.queue;
        *stack = self.stack;
    }
}
