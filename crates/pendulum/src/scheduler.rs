//! Frame scheduling.
//!
//! The simulation never loops on its own. After each tick it asks a
//! [`FrameScheduler`] for another frame, and the host calls
//! [`Simulation::tick`](crate::Simulation::tick) when that frame fires. In a
//! browser the scheduler wraps `requestAnimationFrame`; in tests and
//! terminal hosts it is a [`FrameQueue`] pumped synchronously.

use alloc::collections::VecDeque;

/// Identifies one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Something that can call the simulation back on the next display refresh.
pub trait FrameScheduler {
    /// Requests one callback and returns its handle, or `None` if the host
    /// could not schedule one.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancels a previously requested callback.
    ///
    /// Cancelling a frame that already fired or was never requested is a
    /// no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }
}

/// A synchronous scheduler: requested frames wait in a queue until the
/// host pops them with [`FrameQueue::next_frame`].
///
/// # Example
///
/// ```rust
/// use pendulum::{FrameQueue, FrameScheduler};
///
/// let mut queue = FrameQueue::new();
/// let a = queue.request_frame().unwrap();
/// let b = queue.request_frame().unwrap();
/// queue.cancel_frame(a);
///
/// assert_eq!(queue.next_frame(), Some(b));
/// assert_eq!(queue.next_frame(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl FrameQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops the oldest pending frame.
    pub fn next_frame(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    /// Number of frames waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether no frame is waiting.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total frames ever requested.
    pub fn requested_total(&self) -> u64 {
        self.requested
    }

    /// Total frames cancelled while still pending.
    pub fn cancelled_total(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}
