//! Platform services the runtime delegates to its host.

/// Monotonic millisecond clock used for click timing and event timestamps.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}
