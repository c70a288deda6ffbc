#![deny(unsafe_op_in_unsafe_fn)]

// not concurrent
pub mod non_concurrent;

// records that usually end up in the containers
pub mod animal;

pub use non_concurrent::{ContainerError, Deque, DoubleLinkedList};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    use simplelog::*;
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // another logger being installed first is fine
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
}
