#[cfg(feature = "thread_safe")]
mod thread_safe {
    use alloc::boxed::Box;
    use core::any::Any;

    pub trait SendSafety: Send {}
    pub trait SyncSafety: Sync {}

    impl<T: Send> SendSafety for T {}
    impl<T: Sync> SyncSafety for T {}

    pub type AnyThreadSafety = dyn Any + Send + Sync;
    pub type BoxAnyThreadSafety = Box<AnyThreadSafety>;
}

#[cfg(not(feature = "thread_safe"))]
mod thread_unsafe {
    use alloc::boxed::Box;
    use core::any::Any;

    pub trait SendSafety {}
    pub trait SyncSafety {}

    impl<T> SendSafety for T {}
    impl<T> SyncSafety for T {}

    pub type AnyThreadSafety = dyn Any;
    pub type BoxAnyThreadSafety = Box<AnyThreadSafety>;
}

#[cfg(feature = "thread_safe")]
pub use thread_safe::{AnyThreadSafety, BoxAnyThreadSafety, SendSafety, SyncSafety};

#[cfg(not(feature = "thread_safe"))]
pub use thread_unsafe::{AnyThreadSafety, BoxAnyThreadSafety, SendSafety, SyncSafety};
