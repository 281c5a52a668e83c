/// Resources that must be explicitly released before being dropped.
pub trait Release {
    fn release(&mut self);
}

/// Scoped ownership of a resource bundle with at-most-once release.
///
/// `teardown` may be called from every exit path; only the first call does
/// any work.
#[derive(Debug)]
pub struct Lifecycle<R: Release> {
    inner: Option<R>,
}

impl<R: Release> Lifecycle<R> {
    pub fn new(resource: R) -> Self {
        Self {
            inner: Some(resource),
        }
    }

    /// A lifecycle with nothing to release, used when setup failed.
    pub fn empty() -> Self {
        Self { inner: None }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.inner.is_some()
    }

    pub fn get(&self) -> Option<&R> {
        self.inner.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.inner.as_mut()
    }

    /// Release and drop the resource. Returns `false` if already torn down.
    pub fn teardown(&mut self) -> bool {
        match self.inner.take() {
            Some(mut r) => {
                r.release();
                true
            }
            None => false,
        }
    }
}

impl<R: Release> Drop for Lifecycle<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// One-shot unmount callback that also runs when dropped unfired.
///
/// Handles given to the page may be freed without an explicit teardown;
/// dropping the hook still detaches everything.
pub struct TeardownHook {
    run: Option<Box<dyn FnOnce()>>,
}

impl TeardownHook {
    pub fn new(run: impl FnOnce() + 'static) -> Self {
        Self {
            run: Some(Box::new(run)),
        }
    }

    /// A hook with nothing attached, for mounts that failed early.
    pub fn inert() -> Self {
        Self { run: None }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.run.is_some()
    }

    /// Run the callback if it has not run yet. Returns whether it ran.
    pub fn fire(&mut self) -> bool {
        match self.run.take() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }
}

impl Drop for TeardownHook {
    fn drop(&mut self) {
        self.fire();
    }
}
