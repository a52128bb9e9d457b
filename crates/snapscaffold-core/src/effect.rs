//! Keyed effects with structured cancellation.

use std::cell::Cell;
use std::rc::Rc;

/// Cancellation handle for a unit of long-running work.
///
/// Work scoped to a job checks [`Job::is_active`] before each step; once
/// cancelled a job never becomes active again.
#[derive(Clone, Debug, Default)]
pub struct Job {
    cancelled: Rc<Cell<bool>>,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled.get()
    }

    /// Creates a job that is cancelled together with this one.
    pub fn child(&self) -> ChildJob {
        ChildJob {
            parent: self.clone(),
            own: Job::new(),
        }
    }
}

/// A job nested in a parent scope.
#[derive(Clone, Debug)]
pub struct ChildJob {
    parent: Job,
    own: Job,
}

impl ChildJob {
    pub fn cancel(&self) {
        self.own.cancel();
    }

    pub fn is_active(&self) -> bool {
        self.parent.is_active() && self.own.is_active()
    }
}

/// Outcome of [`KeyedEffect::ensure`].
#[derive(Clone, Debug)]
pub enum EffectRestart {
    /// The key is unchanged; the running job continues.
    Unchanged,
    /// The key changed (or this is the first run); the previous job was
    /// cancelled and this is the new scope.
    Restarted(Job),
}

/// An effect scope that restarts whenever its key changes.
///
/// Restarting cancels the previous [`Job`] before the new one is handed out,
/// so nothing launched under the old key can keep running.
#[derive(Debug)]
pub struct KeyedEffect<K> {
    key: Option<K>,
    job: Job,
}

impl<K: PartialEq> KeyedEffect<K> {
    pub fn new() -> Self {
        Self {
            key: None,
            job: Job::new(),
        }
    }

    pub fn ensure(&mut self, key: K) -> EffectRestart {
        if self.key.as_ref() == Some(&key) {
            return EffectRestart::Unchanged;
        }
        if self.key.is_some() {
            log::trace!("keyed effect restarted; previous job cancelled");
        }
        self.job.cancel();
        self.job = Job::new();
        self.key = Some(key);
        EffectRestart::Restarted(self.job.clone())
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Cancels the current scope; the next `ensure` restarts regardless of key.
    pub fn dispose(&mut self) {
        self.job.cancel();
        self.key = None;
    }
}

impl<K: PartialEq> Default for KeyedEffect<K> {
    fn default() -> Self {
        Self::new()
    }
}
