//! Optimistic list updates for the admin managers.
//!
//! A mutation is described by a [`ListCommand`] and applied to a snapshot of
//! the list with the pure reducer [`apply`] before the store call. On success
//! the handler resyncs from the store, showing the optimistic state if that
//! read fails; on failure [`rollback`] hands back the prior snapshot so the
//! list can be re-rendered unchanged.

use crate::error::Result;

/// An item that can sit in an optimistically updated list.
pub trait Snapshot: Clone {
    type Status: Clone;

    fn key(&self) -> i64;

    fn set_active(&mut self, active: bool);

    fn set_status(&mut self, status: Self::Status);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListCommand<T: Snapshot> {
    Remove(i64),
    SetActive { id: i64, active: bool },
    SetStatus { id: i64, status: T::Status },
}

pub fn apply<T: Snapshot>(mut state: Vec<T>, command: &ListCommand<T>) -> Vec<T> {
    match command {
        ListCommand::Remove(id) => state.retain(|i| i.key() != *id),
        ListCommand::SetActive { id, active } => {
            if let Some(item) = state.iter_mut().find(|i| i.key() == *id) {
                item.set_active(*active);
            }
        }
        ListCommand::SetStatus { id, status } => {
            if let Some(item) = state.iter_mut().find(|i| i.key() == *id) {
                item.set_status(status.clone());
            }
        }
    }
    state
}

/// The state to show after `command` failed against `prior`.
pub fn rollback<T: Snapshot>(prior: Vec<T>, _failed: &ListCommand<T>) -> Vec<T> {
    prior
}

/// A command applied to a snapshot and awaiting the store's answer.
pub struct Pending<T: Snapshot> {
    prior: Vec<T>,
    command: ListCommand<T>,
    optimistic: Vec<T>,
}

impl<T: Snapshot> Pending<T> {
    pub fn new(prior: Vec<T>, command: ListCommand<T>) -> Self {
        let optimistic = apply(prior.clone(), &command);
        Self {
            prior,
            command,
            optimistic,
        }
    }

    /// The list to show once the store accepted the command: the resynced
    /// rows, or the optimistic state when the resync itself failed.
    pub fn settle(self, refreshed: Result<Vec<T>>) -> Vec<T> {
        match refreshed {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Resync failed, showing optimistic list: {e}");
                self.optimistic
            }
        }
    }

    pub fn rollback(self) -> Vec<T> {
        rollback(self.prior, &self.command)
    }
}
