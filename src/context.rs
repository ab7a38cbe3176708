//! Task List Context
//!
//! Shared refresh signaling provided via Leptos Context API.

use leptos::prelude::*;

/// List-view signals provided via context
///
/// Mutations never patch the local task list; they bump the reload
/// trigger and the list view re-fetches from the API.
#[derive(Clone, Copy)]
pub struct TaskListContext {
    /// Trigger to reload tasks from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the API - write
    set_reload_trigger: WriteSignal<u32>,
}

impl TaskListContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a full re-fetch of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
