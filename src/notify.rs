//! Toast Notifications
//!
//! Transient message surface shared via context. Every operation
//! boundary reports exactly one toast per outcome; toasts dismiss
//! themselves after a few seconds.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
pub const TOAST_DISMISS_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// Notification handle provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        let (next_id, set_next_id) = signal(0u32);
        Self {
            toasts,
            set_toasts,
            next_id,
            set_next_id,
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id.wrapping_add(1));
        self.set_toasts.update(|toasts| toasts.push(Toast { id, kind, text }));

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(TOAST_DISMISS_MS)).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
