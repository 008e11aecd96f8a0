//! Toast notifications.
//!
//! A context-provided queue; each toast dismisses itself after three
//! seconds, or earlier on click.

use std::time::Duration;

use leptos::*;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue handle stored in context; cheap to copy into callbacks.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.retain(|toast| toast.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.queue.update(|queue| queue.push(Toast { id, level, message }));

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_DURATION);
    }
}

/// Grab the toast queue from context.
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Provides the queue and renders the stack above `children`.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts {
        queue: create_rw_signal(Vec::new()),
        next_id: create_rw_signal(0),
    };
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-stack">
            <For
                each=move || toasts.queue.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(toast.id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
