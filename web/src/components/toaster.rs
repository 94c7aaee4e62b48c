//! Toast notifications, stacked in the top-right corner.

use leptos::prelude::*;

use isocert_common::notice::Notice;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Handle for pushing notices; cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    /// Show `notice`; it disappears by itself after a few seconds.
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, notice }));

        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            set_timeout(
                move || toasts.dismiss(id),
                std::time::Duration::from_secs(4),
            );
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

/// Install the toast store for the whole app.
pub fn provide_toaster() {
    provide_context(Toasts {
        items: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    });
}

pub fn use_toaster() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the active toasts; click one to dismiss it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toaster();

    view! {
        <div class="toaster" role="status">
            <For
                each=move || toasts.items.get()
                key=|t| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    let class = t.notice.css_class();
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {t.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
