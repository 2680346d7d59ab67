use futures::future::AbortRegistration;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ApiConfig;
use crate::member_count::{load_joined_count, FetchLifecycle, JoinedCount};

/// Live "members already joined" counter.
///
/// Fetches the count once when mounted, the request is cancelled when the
/// component is unmounted before it completes.
#[component]
pub fn MemberCount(#[prop(into, optional)] class: String) -> impl IntoView {
    let (joined, set_joined) = signal(JoinedCount::default());

    let registration = cancel_on_cleanup();
    spawn_local(async move {
        let client = reqwest::Client::new();
        let fetched = load_joined_count(&client, &ApiConfig::BUILD, registration).await;
        set_joined.maybe_update(|joined| joined.apply(fetched));
    });

    let rounded = Memo::new(move |_| joined.get().display_value());

    view! {
        <p class=class aria-live="polite" aria-atomic="true">
            {move || members_joined_label(rounded.get())}
        </p>
    }
}

/// Starts a fetch lifecycle owned by the current reactive owner, which
/// cancels it once the owner is cleaned up.
fn cancel_on_cleanup() -> AbortRegistration {
    let (lifecycle, registration) = FetchLifecycle::new();
    on_cleanup(move || lifecycle.cancel());
    registration
}

fn members_joined_label(rounded: f64) -> String {
    format!("{rounded:.0}+ members already joined")
}
