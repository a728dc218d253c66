//! Todo Footer Component

use leptos::prelude::*;

use crate::display;
use crate::store::{use_app_store, AppStateStoreFields};

/// Item and completion counts
#[component]
pub fn TodoFooter() -> impl IntoView {
    let store = use_app_store();

    view! {
        <p class="item-count">{move || display::summary(store.session().read().todos())}</p>
    }
}
