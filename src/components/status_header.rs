//! Status Header Component
//!
//! Title, today's date and the progress message.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::date_format::format_header_date;
use crate::models::TaskCounts;
use crate::status::StatusMessage;

#[component]
pub fn StatusHeader(counts: ReadSignal<TaskCounts>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let today = format_header_date(&ctx.clock.now());

    view! {
        <header class="status-header">
            <div class="status-title">
                <h1>"Today's Tasks"</h1>
                <p class="status-date">{today}</p>
            </div>
            <p class="status-message">
                {move || StatusMessage::from_counts(counts.get()).to_string()}
            </p>
        </header>
    }
}
