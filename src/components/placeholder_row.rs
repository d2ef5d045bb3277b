//! Placeholder Row Component

use leptos::prelude::*;

/// Single full-width row for loading, empty and error states
#[component]
pub fn PlaceholderRow(
    colspan: u32,
    #[prop(into)] text: String,
) -> impl IntoView {
    let is_error = text.starts_with("Server error") || text.starts_with("Error");
    view! {
        <tr class="placeholder-row" class:error=is_error>
            <td colspan=colspan.to_string()>{text}</td>
        </tr>
    }
}
