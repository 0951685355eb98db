use leptos::prelude::*;
use super::BRAND;

/// In-page anchors, in menu order.
const LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#portfolio", "Portfolio"),
    ("#commissions", "Commissions"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    <h1 class="nav-title gold-gradient">{BRAND}</h1>
                </a>
                <div class="nav-links">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href class="nav-link">{label}</a> })
                        .collect_view()}
                </div>
                <button
                    class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    <svg class="nav-toggle-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="nav-drawer-link" on:click=move |_| set_menu_open.set(false)>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
