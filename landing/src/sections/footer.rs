use leptos::prelude::*;
use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© 2024 {BRAND}. All rights reserved.");
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{copyright}</p>
                <p class="footer-tagline">"Creating beautiful art, one commission at a time."</p>
            </div>
        </footer>
    }
}
