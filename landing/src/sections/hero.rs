use leptos::prelude::*;
use super::PRICE_RANGE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero hero-bg">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            "Creating"
                            <span class="hero-title-accent gold-gradient">"Timeless Art"</span>
                        </h1>
                        <p class="hero-description">
                            "Specializing in realistic pencil portraits, traditional Indian art, and custom commissioned pieces. "
                            "Bringing your memories to life through detailed, hand-drawn artwork."
                        </p>
                        <div class="hero-actions">
                            <a href="#portfolio" class="btn btn-primary">
                                "View Portfolio"
                            </a>
                            <a href="#commissions" class="btn btn-secondary">
                                "Commission Art"
                            </a>
                        </div>
                    </div>
                    <PriceCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PriceCard() -> impl IntoView {
    view! {
        <div class="hero-visual">
            <img
                src="https://images.unsplash.com/photo-1652203048330-572c21a9cf35"
                alt="Artist brushes"
                class="hero-image"
            />
            <div class="hero-price-card">
                <p class="hero-price-label">"Commission Range"</p>
                <p class="hero-price gold-gradient">{PRICE_RANGE}</p>
            </div>
        </div>
    }
}
