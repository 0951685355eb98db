use artzybear_commissions::portfolio::{CATALOG, CategoryFilter, PortfolioItem, visible_items};
use leptos::prelude::*;

#[component]
pub fn Portfolio() -> impl IntoView {
    let (filter, set_filter) = signal(CategoryFilter::default());
    let visible = Memo::new(move |_| visible_items(CATALOG, filter.get()));

    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Portfolio"</h2>
                    <p class="section-description">
                        "Explore my collection of realistic pencil portraits, traditional Indian art, and custom commissioned pieces"
                    </p>
                </div>

                // Category tabs
                <div class="portfolio-tabs">
                    {CategoryFilter::tabs()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || if filter.get() == tab { "portfolio-tab active" } else { "portfolio-tab" }
                                    on:click=move |_| set_filter.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="portfolio-grid">
                    <For
                        each=move || visible.get()
                        key=|item| item.title
                        children=|item| view! { <PortfolioCard item=item /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <div class="portfolio-item">
            <img src=item.image alt=item.title class="portfolio-image" />
            <div class="portfolio-overlay">
                <h3 class="portfolio-title">{item.title}</h3>
                <p class="portfolio-category">{item.category.id()}</p>
            </div>
        </div>
    }
}
