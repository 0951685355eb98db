use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-grid">
                    <img
                        src="https://images.unsplash.com/photo-1611755217171-67c8e51055ac"
                        alt="Artist workspace"
                        class="about-image"
                    />
                    <div class="about-content">
                        <h2 class="section-title">"About the Artist"</h2>
                        <p class="about-text">
                            "Welcome to my world of art! I'm passionate about creating realistic pencil portraits that capture "
                            "the essence and emotion of my subjects. With years of experience in traditional and contemporary art, "
                            "I specialize in detailed pencil drawings that bring memories to life."
                        </p>
                        <p class="about-text">
                            "My work ranges from celebrity portraits and family commissions to traditional Indian classical dance art. "
                            "Each piece is carefully crafted with attention to detail, ensuring that every drawing tells a unique story."
                        </p>
                        <div class="about-stats">
                            <Stat value="50+" label="Commissions Completed" />
                            <Stat value="5+" label="Years Experience" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="about-stat">
            <h3 class="about-stat-value gold-gradient">{value}</h3>
            <p class="about-stat-label">{label}</p>
        </div>
    }
}
