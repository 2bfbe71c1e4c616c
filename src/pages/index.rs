//! Public landing page composing the marketing sections.

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero_section::HeroSection;
use crate::components::how_it_works_section::HowItWorksSection;
use crate::components::prizes_section::PrizesSection;
use crate::components::ranking_section::RankingSection;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Header/>
            <main class="landing__main">
                <HeroSection/>
                <HowItWorksSection/>
                <PrizesSection/>
                <RankingSection/>
                <AboutSection/>
            </main>
            <Footer/>
        </div>
    }
}
