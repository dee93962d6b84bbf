pub mod components;
pub mod pages;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::home::Home;
use pages::tutorial::{FrameworksPage, RecursionPage, StringsPage, TreesPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="DSA Guide" />
        <Router>
            <ScrollToTop />
            <div class="min-h-screen bg-slate-950 text-slate-200 selection:bg-cyan-500/30 font-sans flex flex-col">
                <Navbar />
                <main class="flex-1">
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/frameworks") view=FrameworksPage />
                        <Route path=path!("/recursion") view=RecursionPage />
                        <Route path=path!("/strings") view=StringsPage />
                        <Route path=path!("/trees") view=TreesPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
