use dsa_content::Page;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icons::BookOpen;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center space-x-2 group">
                    <BookOpen class="w-6 h-6 text-cyan-400 group-hover:scale-110 transition-transform" />
                    <span class="font-bold text-white text-lg tracking-tight">
                        "DSA Guide"
                    </span>
                </A>

                <nav class="hidden md:flex items-center space-x-8">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            let href = format!("/{}", page.slug());
                            let target = href.clone();
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        if pathname() == target {
                                            "text-sm font-medium transition-colors text-white"
                                        } else {
                                            "text-sm font-medium transition-colors text-slate-400 hover:text-white"
                                        }
                                    }
                                >
                                    {page.title()}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
