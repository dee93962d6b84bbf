use dsa_content::Page;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::ChevronRight;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-24 pb-24">
            // Hero Section
            <section class="pt-36 px-6 text-center relative overflow-hidden">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-cyan-600/10 blur-[120px] rounded-full pointer-events-none"></div>

                <div class="relative z-10 flex flex-col items-center">
                    <h1 class="text-5xl md:text-7xl font-black text-white tracking-tight mb-6">
                        "DSA "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-purple-400">
                            "Guide"
                        </span>
                    </h1>

                    <p class="text-xl text-slate-400 max-w-2xl mx-auto mb-8 font-light leading-relaxed">
                        "Data structures and algorithms, one section at a time."
                        <br />
                        "Read the idea, try the problem, then reveal the solution."
                    </p>

                    <A
                        href="/frameworks"
                        attr:class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors flex items-center"
                    >
                        "Start Learning"
                        <ChevronRight class="w-4 h-4 ml-1" />
                    </A>
                </div>
            </section>

            // Topic Grid
            <section class="px-6 max-w-6xl mx-auto">
                <div class="grid md:grid-cols-2 gap-8">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            let sections = page.sections().len();
                            view! {
                                <A
                                    href=format!("/{}", page.slug())
                                    attr:class="block bg-slate-900/50 border border-slate-800 p-8 rounded-2xl hover:border-slate-700 transition-colors"
                                >
                                    <div class="mb-4 bg-slate-800 w-12 h-12 rounded-lg flex items-center justify-center text-2xl">
                                        {page.icon()}
                                    </div>
                                    <h3 class="text-xl font-bold text-white mb-2">{page.title()}</h3>
                                    <p class="text-slate-400 leading-relaxed">{page.tagline()}</p>
                                    <p class="text-slate-500 text-sm mt-4">{format!("{} sections", sections)}</p>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
