use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm">
                <p>"\u{00A9} 2026 DSA Guide Contributors. BSL 1.1 License."</p>
                <p class="mt-4 md:mt-0">
                    "Also in your terminal: "
                    <code class="text-slate-300">"dsa-guide strings"</code>
                </p>
            </div>
        </footer>
    }
}
