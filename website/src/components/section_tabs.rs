use dsa_core::SectionInfo;
use leptos::prelude::*;

/// Horizontal tab strip for a page's sections
#[component]
pub fn SectionTabs(
    sections: Vec<SectionInfo>,
    #[prop(into)] active: Signal<&'static str>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <nav class="flex flex-wrap gap-2 border-b border-slate-800 pb-4 mb-10">
            {sections
                .into_iter()
                .map(|info| {
                    let class = move || {
                        if active.get() == info.id {
                            "px-4 py-2 rounded-full text-sm font-medium bg-cyan-500 text-slate-950"
                        } else {
                            "px-4 py-2 rounded-full text-sm font-medium bg-slate-900 text-slate-400 border border-slate-800 hover:text-white hover:border-slate-700 transition-colors"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| on_select.run(info.id)>
                            {info.label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
