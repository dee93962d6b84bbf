//! Tutorial pages: a section tab strip over the active section's content

use dsa_app::config::CodeSettings;
use dsa_app::SectionRouter;
use dsa_content::{FrameworksSection, Page, RecursionSection, StringsSection, TreesSection};
use dsa_core::Section;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::block::BlockView;
use crate::components::section_tabs::SectionTabs;

/// Shared body of every tutorial page
///
/// The content is rebuilt only when the active section changes, which drops
/// every problem card of the old section along with its state.
pub fn tutorial_page<S: Section>(page: Page) -> impl IntoView {
    let router = RwSignal::new(SectionRouter::<S>::new());
    let active = Memo::new(move |_| router.with(|r| r.active()));
    let fallback_language = CodeSettings::default().fallback_language;

    let on_select = Callback::new(move |id: &'static str| {
        router.update(|r| {
            r.select_id(id);
        });
    });

    let content = move || {
        let section = active.get();
        log::debug!("Mounting {}/{}", page.slug(), section.id());
        section
            .blocks()
            .into_iter()
            .map(|block| {
                view! { <BlockView block fallback_language=fallback_language.clone() /> }
            })
            .collect_view()
    };

    view! {
        <Title text=format!("{} · DSA Guide", page.title()) />
        <div class="pt-28 pb-24 px-6 max-w-5xl mx-auto">
            <header class="mb-8">
                <h1 class="text-4xl font-black text-white tracking-tight mb-2">
                    {page.icon()}" "{page.title()}
                </h1>
                <p class="text-slate-400">{page.tagline()}</p>
            </header>
            <SectionTabs
                sections=S::infos()
                active=Signal::derive(move || active.get().id())
                on_select
            />
            <article>{content}</article>
        </div>
    }
}

#[component]
pub fn FrameworksPage() -> impl IntoView {
    tutorial_page::<FrameworksSection>(Page::Frameworks)
}

#[component]
pub fn RecursionPage() -> impl IntoView {
    tutorial_page::<RecursionSection>(Page::Recursion)
}

#[component]
pub fn StringsPage() -> impl IntoView {
    tutorial_page::<StringsSection>(Page::Strings)
}

#[component]
pub fn TreesPage() -> impl IntoView {
    tutorial_page::<TreesSection>(Page::Trees)
}
