//! A problem with its collapsible solution panel
//!
//! Each card owns a `ProblemView`. When the section changes the card is
//! dropped with it, so revealing, tab and language choices start fresh.

use dsa_app::{ProblemView, SolutionPanel, SolutionTab, SolutionTabs};
use dsa_core::ProblemEntry;
use leptos::prelude::*;

use super::badge::DifficultyBadge;
use super::code_block::CodeBlock;
use super::icons::{ChevronDown, ChevronRight};

/// What the panel needs to render, copied out of the `ProblemView`
#[derive(Debug, Clone, PartialEq)]
struct PanelData {
    tabs: SolutionTabs,
    languages: Vec<String>,
    language: String,
    switchable: bool,
}

impl From<&SolutionPanel> for PanelData {
    fn from(panel: &SolutionPanel) -> Self {
        Self {
            tabs: panel.tabs,
            languages: panel.code.languages().into_iter().map(str::to_string).collect(),
            language: panel.code.active_language().unwrap_or_default().to_string(),
            switchable: panel.code.is_switchable(),
        }
    }
}

#[component]
pub fn ProblemCard(entry: ProblemEntry, fallback_language: String) -> impl IntoView {
    let title = entry.title;
    let difficulty = entry.difficulty;
    let description = entry.description;
    let problem = RwSignal::new(ProblemView::new(entry, fallback_language));

    let revealed = move || problem.with(|p| p.is_revealed());
    let toggle = move |_| {
        problem.update(|p| {
            p.toggle();
        });
    };

    view! {
        <div class="bg-slate-900/50 border border-slate-800 rounded-2xl p-6 my-6">
            <div class="flex items-center justify-between gap-4 mb-2">
                <h3 class="text-xl font-bold text-white">{title}</h3>
                <DifficultyBadge difficulty />
            </div>
            <p class="text-slate-400 leading-relaxed mb-4">{description}</p>
            <button
                on:click=toggle
                class="flex items-center text-sm font-medium text-cyan-400 hover:text-cyan-300 transition-colors"
            >
                {move || {
                    if revealed() {
                        view! { <ChevronDown class="w-4 h-4 mr-1" /> "Hide Solution" }.into_any()
                    } else {
                        view! { <ChevronRight class="w-4 h-4 mr-1" /> "Show Solution" }.into_any()
                    }
                }}
            </button>
            <Show when=revealed>
                <SolutionPanelView problem />
            </Show>
        </div>
    }
}

#[component]
fn SolutionPanelView(problem: RwSignal<ProblemView>) -> impl IntoView {
    let panel = Memo::new(move |_| problem.with(|p| p.panel().map(PanelData::from)));
    let tab = move || problem.with(|p| p.active_tab().unwrap_or_default());

    let tab_bar = move || {
        let data = panel.get()?;
        if !data.tabs.shows_tab_bar() {
            return None;
        }
        let buttons = data
            .tabs
            .tabs()
            .into_iter()
            .map(|t| {
                let class = move || {
                    if tab() == t {
                        "px-3 py-1 text-sm rounded-md bg-slate-700 text-white"
                    } else {
                        "px-3 py-1 text-sm rounded-md text-slate-400 hover:text-white"
                    }
                };
                view! {
                    <button
                        class=class
                        on:click=move |_| problem.update(|p| {
                            p.select_tab(t);
                        })
                    >
                        {t.label()}
                    </button>
                }
            })
            .collect_view();
        Some(view! { <div class="flex gap-2 mt-4">{buttons}</div> })
    };

    view! {
        <div class="mt-4 border-t border-slate-800 pt-2">
            {tab_bar}
            {move || match tab() {
                SolutionTab::Solution => view! { <SolutionTabView problem panel /> }.into_any(),
                SolutionTab::Approach => view! { <ApproachTabView problem /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SolutionTabView(problem: RwSignal<ProblemView>, panel: Memo<Option<PanelData>>) -> impl IntoView {
    let code = Signal::derive(move || {
        problem.with(|p| p.panel().map(|panel| panel.code.current_text()).unwrap_or_default())
    });
    let language = Signal::derive(move || panel.get().map(|d| d.language).unwrap_or_default());
    let explanation = problem.with_untracked(|p| p.entry().explanation);

    let selector = move || {
        let data = panel.get()?;
        if !data.switchable {
            return None;
        }
        let buttons = data
            .languages
            .into_iter()
            .map(|label| {
                let selected = label == data.language;
                let class = if selected {
                    "px-3 py-1 text-xs font-mono rounded-md bg-cyan-500 text-slate-950"
                } else {
                    "px-3 py-1 text-xs font-mono rounded-md bg-slate-800 text-slate-400 hover:text-white"
                };
                let target = label.clone();
                view! {
                    <button
                        class=class
                        on:click=move |_| problem.update(|p| {
                            p.select_language(&target);
                        })
                    >
                        {label}
                    </button>
                }
            })
            .collect_view();
        Some(view! { <div class="flex gap-2 mt-4">{buttons}</div> })
    };

    view! {
        {selector}
        <CodeBlock code language />
        {(!explanation.is_empty()).then(|| view! {
            <p class="text-slate-300 leading-relaxed">{explanation}</p>
        })}
    }
}

#[component]
fn ApproachTabView(problem: RwSignal<ProblemView>) -> impl IntoView {
    let approach = problem.with_untracked(|p| p.entry().approach.clone());

    approach.map(|approach| {
        view! {
            <div class="mt-4 space-y-4">
                <ol class="list-decimal pl-6 space-y-2 text-slate-300">
                    {approach
                        .steps
                        .into_iter()
                        .map(|step| view! { <li>{step}</li> })
                        .collect_view()}
                </ol>
                <div class="flex gap-6 text-sm">
                    <span class="text-slate-400">"Time: "<code class="text-white">{approach.time}</code></span>
                    <span class="text-slate-400">"Space: "<code class="text-white">{approach.space}</code></span>
                </div>
            </div>
        }
    })
}
