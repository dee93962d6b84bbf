//! Static content blocks of a section

use dsa_core::{Block, CalloutKind};
use leptos::prelude::*;

use super::code_block::CodeBlock;
use super::problem_card::ProblemCard;

fn callout_class(kind: CalloutKind) -> &'static str {
    match kind {
        CalloutKind::Tip => "border-l-4 border-green-500 bg-green-900/20 text-green-100 px-4 py-3 rounded-r-lg",
        CalloutKind::Note => "border-l-4 border-blue-500 bg-blue-900/20 text-blue-100 px-4 py-3 rounded-r-lg",
        CalloutKind::Warning => "border-l-4 border-yellow-500 bg-yellow-900/20 text-yellow-100 px-4 py-3 rounded-r-lg",
    }
}

#[component]
pub fn BlockView(block: Block, fallback_language: String) -> impl IntoView {
    match block {
        Block::Heading(text) => view! {
            <h2 class="text-2xl font-bold text-white mt-10 mb-4">{text}</h2>
        }
        .into_any(),
        Block::Paragraph(text) => view! {
            <p class="text-slate-300 leading-relaxed mb-4">{text}</p>
        }
        .into_any(),
        Block::Cards(cards) => view! {
            <div class="grid md:grid-cols-2 gap-4 my-6">
                {cards
                    .into_iter()
                    .map(|card| view! {
                        <div class="bg-slate-900/50 border border-slate-800 p-6 rounded-2xl hover:border-slate-700 transition-colors">
                            <div class="text-2xl mb-2">{card.icon}</div>
                            <h3 class="text-lg font-bold text-white mb-1">{card.title}</h3>
                            <p class="text-slate-400 text-sm leading-relaxed">{card.body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        Block::List {
            title,
            items,
            ordered,
        } => {
            let items = items
                .into_iter()
                .map(|item| view! { <li class="text-slate-300">{item}</li> })
                .collect_view();
            view! {
                <div class="my-4">
                    {title.map(|t| view! { <h4 class="font-semibold text-white mb-2">{t}</h4> })}
                    {if ordered {
                        view! { <ol class="list-decimal pl-6 space-y-1">{items}</ol> }.into_any()
                    } else {
                        view! { <ul class="list-disc pl-6 space-y-1">{items}</ul> }.into_any()
                    }}
                </div>
            }
            .into_any()
        }
        Block::Table { headers, rows } => view! {
            <div class="overflow-x-auto my-6">
                <table class="w-full text-sm text-left border border-slate-800">
                    <thead class="bg-slate-900 text-slate-200">
                        <tr>
                            {headers
                                .into_iter()
                                .map(|h| view! { <th class="px-4 py-2 border-b border-slate-800">{h}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr class="border-b border-slate-800/60">
                                    {row
                                        .into_iter()
                                        .map(|cell| view! { <td class="px-4 py-2 text-slate-300">{cell}</td> })
                                        .collect_view()}
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
        Block::Callout { kind, text } => view! {
            <div class=format!("{} my-4", callout_class(kind))>
                <span class="font-semibold">{kind.label()}": "</span>
                {text}
            </div>
        }
        .into_any(),
        Block::Code { language, code } => view! {
            <CodeBlock code=Signal::stored(code) language=language.to_string() />
        }
        .into_any(),
        Block::Problem(entry) => view! {
            <ProblemCard entry fallback_language />
        }
        .into_any(),
    }
}
