//! View Tree Component
//!
//! Turns a `ViewNode` tree into DOM. Nodes that carry an action become
//! buttons (or the search input) that dispatch it to the global state.

use leptos::*;
use trendwave::view::{Action, NodeKind, ViewNode};

use super::chart::ChartCanvas;
use super::style::{class_for, inline_style, resolve_color};
use crate::state::global::GlobalState;

/// Render a view tree
#[component]
pub fn NodeView(node: ViewNode) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    render_node(&node, &state)
}

fn render_children(node: &ViewNode, state: &GlobalState) -> Vec<View> {
    node.children
        .iter()
        .map(|child| render_node(child, state))
        .collect()
}

fn render_node(node: &ViewNode, state: &GlobalState) -> View {
    let class = class_for(node);
    let style = inline_style(node);
    let text = node.text.clone();

    match node.kind {
        NodeKind::Icon => {
            let glyph = node.get_attr("glyph").unwrap_or_default().to_string();
            let name = node.get_attr("name").unwrap_or_default().to_string();
            view! { <span class=class title=name aria-hidden="true">{glyph}</span> }.into_view()
        }

        NodeKind::Title => view! { <h1 class=class>{text}</h1> }.into_view(),
        NodeKind::Heading => view! { <h3 class=class>{text}{render_children(node, state)}</h3> }.into_view(),
        NodeKind::Subtitle | NodeKind::Caption => view! { <p class=class>{text}</p> }.into_view(),
        NodeKind::Text | NodeKind::Trend | NodeKind::Tooltip | NodeKind::Brand => {
            view! { <span class=class style=style>{render_children(node, state)}{text}</span> }
                .into_view()
        }

        NodeKind::SearchBox => {
            let value = node.get_attr("value").unwrap_or_default().to_string();
            let placeholder = node.get_attr("placeholder").unwrap_or_default().to_string();
            let children = render_children(node, state);
            let state = state.clone();
            view! {
                <label class=class>
                    {children}
                    <input
                        type="text"
                        class="bg-transparent outline-none text-sm w-64 placeholder-slate-500"
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| {
                            state.dispatch(Action::Search { query: event_target_value(&ev) })
                        }
                    />
                </label>
            }
            .into_view()
        }

        NodeKind::LineChart | NodeKind::BarChart | NodeKind::DonutChart => {
            // Heading, caption and legend are DOM; the plot itself is canvas
            let frame: Vec<View> = node
                .children
                .iter()
                .filter(|c| matches!(c.kind, NodeKind::Heading | NodeKind::Caption))
                .map(|c| render_node(c, state))
                .collect();
            let legend: Vec<View> = node
                .children
                .iter()
                .filter(|c| c.kind == NodeKind::Legend)
                .map(|c| render_node(c, state))
                .collect();
            view! {
                <div class=class style=style>
                    <div>{frame}</div>
                    <ChartCanvas node=node.clone() />
                    {legend}
                </div>
            }
            .into_view()
        }

        NodeKind::LegendItem => {
            let dot = format!(
                "background-color: {}",
                resolve_color(node.get_attr("color").unwrap_or_default())
            );
            view! {
                <div class=class>
                    <span class="w-3 h-3 rounded-full" style=dot />
                    {render_children(node, state)}
                </div>
            }
            .into_view()
        }

        NodeKind::ProgressBar => view! {
            <div class="h-2 w-full rounded-full bg-slate-800 overflow-hidden">
                <div class=class style=style />
            </div>
        }
        .into_view(),

        _ => match node.action.clone() {
            Some(action) => {
                let children = render_children(node, state);
                let state = state.clone();
                view! {
                    <button
                        class=class
                        style=style
                        on:click=move |_| state.dispatch(action.clone())
                    >
                        {children}
                        {text}
                    </button>
                }
                .into_view()
            }
            None if node.kind == NodeKind::Button => view! {
                <button class=class style=style>
                    {render_children(node, state)}
                    {text}
                </button>
            }
            .into_view(),
            None => view! {
                <div class=class style=style>
                    {text}
                    {render_children(node, state)}
                </div>
            }
            .into_view(),
        },
    }
}
