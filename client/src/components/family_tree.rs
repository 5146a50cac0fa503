//! Recursive, collapsible ancestry tree.
//!
//! Each node collapses independently. Missing parents render as a
//! placeholder row and are never expanded further.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::HorseFamily;
use crate::util::date::format_display_date;

/// Root of a rendered family tree.
#[component]
pub fn FamilyTree(tree: HorseFamily, on_delete: Callback<HorseFamily>) -> impl IntoView {
    view! {
        <ul class="family-tree">
            <FamilyTreeNode node=tree on_delete=on_delete/>
        </ul>
    }
}

#[component]
fn FamilyTreeNode(node: HorseFamily, on_delete: Callback<HorseFamily>) -> impl IntoView {
    let collapsed = RwSignal::new(false);
    let has_parents = !node.is_leaf();
    let href = format!("/horses/{}", node.id);
    let born = format_display_date(node.date_of_birth);
    let name = node.name.clone();
    let mother = node.mother.clone();
    let father = node.father.clone();

    view! {
        <li class="family-tree__node">
            <div class="family-tree__row">
                {has_parents
                    .then(move || {
                        view! {
                            <button
                                type="button"
                                class="family-tree__toggle"
                                title="Collapse or expand"
                                on:click=move |_| collapsed.update(|c| *c = !*c)
                            >
                                {move || if collapsed.get() { "▸" } else { "▾" }}
                            </button>
                        }
                    })}
                <A href=href attr:class="family-tree__name">{name}</A>
                <span class="family-tree__born">{born}</span>
                <button
                    type="button"
                    class="btn btn--danger btn--small"
                    on:click=move |_| on_delete.run(node.clone())
                >
                    "Delete"
                </button>
            </div>
            {has_parents
                .then(move || {
                    view! {
                        <Show when=move || !collapsed.get()>
                            <ul class="family-tree__parents">
                                {parent_branch("Mother", mother.clone(), on_delete)}
                                {parent_branch("Father", father.clone(), on_delete)}
                            </ul>
                        </Show>
                    }
                })}
        </li>
    }
}

fn parent_branch(role: &'static str, parent: Option<Box<HorseFamily>>, on_delete: Callback<HorseFamily>) -> AnyView {
    match parent {
        Some(parent) => view! { <FamilyTreeNode node=*parent on_delete=on_delete/> }.into_any(),
        None => view! { <li class="family-tree__unknown">{role} " unknown"</li> }.into_any(),
    }
}
