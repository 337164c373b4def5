//! Shopping Item Component
//!
//! A single row of the list: name (or inline edit field) plus its controls.

use leptos::html::Input;
use leptos::prelude::*;
use shopping_list_core::{Action, NameCell, RowView};

use crate::store::{store_dispatch, use_app_store};

/// A single item row
#[component]
pub fn ShoppingItem(row: RowView) -> impl IntoView {
    let store = use_app_store();

    let RowView { id, checked, name, edit_disabled } = row;
    let item_id = id.to_string();
    let name_class = if checked { "shopping-item shopping-item__checked" } else { "shopping-item" };

    let name_cell = match name {
        NameCell::Static(name) => name.into_any(),
        NameCell::Editing { draft } => {
            let input_ref = NodeRef::<Input>::new();
            let confirm_id = id.clone();
            // Enter submits the form, which persists the typed name
            let confirm_edit = move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                let Some(input) = input_ref.get() else { return };
                let _ = store_dispatch(
                    &store,
                    Action::ConfirmEdit { id: confirm_id.clone(), name: input.value() },
                );
            };
            view! {
                <form on:submit=confirm_edit>
                    <input
                        type="text"
                        name="edit-name"
                        class="edit-name"
                        value=draft
                        node_ref=input_ref
                    />
                </form>
            }
            .into_any()
        }
    };

    let toggle_id = id.clone();
    let delete_id = id.clone();
    let edit_id = id;

    view! {
        <li data-item-id=item_id>
            <span class=name_class>
                {name_cell}
            </span>
            <div class="shopping-item-controls">
                <button
                    class="shopping-item-toggle"
                    on:click=move |_| {
                        let _ = store_dispatch(&store, Action::Toggle(toggle_id.clone()));
                    }
                >
                    <span class="button-label">"check"</span>
                </button>
                <button
                    class="shopping-item-delete"
                    on:click=move |_| {
                        let _ = store_dispatch(&store, Action::Delete(delete_id.clone()));
                    }
                >
                    <span class="button-label">"delete"</span>
                </button>
                <button
                    class="shopping-item-edit"
                    disabled=edit_disabled
                    on:click=move |_| {
                        let _ = store_dispatch(&store, Action::Edit(edit_id.clone()));
                    }
                >
                    <span class="button-label">"edit"</span>
                </button>
            </div>
        </li>
    }
}
