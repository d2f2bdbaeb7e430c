use dioxus::prelude::*;
use scoutmap_shared::models::GroupRecord;

use crate::state::Action;

#[component]
pub fn GroupList(
    visible: Vec<GroupRecord>,
    selected_id: Option<u32>,
    on_action: EventHandler<Action>,
) -> Element {
    rsx! {
        div { class: "group-list",
            div { class: "group-list-header",
                h3 { "Grupos Scout" }
                if selected_id.is_some() {
                    button {
                        class: "deselect",
                        title: "Deseleccionar grupo",
                        onclick: move |_| on_action.call(Action::ClearSelection),
                        "✕"
                    }
                }
            }

            div { class: "group-list-body",
                if visible.is_empty() {
                    div { class: "group-list-empty",
                        "No se encontraron grupos con los filtros actuales"
                    }
                } else {
                    for group in visible {
                        div {
                            key: "{group.id}",
                            class: if selected_id == Some(group.id) {
                                "group-row selected"
                            } else {
                                "group-row"
                            },
                            onclick: {
                                let id = group.id;
                                move |_| on_action.call(Action::Select(id))
                            },
                            div { class: "group-row-main",
                                div { class: "group-row-name",
                                    "{group.nombre}"
                                    span { class: "group-row-id", "#{group.id}" }
                                }
                                div { class: "group-row-city", "{group.ciudad}" }
                            }
                            span { class: "group-row-chevron", "›" }
                        }
                    }
                }
            }
        }
    }
}
