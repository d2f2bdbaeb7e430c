use dioxus::prelude::*;
use scoutmap_shared::filter::{FilterCriteria, ALL_CITIES};

use crate::state::Action;

#[component]
pub fn FilterBar(
    criteria: FilterCriteria,
    cities: Vec<String>,
    ramas: Vec<String>,
    result_count: usize,
    on_action: EventHandler<Action>,
) -> Element {
    let mut show_ramas = use_signal(|| false);

    let has_active_ramas = criteria.has_active_ramas();
    let active_count = criteria.active_rama_count();
    let any_filter = !criteria.is_default();
    let result_label = if result_count == 1 {
        "grupo encontrado"
    } else {
        "grupos encontrados"
    };

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-controls",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Buscar por nombre o número...",
                    value: "{criteria.search_term}",
                    oninput: move |evt: Event<FormData>| {
                        on_action.call(Action::SetSearchTerm(evt.value().to_string()));
                    },
                }

                select {
                    class: "city-select",
                    "aria-label": "Filtrar por ciudad",
                    value: "{criteria.selected_city}",
                    onchange: move |evt: Event<FormData>| {
                        on_action.call(Action::SetCity(evt.value().to_string()));
                    },
                    option { value: "", "Todas las ciudades" }
                    for city in cities.iter().filter(|c| c.as_str() != ALL_CITIES) {
                        option {
                            value: "{city}",
                            selected: criteria.selected_city == *city,
                            "{city}"
                        }
                    }
                }

                button {
                    class: if has_active_ramas { "ramas-toggle active" } else { "ramas-toggle" },
                    onclick: move |_| {
                        let showing = *show_ramas.read();
                        show_ramas.set(!showing);
                    },
                    "Ramas"
                    if has_active_ramas {
                        span { class: "ramas-count", "{active_count}" }
                    }
                }
            }

            if *show_ramas.read() {
                div { class: "ramas-panel",
                    div { class: "ramas-panel-header",
                        h3 { "Filtrar por ramas" }
                        button {
                            class: "link-button",
                            disabled: !has_active_ramas,
                            onclick: move |_| on_action.call(Action::ClearRamas),
                            "Limpiar ramas"
                        }
                    }
                    div { class: "ramas-checkboxes",
                        for rama in ramas {
                            label { key: "{rama}", class: "rama-option",
                                input {
                                    r#type: "checkbox",
                                    checked: criteria.active_ramas.get(&rama).copied().unwrap_or(false),
                                    onchange: {
                                        let rama = rama.clone();
                                        move |_| on_action.call(Action::ToggleRama(rama.clone()))
                                    },
                                }
                                span { "{rama}" }
                            }
                        }
                    }
                }
            }

            div { class: "filter-summary",
                p { class: "result-count", "{result_count} {result_label}" }
                if any_filter {
                    button {
                        class: "link-button",
                        onclick: move |_| on_action.call(Action::ClearFilters),
                        "Limpiar todos los filtros"
                    }
                }
            }
        }
    }
}
