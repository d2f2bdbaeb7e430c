use dioxus::prelude::*;
use scoutmap_shared::filter::{city_options, rama_options};

use crate::api;
use crate::components::filter_bar::FilterBar;
use crate::components::group_info::GroupInfo;
use crate::components::group_list::GroupList;
use crate::components::map_view::MapView;
use crate::state::{Action, Session};

#[component]
pub fn Locator() -> Element {
    let mut session = use_signal(Session::default);

    // The one load a session performs. Failure is terminal; the user
    // recovers by reloading the page.
    let _loader = use_resource(move || async move {
        match api::fetch_groups().await {
            Ok(groups) => {
                log::info!("directorio cargado: {} grupos", groups.len());
                session.write().apply(Action::DataLoaded(groups));
            }
            Err(err) => {
                log::error!("no se pudo cargar el directorio: {err}");
                session.write().apply(Action::LoadFailed(err));
            }
        }
    });

    let state = session.read().clone();
    let visible = state.visible();
    let selected = state.selected_group().cloned();
    let selected_id = selected.as_ref().map(|g| g.id);
    let cities = city_options(&state.groups);
    let ramas = rama_options(&state.groups);

    let on_action = move |action: Action| session.write().apply(action);

    rsx! {
        div { class: "app",
            if state.is_loading() {
                div { class: "loading-overlay",
                    div { class: "spinner" }
                    p { "Cargando grupos..." }
                }
            }

            if let Some(message) = state.load_error() {
                div { class: "error-banner",
                    "Error al cargar los datos: {message}"
                }
            }

            header { class: "app-header",
                h1 { "Grupos Scout del Valle del Cauca" }
                p { "Encuentra información de contacto y ubicación" }
            }

            main { class: "app-main",
                FilterBar {
                    criteria: state.criteria.clone(),
                    cities,
                    ramas,
                    result_count: visible.len(),
                    on_action,
                }

                div { class: "content-grid",
                    GroupList {
                        visible: visible.clone(),
                        selected_id,
                        on_action,
                    }

                    div { class: "map-and-detail",
                        MapView {
                            visible,
                            selected: selected.clone(),
                            on_select: move |id| session.write().apply(Action::Select(id)),
                        }

                        if let Some(group) = selected {
                            GroupInfo { group, on_action }
                        }
                    }
                }
            }

            footer { class: "app-footer",
                "Asociación Scouts de Colombia - Región Valle del Cauca"
            }
        }
    }
}
