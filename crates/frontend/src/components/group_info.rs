use dioxus::prelude::*;
use scoutmap_shared::links::{mailto_href, map_search_url, social_href, tel_href};
use scoutmap_shared::models::GroupRecord;

use crate::state::Action;

/// The social links a record actually provides, as (label, url) pairs.
fn social_links(group: &GroupRecord) -> Vec<(&'static str, String)> {
    let mut links = Vec::new();
    if let Some(url) = social_href(group.instagram.as_deref()) {
        links.push(("Instagram", url));
    }
    if let Some(url) = social_href(group.facebook.as_deref()) {
        links.push(("Facebook", url));
    }
    if let Some(url) = social_href(group.sitio_web.as_deref()) {
        links.push(("Sitio web", url));
    }
    links
}

#[component]
pub fn GroupInfo(group: GroupRecord, on_action: EventHandler<Action>) -> Element {
    let ramas = group.ramas_sorted();
    let socials = social_links(&group);
    let maps_url = map_search_url(group.latitud, group.longitud);

    rsx! {
        div { class: "group-info",
            button {
                class: "group-info-close",
                title: "Cerrar información",
                onclick: move |_| on_action.call(Action::ClearSelection),
                "✕"
            }

            h2 {
                "{group.nombre}"
                span { class: "group-info-id", "#{group.id}" }
            }

            div { class: "group-info-rows",
                if !group.direccion.is_empty() {
                    div { class: "group-info-row",
                        span { class: "label", "Dirección" }
                        span { "{group.direccion}, {group.ciudad}" }
                    }
                }
                if !group.horarios.is_empty() {
                    div { class: "group-info-row",
                        span { class: "label", "Horarios" }
                        span { "{group.horarios}" }
                    }
                }
                if !group.telefono.is_empty() {
                    div { class: "group-info-row",
                        span { class: "label", "Teléfono" }
                        a { href: tel_href(&group.telefono), "{group.telefono}" }
                    }
                }
                if !group.email.is_empty() {
                    div { class: "group-info-row",
                        span { class: "label", "Correo" }
                        a { href: mailto_href(&group.email), "{group.email}" }
                    }
                }
            }

            if !ramas.is_empty() {
                div { class: "group-info-ramas",
                    span { class: "label", "Ramas" }
                    for rama in ramas {
                        span { key: "{rama}", class: "rama-badge", "{rama}" }
                    }
                }
            }

            div { class: "group-info-links",
                a {
                    class: "map-link",
                    href: maps_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Cómo llegar"
                }
                for (label, url) in socials {
                    a {
                        key: "{label}",
                        href: url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{label}"
                    }
                }
            }
        }
    }
}
