use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use scoutmap_shared::geo::{LatLng, LatLngBounds};
use scoutmap_shared::models::GroupRecord;

use crate::leaflet;

const MAP_CONTAINER_ID: &str = "scout-map-container";

/// Close zoom used when centering on a selected group.
pub const SELECTED_ZOOM: f64 = 15.0;

/// Padding around a bounding-box fit, in screen pixels.
pub const FIT_PADDING_PX: f64 = 50.0;

/// Zoom cap for bounding-box fits, so a single visible group (or a
/// colocated cluster) does not over-zoom.
pub const FIT_MAX_ZOOM: f64 = 13.0;

/// Overall service region, shown when nothing is visible.
pub const DEFAULT_CENTER: LatLng = LatLng { lat: 3.8, lng: -76.5 };
pub const DEFAULT_ZOOM: f64 = 9.0;

/// Delay before applying viewport operations, letting a pending layout
/// update settle. Restarted whenever the inputs change before it fires.
pub const VIEWPORT_SETTLE_MS: u32 = 100;

// ---------------------------------------------------------------------------
// Viewport planning (pure, testable without a rendering surface)
// ---------------------------------------------------------------------------

/// What the viewport should do for a given visible set and selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportPlan {
    CenterOn { center: LatLng, zoom: f64 },
    FitBounds { bounds: LatLngBounds },
    DefaultRegion,
}

fn position(group: &GroupRecord) -> LatLng {
    LatLng {
        lat: group.latitud,
        lng: group.longitud,
    }
}

/// Decision order: a selection always wins and centers close-up; a
/// non-empty visible set fits its bounding box; an empty view falls
/// back to the service region.
pub fn plan_viewport(visible: &[GroupRecord], selected: Option<&GroupRecord>) -> ViewportPlan {
    if let Some(group) = selected {
        return ViewportPlan::CenterOn {
            center: position(group),
            zoom: SELECTED_ZOOM,
        };
    }
    let points: Vec<LatLng> = visible.iter().map(position).collect();
    match LatLngBounds::of_points(&points) {
        Some(bounds) => ViewportPlan::FitBounds { bounds },
        None => ViewportPlan::DefaultRegion,
    }
}

/// Capability surface of the external map renderer, so the controller
/// logic runs against a fake in tests.
pub trait MapSurface {
    fn render_markers(&self, markers: &[MarkerData]);
    fn fit_bounds(&self, bounds: LatLngBounds, padding_px: f64, max_zoom: f64);
    fn center_on(&self, center: LatLng, zoom: f64);
    fn invalidate_size(&self);
}

/// Apply a plan to a surface. The size recalculation always happens
/// first: the container may have been resized or freshly laid out, and
/// the map library caches stale dimensions otherwise.
pub fn apply_viewport(surface: &dyn MapSurface, plan: &ViewportPlan) {
    surface.invalidate_size();
    match plan {
        ViewportPlan::CenterOn { center, zoom } => surface.center_on(*center, *zoom),
        ViewportPlan::FitBounds { bounds } => {
            surface.fit_bounds(*bounds, FIT_PADDING_PX, FIT_MAX_ZOOM);
        }
        ViewportPlan::DefaultRegion => surface.center_on(DEFAULT_CENTER, DEFAULT_ZOOM),
    }
}

// ---------------------------------------------------------------------------
// Marker payload
// ---------------------------------------------------------------------------

/// One marker as the glue script consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerData {
    pub id: u32,
    pub nombre: String,
    pub direccion: String,
    pub latitud: f64,
    pub longitud: f64,
    pub selected: bool,
}

pub fn marker_data(visible: &[GroupRecord], selected_id: Option<u32>) -> Vec<MarkerData> {
    visible
        .iter()
        .map(|group| MarkerData {
            id: group.id,
            nombre: group.nombre.clone(),
            direccion: group.direccion.clone(),
            latitud: group.latitud,
            longitud: group.longitud,
            selected: selected_id == Some(group.id),
        })
        .collect()
}

/// The live surface: forwards every capability to the glue script.
pub struct LeafletSurface;

impl MapSurface for LeafletSurface {
    fn render_markers(&self, markers: &[MarkerData]) {
        match serde_json::to_string(markers) {
            Ok(json) => leaflet::map_render_markers(&json),
            Err(err) => log::error!("no se pudieron serializar los marcadores: {err}"),
        }
    }

    fn fit_bounds(&self, bounds: LatLngBounds, padding_px: f64, max_zoom: f64) {
        leaflet::map_fit_bounds(
            bounds.south,
            bounds.west,
            bounds.north,
            bounds.east,
            padding_px,
            max_zoom,
        );
    }

    fn center_on(&self, center: LatLng, zoom: f64) {
        leaflet::map_set_view(center.lat, center.lng, zoom);
    }

    fn invalidate_size(&self) {
        leaflet::map_invalidate_size();
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(
    visible: Vec<GroupRecord>,
    selected: Option<GroupRecord>,
    on_select: EventHandler<u32>,
) -> Element {
    let mut map_ready = use_signal(|| false);
    // Pending settle timer; replacing the handle drops (cancels) the
    // old one, which is what debounces viewport updates.
    let mut settle_timer = use_signal(|| None::<Timeout>);
    // Marker-click callback, kept alive for the map's lifetime.
    let mut click_handler = use_signal(|| None::<Closure<dyn FnMut(u32)>>);

    use_drop(move || {
        settle_timer.write().take();
        leaflet::map_destroy();
        click_handler.write().take();
    });

    // Runs again whenever the visible set, the selection or map
    // readiness changes. Markers render immediately; the viewport
    // operation waits out the settle delay.
    if *map_ready.read() {
        let surface = LeafletSurface;
        let selected_id = selected.as_ref().map(|g| g.id);
        surface.render_markers(&marker_data(&visible, selected_id));

        let plan = plan_viewport(&visible, selected.as_ref());
        let timer = Timeout::new(VIEWPORT_SETTLE_MS, move || {
            apply_viewport(&LeafletSurface, &plan);
        });
        settle_timer.set(Some(timer));
    }

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "map-container",
            onmounted: move |_| {
                if *map_ready.peek() {
                    return;
                }
                let closure = Closure::wrap(Box::new(move |id: u32| {
                    on_select.call(id);
                }) as Box<dyn FnMut(u32)>);
                leaflet::map_init(MAP_CONTAINER_ID, closure.as_ref().unchecked_ref());
                click_handler.set(Some(closure));
                map_ready.set(true);
                log::info!("mapa inicializado");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn group_at(id: u32, lat: f64, lng: f64) -> GroupRecord {
        GroupRecord {
            id,
            nombre: format!("Grupo {id}"),
            ciudad: "Cali".to_string(),
            direccion: String::new(),
            horarios: String::new(),
            telefono: String::new(),
            email: String::new(),
            ramas: vec![],
            instagram: None,
            facebook: None,
            sitio_web: None,
            latitud: lat,
            longitud: lng,
        }
    }

    // --- plan_viewport decision order ---

    #[test]
    fn test_selection_centers_close_up() {
        let visible = vec![group_at(1, 3.4, -76.5), group_at(2, 4.0, -76.2)];
        let selected = group_at(2, 4.0, -76.2);
        let plan = plan_viewport(&visible, Some(&selected));
        assert_eq!(
            plan,
            ViewportPlan::CenterOn {
                center: LatLng { lat: 4.0, lng: -76.2 },
                zoom: SELECTED_ZOOM,
            }
        );
    }

    #[test]
    fn test_selection_overrides_bounds_fit() {
        // Even with many visible groups, a selection never fits bounds.
        let visible: Vec<GroupRecord> = (0..5)
            .map(|i| group_at(i, 3.0 + f64::from(i) * 0.1, -76.5))
            .collect();
        let selected = visible[0].clone();
        match plan_viewport(&visible, Some(&selected)) {
            ViewportPlan::CenterOn { .. } => {}
            other => panic!("expected CenterOn, got {other:?}"),
        }
    }

    #[test]
    fn test_visible_set_fits_bounding_box() {
        let visible = vec![
            group_at(1, 3.45, -76.53),
            group_at(2, 4.08, -76.19),
            group_at(3, 3.54, -76.30),
        ];
        let plan = plan_viewport(&visible, None);
        let ViewportPlan::FitBounds { bounds } = plan else {
            panic!("expected FitBounds, got {plan:?}");
        };
        assert!((bounds.south - 3.45).abs() < 1e-9);
        assert!((bounds.north - 4.08).abs() < 1e-9);
        assert!((bounds.west - (-76.53)).abs() < 1e-9);
        assert!((bounds.east - (-76.19)).abs() < 1e-9);
    }

    #[test]
    fn test_single_visible_group_still_fits() {
        // Degenerate box; the zoom cap keeps it from over-zooming.
        let visible = vec![group_at(1, 3.45, -76.53)];
        match plan_viewport(&visible, None) {
            ViewportPlan::FitBounds { bounds } => {
                assert_eq!(bounds.south, bounds.north);
                assert_eq!(bounds.west, bounds.east);
            }
            other => panic!("expected FitBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_view_falls_back_to_default_region() {
        assert_eq!(plan_viewport(&[], None), ViewportPlan::DefaultRegion);
    }

    // --- apply_viewport against a recording fake ---

    #[derive(Default)]
    struct RecordingSurface {
        calls: RefCell<Vec<String>>,
    }

    impl MapSurface for RecordingSurface {
        fn render_markers(&self, markers: &[MarkerData]) {
            self.calls
                .borrow_mut()
                .push(format!("markers({})", markers.len()));
        }
        fn fit_bounds(&self, bounds: LatLngBounds, padding_px: f64, max_zoom: f64) {
            self.calls.borrow_mut().push(format!(
                "fit({},{},{},{},{padding_px},{max_zoom})",
                bounds.south, bounds.west, bounds.north, bounds.east
            ));
        }
        fn center_on(&self, center: LatLng, zoom: f64) {
            self.calls
                .borrow_mut()
                .push(format!("center({},{},{zoom})", center.lat, center.lng));
        }
        fn invalidate_size(&self) {
            self.calls.borrow_mut().push("invalidate".to_string());
        }
    }

    #[test]
    fn test_apply_recalculates_layout_before_centering() {
        let surface = RecordingSurface::default();
        let plan = ViewportPlan::CenterOn {
            center: LatLng { lat: 3.5, lng: -76.5 },
            zoom: SELECTED_ZOOM,
        };
        apply_viewport(&surface, &plan);
        assert_eq!(
            *surface.calls.borrow(),
            ["invalidate", "center(3.5,-76.5,15)"]
        );
    }

    #[test]
    fn test_apply_fit_uses_padding_and_zoom_cap() {
        let surface = RecordingSurface::default();
        let plan = ViewportPlan::FitBounds {
            bounds: LatLngBounds {
                south: 3.0,
                west: -77.0,
                north: 4.0,
                east: -76.0,
            },
        };
        apply_viewport(&surface, &plan);
        assert_eq!(
            *surface.calls.borrow(),
            ["invalidate", "fit(3,-77,4,-76,50,13)"]
        );
    }

    #[test]
    fn test_apply_default_region() {
        let surface = RecordingSurface::default();
        apply_viewport(&surface, &ViewportPlan::DefaultRegion);
        assert_eq!(
            *surface.calls.borrow(),
            ["invalidate", "center(3.8,-76.5,9)"]
        );
    }

    // --- marker payload ---

    #[test]
    fn test_marker_data_flags_selection() {
        let visible = vec![group_at(1, 3.4, -76.5), group_at(2, 3.5, -76.4)];
        let markers = marker_data(&visible, Some(2));
        assert_eq!(markers.len(), 2);
        assert!(!markers[0].selected);
        assert!(markers[1].selected);
    }

    #[test]
    fn test_marker_json_uses_data_field_names() {
        let markers = marker_data(&[group_at(7, 3.4, -76.5)], None);
        let json = serde_json::to_string(&markers).unwrap();
        assert!(json.contains(r#""latitud":3.4"#));
        assert!(json.contains(r#""longitud":-76.5"#));
        assert!(json.contains(r#""selected":false"#));
    }
}
