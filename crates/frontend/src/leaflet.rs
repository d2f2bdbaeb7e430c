//! FFI wrappers for the map glue script. Only bindings, no logic — the
//! glue owns the map instance, marker layer and tile attribution.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Create the map inside the container element. `on_select` is
    /// invoked with a group id when a marker or popup action is
    /// clicked; the caller must keep the closure alive.
    #[wasm_bindgen(js_name = scoutMapInit)]
    pub fn map_init(container_id: &str, on_select: &js_sys::Function);

    /// Replace the marker layer with the given markers (JSON array).
    #[wasm_bindgen(js_name = scoutMapRenderMarkers)]
    pub fn map_render_markers(markers_json: &str);

    #[wasm_bindgen(js_name = scoutMapFitBounds)]
    pub fn map_fit_bounds(south: f64, west: f64, north: f64, east: f64, padding: f64, max_zoom: f64);

    #[wasm_bindgen(js_name = scoutMapSetView)]
    pub fn map_set_view(lat: f64, lng: f64, zoom: f64);

    /// Force a layout-size recalculation. Must run before any viewport
    /// operation while the container's size may still be settling.
    #[wasm_bindgen(js_name = scoutMapInvalidateSize)]
    pub fn map_invalidate_size();

    #[wasm_bindgen(js_name = scoutMapDestroy)]
    pub fn map_destroy();
}
