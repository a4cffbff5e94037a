//! Minimal `wasm-bindgen` bindings to the global Leaflet (`L`) namespace and
//! the mounted map the board renders into.
//!
//! Leaflet is loaded by the host page; only the calls the board needs are
//! bound here. The search overlay comes from an optional geocoder plugin and
//! is looked up dynamically, so a page without it still gets a working map.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use atlas::config::{BoardConfig, MarkerIcon, SearchOverlay};
use atlas::controller::ViewSnapshot;
use atlas::coord::LatLng;
use atlas::view::{MapClick, ViewOrigin};

use crate::util::js::{Options, error_message, get_f64, lat_lng};

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn new_map(element: &web_sys::HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &Map, center: &JsValue, zoom: f64, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = getZoom)]
    fn get_zoom(this: &Map) -> f64;

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &Function) -> Map;

    #[wasm_bindgen(method)]
    fn remove(this: &Map) -> Map;

    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn new_marker(position: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, position: &JsValue) -> Marker;

    #[wasm_bindgen(method)]
    fn remove(this: &Marker) -> Marker;

    #[derive(Debug, Clone)]
    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn new_icon(options: &JsValue) -> Icon;
}

type EventHandler = Closure<dyn FnMut(JsValue)>;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn zoom_level(zoom: f64) -> u8 {
    zoom.round().clamp(0.0, f64::from(u8::MAX)) as u8
}

fn marker_icon(icon: &MarkerIcon) -> Icon {
    let options = Options::new()
        .set("iconUrl", icon.url.as_str())
        .set_pair("iconSize", icon.size.map(f64::from))
        .set_pair("iconAnchor", icon.anchor.map(f64::from))
        .set_pair("popupAnchor", icon.popup_anchor.map(f64::from))
        .build();
    new_icon(&options)
}

/// Attach the geocoder search control when the plugin is on the page.
///
/// With `show_marker` the plugin's own result handling is kept (marker plus
/// fit-to-bounds); otherwise picking a result just centers the map at the
/// configured zoom.
fn add_search(map: &Map, search: &SearchOverlay) -> Result<Option<EventHandler>, JsValue> {
    let leaflet = Reflect::get(&js_sys::global(), &"L".into())?;
    let control_ns = Reflect::get(&leaflet, &"Control".into())?;
    let factory = Reflect::get(&control_ns, &"geocoder".into())?;
    let Some(factory) = factory.dyn_ref::<Function>() else {
        log::warn!("search overlay skipped: L.Control.geocoder is not loaded");
        return Ok(None);
    };

    let options = Options::new()
        .set("position", search.position.as_str())
        .set("placeholder", search.placeholder.as_str())
        .set("defaultMarkGeocode", search.show_marker)
        .build();
    let control = factory.call1(&control_ns, &options)?;

    let handler = if search.show_marker {
        None
    } else {
        let target = map.clone();
        let zoom = f64::from(search.zoom);
        let on_pick = EventHandler::new(move |event: JsValue| {
            let center = Reflect::get(&event, &"geocode".into())
                .and_then(|geocode| Reflect::get(&geocode, &"center".into()));
            match center {
                Ok(center) => {
                    target.set_view(&center, zoom);
                }
                Err(e) => log::warn!("search result without center: {}", error_message(&e)),
            }
        });
        let on: Function = Reflect::get(&control, &"on".into())?.dyn_into()?;
        on.call2(&control, &"markgeocode".into(), on_pick.as_ref())?;
        Some(on_pick)
    };

    let add_to: Function = Reflect::get(&control, &"addTo".into())?.dyn_into()?;
    add_to.call1(&control, map)?;
    Ok(handler)
}

/// A Leaflet map mounted into a container element, with its tile layer,
/// center marker, and event handlers. Removing the map on drop releases the
/// handlers with it.
pub struct MountedMap {
    map: Map,
    marker: Marker,
    marker_shown: bool,
    applied_seq: u64,
    _on_click: EventHandler,
    _on_search: Option<EventHandler>,
}

impl MountedMap {
    pub fn mount(
        element: &web_sys::HtmlElement,
        config: &BoardConfig,
        snapshot: &ViewSnapshot,
        mut on_click: impl FnMut(MapClick) + 'static,
    ) -> Result<Self, JsValue> {
        let center = lat_lng(snapshot.view.center());
        let options = Options::new().set("center", center.clone()).set("zoom", f64::from(snapshot.view.zoom)).build();
        let map = new_map(element, &options)?;

        let tile_options = Options::new().set("attribution", config.tiles.attribution.as_str()).build();
        tile_layer(&config.tiles.url, &tile_options).add_to(&map);

        let marker_options = Options::new().set("icon", marker_icon(&config.marker)).build();
        let marker = new_marker(&center, &marker_options);

        let source = map.clone();
        let handler = EventHandler::new(move |event: JsValue| {
            let latlng = Reflect::get(&event, &"latlng".into()).unwrap_or(JsValue::UNDEFINED);
            match (get_f64(&latlng, "lat"), get_f64(&latlng, "lng")) {
                (Some(lat), Some(lng)) => on_click(MapClick::new(lat, lng, zoom_level(source.get_zoom()))),
                _ => log::warn!("map click without coordinates"),
            }
        });
        map.on("click", handler.as_ref().unchecked_ref());

        let on_search = if config.search.enabled {
            add_search(&map, &config.search).unwrap_or_else(|e| {
                log::warn!("search overlay failed: {}", error_message(&e));
                None
            })
        } else {
            None
        };

        let mut mounted = Self {
            map,
            marker,
            marker_shown: false,
            applied_seq: snapshot.seq,
            _on_click: handler,
            _on_search: on_search,
        };
        mounted.show_marker(snapshot.marker_visible);
        Ok(mounted)
    }

    pub fn fly_to(&self, target: LatLng, zoom: u8) {
        let options = Options::new().set("animate", true).build();
        self.map.fly_to(&lat_lng(target), f64::from(zoom), &options);
    }

    /// Bring the camera and marker in line with the controller.
    ///
    /// The camera only moves for view changes it has not seen yet, and never
    /// for fly-driven changes (the fly animation is already heading there).
    pub fn sync(&mut self, snapshot: &ViewSnapshot) {
        let center = lat_lng(snapshot.view.center());
        if snapshot.seq != self.applied_seq {
            self.applied_seq = snapshot.seq;
            if snapshot.origin != ViewOrigin::Fly {
                self.map.set_view(&center, f64::from(snapshot.view.zoom));
            }
        }
        self.marker.set_lat_lng(&center);
        self.show_marker(snapshot.marker_visible);
    }

    fn show_marker(&mut self, visible: bool) {
        if visible == self.marker_shown {
            return;
        }
        if visible {
            self.marker.add_to(&self.map);
        } else {
            self.marker.remove();
        }
        self.marker_shown = visible;
    }
}

impl Drop for MountedMap {
    fn drop(&mut self) {
        self.map.remove();
    }
}
