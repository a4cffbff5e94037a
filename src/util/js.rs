//! Small helpers for building and reading plain JavaScript values.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use atlas::coord::LatLng;

/// Best-effort human message for a thrown JS value.
pub fn error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `[lat, lng]` array as Leaflet expects it.
pub fn lat_lng(position: LatLng) -> JsValue {
    Array::of2(&JsValue::from_f64(position.lat), &JsValue::from_f64(position.lng)).into()
}

/// Read a numeric property, e.g. `event.latlng.lat`.
pub fn get_f64(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key)).ok().and_then(|v| v.as_f64())
}

/// Builder for a plain options object literal.
pub struct Options(Object);

impl Options {
    pub fn new() -> Self {
        Self(Object::new())
    }

    #[must_use]
    pub fn set(self, key: &str, value: impl Into<JsValue>) -> Self {
        if let Err(e) = Reflect::set(&self.0, &JsValue::from_str(key), &value.into()) {
            log::warn!("option {key} not set: {}", error_message(&e));
        }
        self
    }

    /// Set a two-element numeric array, e.g. an icon size.
    #[must_use]
    pub fn set_pair(self, key: &str, pair: [f64; 2]) -> Self {
        let array: JsValue = Array::of2(&JsValue::from_f64(pair[0]), &JsValue::from_f64(pair[1])).into();
        self.set(key, array)
    }

    pub fn build(self) -> JsValue {
        self.0.into()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
