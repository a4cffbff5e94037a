//! Device position via `navigator.geolocation.watchPosition`.
//!
//! The page starts one watch on mount and forwards every reading to the
//! controller. Dropping the returned [`GeoWatch`] clears the watch.

use atlas::geo::GeoReading;

/// Active position watch. Clears itself on drop.
pub struct GeoWatch {
    #[cfg(feature = "csr")]
    inner: Option<csr::ActiveWatch>,
}

/// Start watching the device position.
///
/// `on_reading` is called with a located or failed reading each time the
/// browser reports. Without geolocation support it is called once with
/// [`GeoReading::unsupported`].
pub fn watch(on_reading: impl FnMut(GeoReading) + 'static) -> GeoWatch {
    #[cfg(feature = "csr")]
    {
        GeoWatch { inner: csr::start(on_reading) }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_reading;
        GeoWatch {}
    }
}

impl GeoWatch {
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.inner.is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

#[cfg(feature = "csr")]
mod csr {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError};

    use atlas::geo::GeoReading;

    use crate::util::js::error_message;

    pub struct ActiveWatch {
        id: i32,
        geolocation: Geolocation,
        _on_success: Closure<dyn FnMut(GeolocationPosition)>,
        _on_error: Closure<dyn FnMut(GeolocationPositionError)>,
    }

    impl Drop for ActiveWatch {
        fn drop(&mut self) {
            self.geolocation.clear_watch(self.id);
        }
    }

    fn geolocation() -> Option<Geolocation> {
        let navigator = web_sys::window()?.navigator();
        let supported = js_sys::Reflect::has(&navigator, &"geolocation".into()).unwrap_or(false);
        if !supported {
            return None;
        }
        navigator.geolocation().ok()
    }

    pub fn start(on_reading: impl FnMut(GeoReading) + 'static) -> Option<ActiveWatch> {
        let sink = Rc::new(RefCell::new(on_reading));

        let Some(geolocation) = geolocation() else {
            log::warn!("geolocation API not available");
            (&mut *sink.borrow_mut())(GeoReading::unsupported());
            return None;
        };

        let success_sink = Rc::clone(&sink);
        let on_success = Closure::<dyn FnMut(GeolocationPosition)>::new(move |position: GeolocationPosition| {
            let coords = position.coords();
            (&mut *success_sink.borrow_mut())(GeoReading::located(coords.latitude(), coords.longitude()));
        });

        let error_sink = Rc::clone(&sink);
        let on_error = Closure::<dyn FnMut(GeolocationPositionError)>::new(move |err: GeolocationPositionError| {
            log::warn!("geolocation error {}: {}", err.code(), err.message());
            (&mut *error_sink.borrow_mut())(GeoReading::failed(err.message()));
        });

        match geolocation.watch_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        ) {
            Ok(id) => Some(ActiveWatch { id, geolocation, _on_success: on_success, _on_error: on_error }),
            Err(e) => {
                let message = error_message(&e);
                log::warn!("watchPosition failed: {message}");
                (&mut *sink.borrow_mut())(GeoReading::failed(message));
                None
            }
        }
    }
}
