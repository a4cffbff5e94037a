//! Trigger a browser file download for an export artifact.
//!
//! Builds a `Blob`, points a temporary `<a download>` at an object URL,
//! clicks it, then removes the anchor and revokes the URL.

use atlas::export::ExportArtifact;

use crate::util::error::BrowserError;

pub fn download(artifact: &ExportArtifact) -> Result<(), BrowserError> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let document = web_sys::window().and_then(|w| w.document()).ok_or(BrowserError::Unavailable)?;
        let body = document.body().ok_or(BrowserError::Unavailable)?;

        let parts = js_sys::Array::of1(&JsValue::from_str(&artifact.body));
        let props = BlobPropertyBag::new();
        props.set_type(&artifact.mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let link: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
        link.set_href(&url);
        link.set_download(&artifact.file_name);
        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;
        Url::revoke_object_url(&url)?;
        log::debug!("exported {} ({} bytes)", artifact.file_name, artifact.body.len());
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = artifact;
        Err(BrowserError::Unavailable)
    }
}
