//! Blob and download helpers.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::{Error, Result};

fn blob_from_bytes(bytes: &[u8], mime: &str) -> Result<Blob> {
	let array = js_sys::Uint8Array::from(bytes);
	let parts = js_sys::Array::of1(&array.buffer());
	let options = BlobPropertyBag::new();
	options.set_type(mime);
	Blob::new_with_u8_array_sequence_and_options(&parts, &options)
		.map_err(|_| Error::browser("blob: failed to create"))
}

/// Object url for `bytes`. The caller owns it and must revoke it.
pub fn object_url(bytes: &[u8], mime: &str) -> Result<String> {
	let blob = blob_from_bytes(bytes, mime)?;
	Url::create_object_url_with_blob(&blob).map_err(|_| Error::browser("url: create_object_url failed"))
}

pub fn revoke_object_url(url: &str) {
	let _ = Url::revoke_object_url(url);
}

/// Save `bytes` locally as `filename` through a temporary anchor.
pub fn download_bytes(filename: &str, bytes: &[u8], mime: &str) -> Result<()> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| Error::browser("no document"))?;
	let body = document.body().ok_or_else(|| Error::browser("no body"))?;
	let url = object_url(bytes, mime)?;

	let a = document
		.create_element("a")
		.map_err(|_| Error::browser("document: create_element failed"))?
		.dyn_into::<HtmlAnchorElement>()
		.map_err(|_| Error::browser("document: anchor cast failed"))?;
	a.set_href(&url);
	a.set_download(filename);

	let _ = body.append_child(&a);
	a.click();
	let _ = body.remove_child(&a);
	revoke_object_url(&url);
	Ok(())
}
