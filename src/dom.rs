//! Thin lookups over `web_sys` that turn absence into [`FxError`].

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlHeadElement, Window};

use crate::components::particle_field::Viewport;
use crate::error::FxError;

pub fn window() -> Result<Window, FxError> {
	web_sys::window().ok_or(FxError::NoWindow)
}

pub fn document() -> Result<Document, FxError> {
	window()?.document().ok_or(FxError::NoDocument)
}

pub fn head(document: &Document) -> Result<HtmlHeadElement, FxError> {
	document.head().ok_or(FxError::NoHead)
}

/// Element by id, or `MissingElement("#id")`.
pub fn by_id(document: &Document, id: &str) -> Result<Element, FxError> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| FxError::MissingElement(format!("#{}", id)))
}

/// First element matching `selector` under `root`.
pub fn query(root: &Element, selector: &str) -> Result<Element, FxError> {
	root.query_selector(selector)?
		.ok_or_else(|| FxError::MissingElement(selector.to_string()))
}

/// First match in the whole document.
pub fn query_document(document: &Document, selector: &str) -> Result<Option<Element>, FxError> {
	Ok(document.query_selector(selector)?)
}

/// Downcast with a descriptive error.
pub fn cast<T: JsCast>(element: Element, selector: &str, expected: &'static str) -> Result<T, FxError> {
	element.dyn_into::<T>().map_err(|_| FxError::WrongElementType {
		selector: selector.to_string(),
		expected,
	})
}

pub fn html_element(element: Element, selector: &str) -> Result<HtmlElement, FxError> {
	cast(element, selector, "HtmlElement")
}

/// Current inner size of the window.
pub fn viewport(window: &Window) -> Result<Viewport, FxError> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok(Viewport { width, height })
}
