//! Error type shared by every page operation.
//!
//! Nothing here ever reaches the page: each public operation catches its own
//! `FxError`, logs it and returns.

use wasm_bindgen::{JsCast, JsValue};

/// Failure raised while touching the document or reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FxError {
	/// No global `window` (not running in a browser main thread).
	#[error("no global window")]
	NoWindow,
	/// The window has no document attached.
	#[error("window has no document")]
	NoDocument,
	/// The document has no `<head>` to inject style rules into.
	#[error("document has no <head>")]
	NoHead,
	/// A required element was not found. Holds the id or selector used.
	#[error("element not found: {0}")]
	MissingElement(String),
	/// An element was found but is not of the expected kind.
	#[error("element {selector} is not a {expected}")]
	WrongElementType {
		/// Id or selector used to find it.
		selector: String,
		/// Interface name it was expected to implement.
		expected: &'static str,
	},
	/// A DOM call threw.
	#[error("DOM call failed: {0}")]
	Js(String),
	/// Configuration failed to parse or validate.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

impl From<JsValue> for FxError {
	fn from(value: JsValue) -> Self {
		let message = value
			.dyn_ref::<js_sys::Error>()
			.map(|e| String::from(e.message()))
			.or_else(|| value.as_string())
			.unwrap_or_else(|| format!("{:?}", value));
		FxError::Js(message)
	}
}

impl From<serde_json::Error> for FxError {
	fn from(err: serde_json::Error) -> Self {
		FxError::InvalidConfig(err.to_string())
	}
}
