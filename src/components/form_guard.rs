//! Blocks login submission while the token field is blank.

use log::{debug, error};
use web_sys::{Event, HtmlInputElement};

use super::error_banner::show_error;
use crate::config::FxConfig;
use crate::dom;
use crate::error::FxError;
use crate::listeners::{ListenerKey, ListenerRegistry};
use crate::runtime;

/// Verdict on the token field's current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenCheck {
	/// Something other than whitespace was entered.
	Present,
	/// Empty or whitespace only.
	Blank,
}

impl TokenCheck {
	/// Classify a raw input value; whitespace alone counts as blank.
	pub fn of(value: &str) -> Self {
		if value.trim().is_empty() {
			TokenCheck::Blank
		} else {
			TokenCheck::Present
		}
	}
}

/// Key the submit listener is registered under.
pub fn submit_key(config: &FxConfig) -> ListenerKey {
	ListenerKey::new(config.dom.form_selector.clone(), "submit")
}

/// Attach the submit guard to the login form. Returns `false` if the page has
/// no login form.
pub fn install(config: &FxConfig, registry: &mut ListenerRegistry) -> Result<bool, FxError> {
	let document = dom::document()?;
	let Some(form) = dom::query_document(&document, &config.dom.form_selector)? else {
		return Ok(false);
	};
	registry.listen(submit_key(config), &form, on_submit)?;
	Ok(true)
}

/// Submit handler. Lets the submission through untouched unless the token is
/// blank, in which case it is cancelled and the error banner shown.
pub fn on_submit(event: Event) {
	let config = runtime::config();
	match check_token(&config) {
		Ok(Some(TokenCheck::Blank)) => {
			event.prevent_default();
			show_error(&config.banner.blank_token_message);
		}
		Ok(_) => debug!("login-fx: submission allowed"),
		Err(e) => error!("login-fx: submit guard failed: {}", e),
	}
}

/// `None` when the page has no token field, which lets the form through.
fn check_token(config: &FxConfig) -> Result<Option<TokenCheck>, FxError> {
	let document = dom::document()?;
	let id = &config.dom.token_input_id;
	let Some(field) = document.get_element_by_id(id) else {
		return Ok(None);
	};
	let input: HtmlInputElement = dom::cast(field, id, "HtmlInputElement")?;
	Ok(Some(TokenCheck::of(&input.value())))
}
