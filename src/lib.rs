//! login-fx: WASM enhancements for the token login page.
//!
//! Hooks into server-rendered markup and adds a drifting particle backdrop,
//! a show/hide toggle for the token field, a staggered entrance animation for
//! the form sections and a client-side guard against submitting a blank token.
//!
//! Every operation degrades gracefully: a missing element or a throwing DOM
//! call is logged to the console and the rest of the page carries on.

use log::{Level, debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlScriptElement;

// Linked for its `wasm_js` backend, which `rand` needs in the browser.
use getrandom as _;

pub mod components;
pub mod config;
mod dom;
pub mod error;
pub mod listeners;
mod runtime;

pub use components::entrance::animate_form_elements;
pub use components::error_banner::show_error;
pub use components::particle_field::{generate_particles, generate_particles_with};
pub use components::visibility_toggle::toggle_visibility;
pub use config::FxConfig;
pub use error::FxError;

use components::{form_guard, visibility_toggle};
use config::CONFIG_ELEMENT_ID;
use listeners::ListenerKey;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("login-fx: logging initialized");
}

/// Validate and install `config`. The active configuration is kept on error.
pub fn set_config(config: FxConfig) -> Result<(), FxError> {
	config.validate()?;
	runtime::install_config(config);
	Ok(())
}

/// Current configuration.
pub fn current_config() -> FxConfig {
	FxConfig::clone(&runtime::config())
}

/// Read the optional JSON block with id="login-fx-config".
fn load_config() -> Option<FxConfig> {
	match try_load_config() {
		Ok(Some(config)) => {
			info!("login-fx: loaded configuration from #{}", CONFIG_ELEMENT_ID);
			Some(config)
		}
		Ok(None) => None,
		Err(e) => {
			warn!("login-fx: ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
			None
		}
	}
}

fn try_load_config() -> Result<Option<FxConfig>, FxError> {
	let document = dom::document()?;
	let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
		return Ok(None);
	};
	let script: HtmlScriptElement = dom::cast(element, CONFIG_ELEMENT_ID, "HtmlScriptElement")?;
	let text = script.text()?;
	FxConfig::from_json(&text).map(Some)
}

/// Entry point: run [`initialize`] now if the document has been parsed,
/// otherwise on `DOMContentLoaded`. Also arranges [`teardown`] on
/// `beforeunload`.
pub fn start() {
	if let Err(e) = try_start() {
		error!("login-fx: start-up failed: {}", e);
	}
}

fn try_start() -> Result<(), FxError> {
	let window = dom::window()?;
	let document = window.document().ok_or(FxError::NoDocument)?;

	runtime::with(|rt| {
		rt.listeners
			.listen(ListenerKey::new("window", "beforeunload"), &window, |_| teardown())
	})?;

	if document.ready_state() == "loading" {
		runtime::with(|rt| {
			rt.listeners.listen(
				ListenerKey::new("document", "DOMContentLoaded"),
				&document,
				|_| initialize(),
			)
		})?;
		debug!("login-fx: waiting for DOMContentLoaded");
	} else {
		initialize();
	}
	Ok(())
}

/// Wire up the page. Runs at most once; later calls are ignored.
///
/// Each step has its own failure boundary, so e.g. a missing particle
/// container does not keep the form guard from being installed.
pub fn initialize() {
	if !runtime::mark_initialized() {
		debug!("login-fx: already initialized");
		return;
	}
	if let Some(config) = load_config() {
		runtime::install_config(config);
	}
	let config = runtime::config();

	generate_particles(&config.dom.particle_container_id);

	match runtime::with(|rt| visibility_toggle::install(&config, &mut rt.listeners)) {
		Ok(true) => {}
		Ok(false) => warn!(
			"login-fx: toggle button #{} not found",
			config.dom.toggle_button_id
		),
		Err(e) => error!("login-fx: could not wire visibility toggle: {}", e),
	}

	animate_form_elements();

	match runtime::with(|rt| form_guard::install(&config, &mut rt.listeners)) {
		Ok(true) => {}
		Ok(false) => warn!("login-fx: form {} not found", config.dom.form_selector),
		Err(e) => error!("login-fx: could not install submit guard: {}", e),
	}

	info!("login-fx: initialized");
}

/// Detach the toggle click and form submit listeners.
pub fn teardown() {
	let config = runtime::config();
	let keys = [
		visibility_toggle::click_key(&config),
		form_guard::submit_key(&config),
	];
	runtime::with(|rt| {
		for key in &keys {
			match rt.listeners.detach(key) {
				Ok(true) => {}
				Ok(false) => debug!("login-fx: no {} listener on {}", key.event, key.target),
				Err(e) => error!("login-fx: could not detach {} on {}: {}", key.event, key.target, e),
			}
		}
	});
}

/// Whether a listener is currently held for `event` on `target`.
pub fn is_listening(target: &str, event: &'static str) -> bool {
	runtime::with(|rt| rt.listeners.contains(&ListenerKey::new(target, event)))
}

/// Number of keyframe rules the particle field currently owns.
pub fn keyframe_count() -> usize {
	runtime::with(|rt| rt.keyframes.len())
}

// Page-facing exports for inline scripts and the browser console.

/// Regenerate the particle field in `container_id`.
#[wasm_bindgen(js_name = generateParticles)]
pub fn js_generate_particles(container_id: &str) {
	generate_particles(container_id);
}

/// Flip token visibility.
#[wasm_bindgen(js_name = togglePasswordVisibility)]
pub fn js_toggle_visibility() {
	toggle_visibility();
}

/// Re-run the entrance animation.
#[wasm_bindgen(js_name = animateFormElements)]
pub fn js_animate_form_elements() {
	animate_form_elements();
}

/// Show `message` in the error banner.
#[wasm_bindgen(js_name = showError)]
pub fn js_show_error(message: &str) {
	show_error(message);
}

/// Detach the page listeners.
#[wasm_bindgen(js_name = teardown)]
pub fn js_teardown() {
	teardown();
}
