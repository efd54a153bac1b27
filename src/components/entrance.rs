//! Staggered entrance animation for the form sections.

use log::{debug, error, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{EntranceConfig, FxConfig};
use crate::dom;
use crate::error::FxError;
use crate::runtime;

/// Delay for the section at `index`: `step * (index + 1)`.
pub fn stagger_delay(index: usize, step: f64) -> f64 {
	step * (index + 1) as f64
}

/// CSS seconds value, rounded to milliseconds with trailing zeros dropped.
pub fn format_seconds(secs: f64) -> String {
	let fixed = format!("{:.3}", secs);
	let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
	format!("{}s", trimmed)
}

/// Run the entrance animation once over all matched sections.
pub fn animate_form_elements() {
	let config = runtime::config();
	match try_animate(&config) {
		Ok(0) => warn!(
			"login-fx: no form sections matched {}",
			config.entrance.group_selector()
		),
		Ok(count) => debug!("login-fx: animating {} form sections", count),
		Err(e) => error!("login-fx: entrance animation failed: {}", e),
	}
}

/// Returns how many sections were animated. Zero means nothing matched and
/// nothing was touched.
pub fn try_animate(config: &FxConfig) -> Result<usize, FxError> {
	let document = dom::document()?;
	let EntranceConfig {
		class_name,
		stagger_secs,
		..
	} = &config.entrance;

	let sections = document.query_selector_all(&config.entrance.group_selector())?;
	let mut animated = 0;
	for i in 0..sections.length() {
		let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};
		section.class_list().add_1(class_name)?;
		section.style().set_property(
			"animation-delay",
			&format_seconds(stagger_delay(i as usize, *stagger_secs)),
		)?;
		animated += 1;
	}
	Ok(animated)
}
