//! Transient alert shown under the token field.
//!
//! At most one banner lives in the document. Showing a new one removes the
//! old one first, and each banner removes itself after
//! `banner.dismiss_after_ms` unless something detached it already.

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use web_sys::Element;

use crate::config::FxConfig;
use crate::dom;
use crate::error::FxError;
use crate::runtime;

/// Outcome of a [`try_show`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerOutcome {
	/// A banner was inserted and its dismissal scheduled.
	Shown,
	/// The anchor was missing; any previous banner is still gone.
	NoAnchor,
}

/// Show `message` in a fresh banner.
pub fn show_error(message: &str) {
	let config = runtime::config();
	match try_show(&config, message) {
		Ok(BannerOutcome::Shown) => debug!("login-fx: error banner shown"),
		Ok(BannerOutcome::NoAnchor) => warn!(
			"login-fx: banner anchor {} not found, message dropped: {}",
			config.dom.banner_anchor_selector, message
		),
		Err(e) => error!("login-fx: could not show error banner: {}", e),
	}
}

/// Replace any banner with one showing `message` and schedule its removal.
/// Nothing is inserted when the anchor is missing.
pub fn try_show(config: &FxConfig, message: &str) -> Result<BannerOutcome, FxError> {
	let document = dom::document()?;
	let banner_selector = format!(".{}", config.banner.class_name);

	if let Some(existing) = dom::query_document(&document, &banner_selector)? {
		existing.remove();
	}

	let banner = document.create_element("div")?;
	banner.set_class_name(&config.banner.class_name);
	banner.set_text_content(Some(message));
	banner.set_attribute("role", "alert")?;
	banner.set_attribute("aria-live", "assertive")?;

	let Some(anchor) = dom::query_document(&document, &config.dom.banner_anchor_selector)? else {
		return Ok(BannerOutcome::NoAnchor);
	};
	let Some(parent) = anchor.parent_node() else {
		return Ok(BannerOutcome::NoAnchor);
	};
	parent.insert_before(&banner, anchor.next_sibling().as_ref())?;

	schedule_dismiss(banner, config.banner.dismiss_after_ms);
	Ok(BannerOutcome::Shown)
}

fn schedule_dismiss(banner: Element, after_ms: u32) {
	// Fire-and-forget: the page never cancels a pending dismissal.
	Timeout::new(after_ms, move || {
		if banner.is_connected() {
			banner.remove();
		}
	})
	.forget();
}
