//! Show/hide toggle for the token input.

use log::{debug, error};
use web_sys::HtmlInputElement;

use crate::config::{FxConfig, ToggleConfig};
use crate::dom;
use crate::error::FxError;
use crate::listeners::{ListenerKey, ListenerRegistry};
use crate::runtime;

/// Display state of the token input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
	/// Rendered as a password field.
	Masked,
	/// Rendered as plain text.
	Revealed,
}

impl Visibility {
	/// State implied by the input's `type` attribute.
	pub fn from_input_type(input_type: &str) -> Self {
		if input_type.eq_ignore_ascii_case("password") {
			Visibility::Masked
		} else {
			Visibility::Revealed
		}
	}

	/// The other state.
	pub fn flipped(self) -> Self {
		match self {
			Visibility::Masked => Visibility::Revealed,
			Visibility::Revealed => Visibility::Masked,
		}
	}

	/// Value for the input's `type` attribute in this state.
	pub fn input_type(self) -> &'static str {
		match self {
			Visibility::Masked => "password",
			Visibility::Revealed => "text",
		}
	}

	/// Icon class shown in this state.
	pub fn icon_class(self, config: &ToggleConfig) -> &str {
		match self {
			Visibility::Masked => &config.shown_icon_class,
			Visibility::Revealed => &config.hidden_icon_class,
		}
	}

	/// `aria-label` of the button in this state, naming what a click does.
	pub fn label(self, config: &ToggleConfig) -> &str {
		match self {
			Visibility::Masked => &config.reveal_label,
			Visibility::Revealed => &config.hide_label,
		}
	}
}

/// Key the click listener is registered under.
pub fn click_key(config: &FxConfig) -> ListenerKey {
	ListenerKey::new(config.dom.toggle_button_id.clone(), "click")
}

/// Wire the toggle button and give it its masked-state label. Returns `false`
/// if the page has no toggle button.
pub fn install(config: &FxConfig, registry: &mut ListenerRegistry) -> Result<bool, FxError> {
	let document = dom::document()?;
	let Some(button) = document.get_element_by_id(&config.dom.toggle_button_id) else {
		return Ok(false);
	};
	registry.listen(click_key(config), &button, |_| toggle_visibility())?;
	button.set_attribute("aria-label", Visibility::Masked.label(&config.toggle))?;
	Ok(true)
}

/// Click handler: flip the token input between masked and revealed.
pub fn toggle_visibility() {
	let config = runtime::config();
	match try_toggle(&config) {
		Ok(state) => debug!("login-fx: token input now {:?}", state),
		Err(e) => error!("login-fx: could not toggle visibility: {}", e),
	}
}

/// Flip once. All three elements must exist before anything is touched.
pub fn try_toggle(config: &FxConfig) -> Result<Visibility, FxError> {
	let document = dom::document()?;
	let input_id = &config.dom.token_input_id;
	let input: HtmlInputElement =
		dom::cast(dom::by_id(&document, input_id)?, input_id, "HtmlInputElement")?;
	let button = dom::by_id(&document, &config.dom.toggle_button_id)?;
	let icon = dom::query(&button, &config.dom.toggle_icon_selector)?;

	let current = Visibility::from_input_type(&input.type_());
	let next = current.flipped();

	input.set_type(next.input_type());
	icon.class_list()
		.replace(current.icon_class(&config.toggle), next.icon_class(&config.toggle))?;
	button.set_attribute("aria-label", next.label(&config.toggle))?;
	Ok(next)
}
