//! Page configuration.
//!
//! Every field has a default matching the stock login page, so an absent or
//! partial `<script id="login-fx-config">` block still yields a usable config.

use serde::Deserialize;

use crate::error::FxError;

/// Id of the optional JSON config block in the page.
pub const CONFIG_ELEMENT_ID: &str = "login-fx-config";

/// Smallest stagger step. Delays are written with millisecond precision, so
/// anything finer would collapse neighbouring sections onto the same delay.
pub const MIN_STAGGER_SECS: f64 = 0.001;

/// Half-open integer range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct IntSpan {
	/// Inclusive lower bound.
	pub min: u32,
	/// Exclusive upper bound.
	pub max: u32,
}

impl IntSpan {
	/// Map a unit draw in `[0, 1)` onto the span. An empty or inverted span
	/// yields `min`.
	pub fn sample(self, unit: f64) -> u32 {
		let width = self.max.saturating_sub(self.min);
		((unit * f64::from(width)).floor() as u32).saturating_add(self.min)
	}

	fn validate(self, field: &str) -> Result<(), FxError> {
		if self.min < self.max {
			Ok(())
		} else {
			Err(FxError::InvalidConfig(format!(
				"{}: min {} must be below max {}",
				field, self.min, self.max
			)))
		}
	}
}

/// Half-open float range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	/// Inclusive lower bound.
	pub min: f64,
	/// Upper bound.
	pub max: f64,
}

impl Span {
	/// Map a unit draw in `[0, 1)` onto the span.
	pub fn sample(self, unit: f64) -> f64 {
		self.min + unit * (self.max - self.min)
	}

	fn validate(self, field: &str) -> Result<(), FxError> {
		if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
			Ok(())
		} else {
			Err(FxError::InvalidConfig(format!(
				"{}: [{}, {}) is not a valid range",
				field, self.min, self.max
			)))
		}
	}
}

/// How the drawn particle angle is fed to `cos`/`sin`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
	/// The value drawn from `[0, 360)` goes into the trig functions untouched,
	/// which treats it as radians. Matches the stock page's scatter.
	#[default]
	Raw,
	/// Convert the drawn degrees to radians first for an even radial spread.
	Degrees,
}

/// What happens to `@keyframes` rules injected by earlier passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyframePolicy {
	/// Keep every rule ever injected; they pile up in `<head>`.
	#[default]
	Accumulate,
	/// Remove the previous pass's rules before injecting new ones.
	Replace,
}

/// Particle backdrop settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Particles per generation pass.
	pub count: usize,
	/// Edge length in pixels (particles are square).
	pub size_px: IntSpan,
	/// Animation duration in whole seconds.
	pub duration_secs: IntSpan,
	/// Travel distance in pixels.
	pub distance_px: Span,
	/// Upper bound of the random start delay.
	pub max_delay_secs: f64,
	/// Class put on each particle element.
	pub class_name: String,
	/// Keyframe names are `{prefix}-{index}`.
	pub animation_prefix: String,
	/// See [`AngleUnit`].
	pub angle_unit: AngleUnit,
	/// See [`KeyframePolicy`].
	pub keyframes: KeyframePolicy,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			count: 20,
			size_px: IntSpan { min: 50, max: 250 },
			duration_secs: IntSpan { min: 20, max: 50 },
			distance_px: Span {
				min: 1000.0,
				max: 1500.0,
			},
			max_delay_secs: 5.0,
			class_name: "particle".into(),
			animation_prefix: "float".into(),
			angle_unit: AngleUnit::Raw,
			keyframes: KeyframePolicy::Accumulate,
		}
	}
}

/// Ids and selectors of the page elements the script hooks into.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DomContract {
	/// Container the particles are generated into.
	pub particle_container_id: String,
	/// The token/credential input.
	pub token_input_id: String,
	/// Button that flips token visibility.
	pub toggle_button_id: String,
	/// Icon glyph inside the toggle button.
	pub toggle_icon_selector: String,
	/// Wrapper after which the error banner is inserted.
	pub banner_anchor_selector: String,
	/// The login form.
	pub form_selector: String,
}

impl Default for DomContract {
	fn default() -> Self {
		Self {
			particle_container_id: "particles".into(),
			token_input_id: "token".into(),
			toggle_button_id: "togglePassword".into(),
			toggle_icon_selector: "i".into(),
			banner_anchor_selector: ".password-container".into(),
			form_selector: ".login-box".into(),
		}
	}
}

/// Labels and icon classes for the visibility toggle.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
	/// `aria-label` while the token is masked.
	pub reveal_label: String,
	/// `aria-label` while the token is shown.
	pub hide_label: String,
	/// Icon class while masked.
	pub shown_icon_class: String,
	/// Icon class while revealed.
	pub hidden_icon_class: String,
}

impl Default for ToggleConfig {
	fn default() -> Self {
		Self {
			reveal_label: "Mostrar token".into(),
			hide_label: "Ocultar token".into(),
			shown_icon_class: "fa-eye".into(),
			hidden_icon_class: "fa-eye-slash".into(),
		}
	}
}

/// Staggered entrance animation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
	/// Section selectors, matched together in document order.
	pub section_selectors: Vec<String>,
	/// Class that carries the entrance animation.
	pub class_name: String,
	/// Delay step between consecutive sections.
	pub stagger_secs: f64,
}

impl Default for EntranceConfig {
	fn default() -> Self {
		Self {
			section_selectors: [
				".login-header",
				".input-group",
				".remember-forgot",
				".login-button",
				".divider",
				".social-login",
				".help-links",
			]
			.into_iter()
			.map(String::from)
			.collect(),
			class_name: "fade-in-up".into(),
			stagger_secs: 0.1,
		}
	}
}

impl EntranceConfig {
	/// All section selectors as one group selector.
	pub fn group_selector(&self) -> String {
		self.section_selectors.join(", ")
	}
}

/// Transient error banner.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
	/// Class identifying the banner element.
	pub class_name: String,
	/// Text shown when the token field is blank on submit.
	pub blank_token_message: String,
	/// Time before the banner removes itself.
	pub dismiss_after_ms: u32,
}

impl Default for BannerConfig {
	fn default() -> Self {
		Self {
			class_name: "error-message".into(),
			blank_token_message: "Por favor, insira um token válido".into(),
			dismiss_after_ms: 5000,
		}
	}
}

/// Complete configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
	/// Particle backdrop.
	pub particles: ParticleConfig,
	/// Element ids and selectors.
	pub dom: DomContract,
	/// Visibility toggle.
	pub toggle: ToggleConfig,
	/// Entrance animation.
	pub entrance: EntranceConfig,
	/// Error banner.
	pub banner: BannerConfig,
}

impl FxConfig {
	/// Parse and validate a JSON config block.
	pub fn from_json(text: &str) -> Result<Self, FxError> {
		let config: FxConfig = serde_json::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Reject settings the operations cannot work with.
	pub fn validate(&self) -> Result<(), FxError> {
		self.particles.validate()?;
		let stagger = self.entrance.stagger_secs;
		if !(stagger.is_finite() && stagger >= MIN_STAGGER_SECS) {
			return Err(FxError::InvalidConfig(format!(
				"entrance.stagger_secs must be at least {}",
				MIN_STAGGER_SECS
			)));
		}
		if self.entrance.section_selectors.is_empty() {
			return Err(FxError::InvalidConfig(
				"entrance.section_selectors is empty".into(),
			));
		}
		Ok(())
	}
}

impl ParticleConfig {
	/// Reject spans and counts a generation pass cannot draw from.
	pub fn validate(&self) -> Result<(), FxError> {
		let p = self;
		if p.count == 0 {
			return Err(FxError::InvalidConfig("particles.count must be positive".into()));
		}
		p.size_px.validate("particles.size_px")?;
		p.duration_secs.validate("particles.duration_secs")?;
		p.distance_px.validate("particles.distance_px")?;
		if !(p.max_delay_secs.is_finite() && p.max_delay_secs >= 0.0) {
			return Err(FxError::InvalidConfig(
				"particles.max_delay_secs must be a non-negative number".into(),
			));
		}
		if p.animation_prefix.is_empty() {
			return Err(FxError::InvalidConfig("particles.animation_prefix is empty".into()));
		}
		Ok(())
	}
}
