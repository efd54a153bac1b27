//! Turns planned particles into DOM nodes and `<style>` rules.

use log::{debug, error};
use web_sys::{Document, Element, HtmlElement};

use super::keyframes::{KeyframeArena, keyframes_css};
use super::particles::{ParticleSpec, animation_name, plan_particle};
use super::random::RandomSource;
use crate::config::ParticleConfig;
use crate::dom;
use crate::error::FxError;
use crate::runtime;

/// Attribute set on every injected `<style>`, holding the animation name.
pub const KEYFRAMES_ATTR: &str = "data-particle-keyframes";

/// Clear `container_id` and fill it with a fresh particle field.
///
/// Never fails outward: a missing container or a throwing DOM call is logged.
/// Rules injected before a failure stay in place.
pub fn generate_particles(container_id: &str) {
	generate_particles_with(container_id, &mut rand::rng());
}

/// [`generate_particles`] with an explicit random source.
pub fn generate_particles_with(container_id: &str, rng: &mut impl RandomSource) {
	let config = runtime::config();
	let result =
		runtime::with(|rt| try_generate(container_id, &config.particles, rng, &mut rt.keyframes));
	match result {
		Ok(count) => debug!("login-fx: generated {} particles in #{}", count, container_id),
		Err(e) => error!("login-fx: particle generation failed: {}", e),
	}
}

/// One generation pass. Returns the number of particles inserted.
///
/// A config that fails [`ParticleConfig::validate`] is rejected before the
/// document is touched.
pub fn try_generate(
	container_id: &str,
	config: &ParticleConfig,
	rng: &mut impl RandomSource,
	arena: &mut KeyframeArena<Element>,
) -> Result<usize, FxError> {
	config.validate()?;
	let window = dom::window()?;
	let document = window.document().ok_or(FxError::NoDocument)?;
	let container = dom::by_id(&document, container_id)?;
	let head = dom::head(&document)?;

	container.set_inner_html("");
	let viewport = dom::viewport(&window)?;

	for stale in arena.begin_pass(config.keyframes) {
		stale.remove();
	}

	let fragment = document.create_document_fragment();
	for index in 0..config.count {
		let spec = plan_particle(index, config, viewport, rng);
		let name = animation_name(&config.animation_prefix, index);

		let rule = document.create_element("style")?;
		rule.set_attribute(KEYFRAMES_ATTR, &name)?;
		rule.set_text_content(Some(&keyframes_css(&name, &spec.motion)));
		head.append_child(&rule)?;
		arena.record(index, name.clone(), rule);

		let particle = build_particle(&document, config, &spec, &name)?;
		fragment.append_child(&particle)?;
	}

	// single insertion for the whole batch
	container.append_child(&fragment)?;
	Ok(config.count)
}

fn build_particle(
	document: &Document,
	config: &ParticleConfig,
	spec: &ParticleSpec,
	name: &str,
) -> Result<HtmlElement, FxError> {
	let particle = dom::html_element(document.create_element("div")?, "div")?;
	particle.class_list().add_1(&config.class_name)?;

	let size = format!("{}px", spec.size);
	let style = particle.style();
	style.set_property("width", &size)?;
	style.set_property("height", &size)?;
	style.set_property("position", "absolute")?;
	style.set_property("left", &format!("{}px", spec.left))?;
	style.set_property("top", &format!("{}px", spec.top))?;
	style.set_property("animation-duration", &format!("{}s", spec.duration_secs))?;
	style.set_property("animation-name", name)?;
	style.set_property("animation-delay", &format!("{}s", spec.delay_secs))?;
	Ok(particle)
}
