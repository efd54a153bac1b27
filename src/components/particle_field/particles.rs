//! Geometry and timing for the decorative particles.
//!
//! Planning is pure: it takes a viewport snapshot and a [`RandomSource`] and
//! returns plain values, which the renderer then turns into elements.

use crate::config::{AngleUnit, ParticleConfig};

use super::random::RandomSource;

/// Window size captured once per generation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Inner width in CSS pixels.
	pub width: f64,
	/// Inner height in CSS pixels.
	pub height: f64,
}

/// Where a particle drifts over its animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
	/// Drawn angle, as drawn (`[0, 360)`).
	pub angle: f64,
	/// Travel distance in pixels.
	pub distance: f64,
	/// Final horizontal offset.
	pub dx: f64,
	/// Final vertical offset.
	pub dy: f64,
}

impl Motion {
	/// Build the offset from a drawn angle and distance.
	pub fn new(angle: f64, distance: f64, unit: AngleUnit) -> Self {
		let theta = match unit {
			AngleUnit::Raw => angle,
			AngleUnit::Degrees => angle.to_radians(),
		};
		Self {
			angle,
			distance,
			dx: distance * theta.cos(),
			dy: distance * theta.sin(),
		}
	}
}

/// Everything needed to render one particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
	/// Position in the generation pass, also used to name its keyframes.
	pub index: usize,
	/// Width and height in pixels.
	pub size: u32,
	/// Offset from the container's left edge.
	pub left: f64,
	/// Offset from the container's top edge.
	pub top: f64,
	/// Whole seconds.
	pub duration_secs: u32,
	/// Start delay in seconds.
	pub delay_secs: f64,
	/// Drift at the end of the animation.
	pub motion: Motion,
}

/// Keyframe name for the particle at `index`.
pub fn animation_name(prefix: &str, index: usize) -> String {
	format!("{}-{}", prefix, index)
}

/// Draw one particle. Draw order: size, x, y, duration, angle, distance, delay.
pub fn plan_particle(
	index: usize,
	config: &ParticleConfig,
	viewport: Viewport,
	rng: &mut impl RandomSource,
) -> ParticleSpec {
	let size = config.size_px.sample(rng.next_unit());
	let left = rng.next_unit() * viewport.width;
	let top = rng.next_unit() * viewport.height;
	let duration_secs = config.duration_secs.sample(rng.next_unit());
	let angle = rng.next_unit() * 360.0;
	let distance = config.distance_px.sample(rng.next_unit());
	let delay_secs = rng.next_unit() * config.max_delay_secs;

	ParticleSpec {
		index,
		size,
		left,
		top,
		duration_secs,
		delay_secs,
		motion: Motion::new(angle, distance, config.angle_unit),
	}
}

/// Plan a whole pass against a single viewport snapshot.
pub fn plan_field(
	config: &ParticleConfig,
	viewport: Viewport,
	rng: &mut impl RandomSource,
) -> Vec<ParticleSpec> {
	(0..config.count)
		.map(|i| plan_particle(i, config, viewport, rng))
		.collect()
}
