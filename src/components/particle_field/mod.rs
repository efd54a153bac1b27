//! Decorative particle backdrop.
//!
//! Each generation pass clears the container and creates a fixed number of
//! square, absolutely positioned particles. Every particle gets its own
//! `@keyframes` rule drifting it along a random offset while it spins and
//! fades out:
//!
//! - [`particles`] draws size, position, timing and motion from a [`RandomSource`]
//! - [`keyframes`] formats the rules and tracks them in a [`KeyframeArena`]
//! - [`render`] applies a pass to the document
//!
//! ```ignore
//! use login_fx::components::particle_field::{generate_particles_with, FixedSequence};
//!
//! generate_particles_with("particles", &mut FixedSequence::new([0.5]));
//! ```

pub mod keyframes;
pub mod particles;
pub mod random;
mod render;

pub use keyframes::{KeyframeArena, KeyframeEntry, keyframes_css};
pub use particles::{Motion, ParticleSpec, Viewport, animation_name, plan_field, plan_particle};
pub use random::{FixedSequence, RandomSource};
pub use render::{KEYFRAMES_ATTR, generate_particles, generate_particles_with, try_generate};
