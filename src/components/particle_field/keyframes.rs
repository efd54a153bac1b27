//! Per-particle `@keyframes` rules and the arena that tracks them.

use crate::config::KeyframePolicy;

use super::particles::Motion;

/// CSS for one particle's drift: from rest at 0.8 opacity to the motion
/// offset, one full turn and fully transparent.
pub fn keyframes_css(name: &str, motion: &Motion) -> String {
	format!(
		"@keyframes {name} {{\n\
		 \t0% {{\n\
		 \t\ttransform: translate(0, 0) rotate(0deg);\n\
		 \t\topacity: 0.8;\n\
		 \t}}\n\
		 \t100% {{\n\
		 \t\ttransform: translate({dx}px, {dy}px) rotate(360deg);\n\
		 \t\topacity: 0;\n\
		 \t}}\n\
		 }}\n",
		name = name,
		dx = motion.dx,
		dy = motion.dy,
	)
}

/// An injected rule and whatever handle removes it again.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeEntry<H> {
	/// Generation pass that injected it, starting at 1.
	pub pass: u64,
	/// Particle index within that pass.
	pub index: usize,
	/// Animation name.
	pub name: String,
	/// Owner of the rule in the document (a `<style>` element in the browser).
	pub handle: H,
}

/// Owns every keyframe rule injected by the particle field.
///
/// Under [`KeyframePolicy::Accumulate`] entries are only ever added, so `k`
/// passes of `n` particles leave `k * n` entries. Under
/// [`KeyframePolicy::Replace`] starting a pass evicts everything from earlier
/// passes, keeping at most one pass worth alive.
#[derive(Debug)]
pub struct KeyframeArena<H> {
	pass: u64,
	entries: Vec<KeyframeEntry<H>>,
}

impl<H> Default for KeyframeArena<H> {
	fn default() -> Self {
		Self {
			pass: 0,
			entries: Vec::new(),
		}
	}
}

impl<H> KeyframeArena<H> {
	/// Empty arena, before any pass.
	pub fn new() -> Self {
		Self::default()
	}

	/// Open a new pass. Returns handles evicted by the policy; the caller
	/// detaches them from the document.
	pub fn begin_pass(&mut self, policy: KeyframePolicy) -> Vec<H> {
		self.pass += 1;
		match policy {
			KeyframePolicy::Accumulate => Vec::new(),
			KeyframePolicy::Replace => self.entries.drain(..).map(|e| e.handle).collect(),
		}
	}

	/// Record a rule injected during the current pass.
	pub fn record(&mut self, index: usize, name: String, handle: H) {
		self.entries.push(KeyframeEntry {
			pass: self.pass,
			index,
			name,
			handle,
		});
	}

	/// Number of passes started so far.
	pub fn passes(&self) -> u64 {
		self.pass
	}

	/// Rules currently owned, across all retained passes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when no rule is owned.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries injected by the given pass, in index order.
	pub fn pass_entries(&self, pass: u64) -> impl Iterator<Item = &KeyframeEntry<H>> {
		self.entries.iter().filter(move |e| e.pass == pass)
	}
}
