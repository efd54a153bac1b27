//! Source of unit draws for particle planning.

/// Yields uniform values in `[0, 1)`.
pub trait RandomSource {
	/// Next draw.
	fn next_unit(&mut self) -> f64;
}

impl<R: rand::RngCore> RandomSource for R {
	fn next_unit(&mut self) -> f64 {
		rand::Rng::random::<f64>(self)
	}
}

/// Replays a fixed list of draws, wrapping at the end.
#[derive(Clone, Debug)]
pub struct FixedSequence {
	values: Vec<f64>,
	next: usize,
}

impl FixedSequence {
	/// Values outside `[0, 1)` are clamped into it. An empty list always yields `0.0`.
	pub fn new(values: impl Into<Vec<f64>>) -> Self {
		let values = values
			.into()
			.into_iter()
			.map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
			.collect();
		Self { values, next: 0 }
	}
}

impl RandomSource for FixedSequence {
	fn next_unit(&mut self) -> f64 {
		if self.values.is_empty() {
			return 0.0;
		}
		let value = self.values[self.next % self.values.len()];
		self.next = self.next.wrapping_add(1);
		value
	}
}
