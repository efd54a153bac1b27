//! Owned event listeners.
//!
//! Every closure handed to `addEventListener` is kept here under a key, so
//! teardown can always find the exact function object to remove.

use std::collections::HashMap;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::error::FxError;

/// Identifies one listener: which element (by id/selector) and which event.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerKey {
	/// Id or selector of the target, or `"window"`/`"document"`.
	pub target: String,
	/// Event type, e.g. `"click"`.
	pub event: &'static str,
}

impl ListenerKey {
	/// Key for `event` on `target`.
	pub fn new(target: impl Into<String>, event: &'static str) -> Self {
		Self {
			target: target.into(),
			event,
		}
	}
}

struct Registered {
	target: EventTarget,
	callback: Closure<dyn FnMut(Event)>,
}

impl Registered {
	fn detach(&self, event: &str) -> Result<(), FxError> {
		self.target
			.remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())?;
		Ok(())
	}
}

/// Listeners attached by this crate, keyed by [`ListenerKey`].
#[derive(Default)]
pub struct ListenerRegistry {
	entries: HashMap<ListenerKey, Registered>,
}

impl ListenerRegistry {
	/// Attach `handler` to `target`. A listener already stored under `key` is
	/// detached first.
	pub fn listen(
		&mut self,
		key: ListenerKey,
		target: &EventTarget,
		handler: impl FnMut(Event) + 'static,
	) -> Result<(), FxError> {
		self.detach(&key)?;

		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(key.event, callback.as_ref().unchecked_ref())?;
		debug!("login-fx: listening for {} on {}", key.event, key.target);
		self.entries.insert(
			key,
			Registered {
				target: target.clone(),
				callback,
			},
		);
		Ok(())
	}

	/// Remove the listener stored under `key`. Returns whether there was one.
	///
	/// Must not be called from inside the listener being removed.
	pub fn detach(&mut self, key: &ListenerKey) -> Result<bool, FxError> {
		match self.entries.remove(key) {
			Some(registered) => {
				registered.detach(key.event)?;
				debug!("login-fx: detached {} on {}", key.event, key.target);
				Ok(true)
			}
			None => Ok(false),
		}
	}

	/// Whether a listener is held under `key`.
	pub fn contains(&self, key: &ListenerKey) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of listeners held.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when no listener is held.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
