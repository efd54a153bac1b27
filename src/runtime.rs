//! Page-lifetime state shared by the components.
//!
//! Everything runs on the page's single thread, so one thread-local cell is
//! enough. Borrows never span a call back into page script.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::components::particle_field::KeyframeArena;
use crate::config::FxConfig;
use crate::listeners::ListenerRegistry;

#[derive(Default)]
pub struct Runtime {
	pub config: Rc<FxConfig>,
	pub keyframes: KeyframeArena<Element>,
	pub listeners: ListenerRegistry,
	pub initialized: bool,
}

thread_local! {
	static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::default());
}

pub fn with<R>(f: impl FnOnce(&mut Runtime) -> R) -> R {
	RUNTIME.with(|rt| f(&mut rt.borrow_mut()))
}

/// Current configuration. Cheap to clone and safe to hold across DOM calls.
pub fn config() -> Rc<FxConfig> {
	with(|rt| rt.config.clone())
}

pub fn install_config(config: FxConfig) {
	with(|rt| rt.config = Rc::new(config));
}

/// Flip the initialized flag. Returns `false` if it was already set.
pub fn mark_initialized() -> bool {
	with(|rt| !std::mem::replace(&mut rt.initialized, true))
}
