//! Page components. Each one exposes a `try_*` operation returning
//! [`FxError`](crate::FxError) and a wrapper that logs and swallows it.

pub mod entrance;
pub mod error_banner;
pub mod form_guard;
pub mod particle_field;
pub mod visibility_toggle;
