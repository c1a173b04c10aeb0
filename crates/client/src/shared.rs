//! Mutex-guarded binding for callers on several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::binding::NotificationModule;
use crate::error::Result;
use crate::registry::ModuleRegistry;

/// Cloneable handle to one [`NotificationModule`] behind a mutex.
///
/// Every call locks for its whole duration, so host exports are never
/// entered concurrently through the same binding.
pub struct SharedNotificationModule<R: ModuleRegistry> {
	inner: Arc<Mutex<NotificationModule<R>>>,
}

impl<R: ModuleRegistry> Clone for SharedNotificationModule<R> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<R: ModuleRegistry> SharedNotificationModule<R> {
	pub fn new(module: NotificationModule<R>) -> Self {
		Self {
			inner: Arc::new(Mutex::new(module)),
		}
	}

	/// Runs `f` with exclusive access to the binding.
	pub fn with<T>(&self, f: impl FnOnce(&mut NotificationModule<R>) -> T) -> T {
		f(&mut self.inner.lock())
	}

	pub fn init(&self) -> Result<()> {
		self.with(NotificationModule::init)
	}

	pub fn deinit(&self) {
		self.with(NotificationModule::deinit)
	}

	pub fn is_initialized(&self) -> bool {
		self.inner.lock().is_initialized()
	}

	pub fn add_info_notification(&self, text: &str) -> Result<()> {
		self.with(|module| module.add_info_notification(text))
	}

	pub fn add_error_notification(&self, text: &str) -> Result<()> {
		self.with(|module| module.add_error_notification(text))
	}
}

impl<R: ModuleRegistry> From<NotificationModule<R>> for SharedNotificationModule<R> {
	fn from(module: NotificationModule<R>) -> Self {
		Self::new(module)
	}
}
