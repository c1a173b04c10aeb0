//! Resolved export table.

use core::ffi::c_void;

use notifmod_abi::{
	AddDynamicFn, AddStaticFn, Export, FinishDynamicFn, GetVersionFn, IsOverlayReadyFn,
	UpdateColorFn, UpdateTextFn,
};

use crate::registry::SymbolAddress;

/// One optional function pointer per host export; `None` when unresolved.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ExportTable {
	pub get_version: Option<GetVersionFn>,
	pub is_overlay_ready: Option<IsOverlayReadyFn>,
	pub add_static: Option<AddStaticFn>,
	pub add_dynamic: Option<AddDynamicFn>,
	pub update_text: Option<UpdateTextFn>,
	pub update_background_color: Option<UpdateColorFn>,
	pub update_text_color: Option<UpdateColorFn>,
	pub finish_dynamic: Option<FinishDynamicFn>,
}

impl ExportTable {
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	pub fn is_resolved(&self, export: Export) -> bool {
		match export {
			Export::GetVersion => self.get_version.is_some(),
			Export::IsOverlayReady => self.is_overlay_ready.is_some(),
			Export::AddStatic => self.add_static.is_some(),
			Export::AddDynamic => self.add_dynamic.is_some(),
			Export::UpdateText => self.update_text.is_some(),
			Export::UpdateBackgroundColor => self.update_background_color.is_some(),
			Export::UpdateTextColor => self.update_text_color.is_some(),
			Export::FinishDynamic => self.finish_dynamic.is_some(),
		}
	}

	pub fn remove(&mut self, export: Export) {
		match export {
			Export::GetVersion => self.get_version = None,
			Export::IsOverlayReady => self.is_overlay_ready = None,
			Export::AddStatic => self.add_static = None,
			Export::AddDynamic => self.add_dynamic = None,
			Export::UpdateText => self.update_text = None,
			Export::UpdateBackgroundColor => self.update_background_color = None,
			Export::UpdateTextColor => self.update_text_color = None,
			Export::FinishDynamic => self.finish_dynamic = None,
		}
	}

	/// Stores `address` in the slot of `export`.
	///
	/// # Safety
	///
	/// `address` must point to a function with the signature declared for
	/// `export`, callable until the table is cleared.
	pub unsafe fn install(&mut self, export: Export, address: SymbolAddress) {
		let ptr = address.as_ptr();
		// SAFETY: each slot type is the signature declared for its export,
		// which the caller guarantees.
		unsafe {
			match export {
				Export::GetVersion => self.get_version = Some(cast(ptr)),
				Export::IsOverlayReady => self.is_overlay_ready = Some(cast(ptr)),
				Export::AddStatic => self.add_static = Some(cast(ptr)),
				Export::AddDynamic => self.add_dynamic = Some(cast(ptr)),
				Export::UpdateText => self.update_text = Some(cast(ptr)),
				Export::UpdateBackgroundColor => self.update_background_color = Some(cast(ptr)),
				Export::UpdateTextColor => self.update_text_color = Some(cast(ptr)),
				Export::FinishDynamic => self.finish_dynamic = Some(cast(ptr)),
			}
		}
	}
}

/// Reinterprets a symbol address as a function pointer.
///
/// # Safety
///
/// `F` must be a function pointer type matching the function at `ptr`.
unsafe fn cast<F: Copy>(ptr: *mut c_void) -> F {
	debug_assert_eq!(size_of::<F>(), size_of::<*mut c_void>());
	// SAFETY: function and data pointers have the same size on every
	// supported target; the signature is guaranteed by the caller.
	unsafe { std::mem::transmute_copy(&ptr) }
}
