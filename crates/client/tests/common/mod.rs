//! In-process stand-in for the host notification module.
//!
//! The exports are plain `extern "C"` functions that record every call into
//! thread-local state, so each test (one thread per test) sees its own host.

#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::{CStr, c_char, c_void};

use notifmod::{
	ApiVersion, CallbackContext, Color, Export, FinishCallback, FinishMode, MODULE_NAME,
	NotificationHandle, NotificationKind, NotificationModule, Status, SymbolAddress, SymbolTable,
};
use notifmod_abi::{
	AddDynamicFn, AddStaticFn, FinishDynamicFn, GetVersionFn, IsOverlayReadyFn, RawStatus,
	UpdateColorFn, UpdateTextFn,
};

/// One call received by the mock host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
	GetVersion,
	IsOverlayReady,
	AddStatic {
		text: String,
		kind: NotificationKind,
		fade_out_delay: f32,
		shake_duration: f32,
		text_color: Color,
		background_color: Color,
		callback: Option<usize>,
		context: usize,
	},
	AddDynamic {
		text: String,
		text_color: Color,
		background_color: Color,
		callback: Option<usize>,
		context: usize,
	},
	UpdateText {
		handle: u32,
		text: String,
	},
	UpdateBackgroundColor {
		handle: u32,
		color: Color,
	},
	UpdateTextColor {
		handle: u32,
		color: Color,
	},
	FinishDynamic {
		handle: u32,
		mode: FinishMode,
		fade_out_delay: f32,
		shake_duration: f32,
	},
}

#[derive(Debug)]
pub struct HostState {
	pub version: ApiVersion,
	pub version_status: Status,
	pub overlay_ready: bool,
	/// Raw status returned by every command export.
	pub reply: RawStatus,
	/// Handle minted by the next dynamic notification.
	pub next_handle: u32,
	pub calls: Vec<HostCall>,
}

impl Default for HostState {
	fn default() -> Self {
		Self {
			version: 1,
			version_status: Status::Success,
			overlay_ready: true,
			reply: Status::Success.as_raw(),
			next_handle: 7,
			calls: Vec::new(),
		}
	}
}

thread_local! {
	static HOST: RefCell<HostState> = RefCell::new(HostState::default());
}

pub fn configure(f: impl FnOnce(&mut HostState)) {
	HOST.with_borrow_mut(f)
}

pub fn calls() -> Vec<HostCall> {
	HOST.with_borrow(|host| host.calls.clone())
}

pub fn clear_calls() {
	HOST.with_borrow_mut(|host| host.calls.clear())
}

/// Calls other than version queries.
pub fn command_calls() -> Vec<HostCall> {
	calls()
		.into_iter()
		.filter(|call| *call != HostCall::GetVersion)
		.collect()
}

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn record(call: HostCall) -> RawStatus {
	HOST.with_borrow_mut(|host| {
		host.calls.push(call);
		host.reply
	})
}

/// # Safety
/// `text` must be a valid NUL-terminated string.
unsafe fn owned_text(text: *const c_char) -> String {
	// SAFETY: guaranteed by the caller.
	unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned()
}

unsafe extern "C" fn nm_get_version(out_version: *mut ApiVersion) -> RawStatus {
	HOST.with_borrow_mut(|host| {
		host.calls.push(HostCall::GetVersion);
		if host.version_status.is_success() {
			// SAFETY: the binding passes a valid out pointer.
			unsafe { *out_version = host.version };
		}
		host.version_status.as_raw()
	})
}

unsafe extern "C" fn nm_is_overlay_ready(out_is_ready: *mut bool) -> RawStatus {
	let status = record(HostCall::IsOverlayReady);
	// SAFETY: the binding passes a valid out pointer.
	unsafe { *out_is_ready = HOST.with_borrow(|host| host.overlay_ready) };
	status
}

unsafe extern "C" fn nm_add_static(
	text: *const c_char,
	kind: NotificationKind,
	fade_out_delay: f32,
	shake_duration: f32,
	text_color: Color,
	background_color: Color,
	callback: Option<FinishCallback>,
	context: *mut c_void,
) -> RawStatus {
	record(HostCall::AddStatic {
		// SAFETY: the binding passes a NUL-terminated string.
		text: unsafe { owned_text(text) },
		kind,
		fade_out_delay,
		shake_duration,
		text_color,
		background_color,
		callback: callback.map(|f| f as usize),
		context: context as usize,
	})
}

unsafe extern "C" fn nm_add_dynamic(
	text: *const c_char,
	text_color: Color,
	background_color: Color,
	callback: Option<FinishCallback>,
	context: *mut c_void,
	out_handle: *mut NotificationHandle,
) -> RawStatus {
	let status = record(HostCall::AddDynamic {
		// SAFETY: the binding passes a NUL-terminated string.
		text: unsafe { owned_text(text) },
		text_color,
		background_color,
		callback: callback.map(|f| f as usize),
		context: context as usize,
	});
	if status == Status::Success.as_raw() {
		let handle = HOST.with_borrow(|host| host.next_handle);
		// SAFETY: the binding passes a valid out pointer.
		unsafe { *out_handle = NotificationHandle(handle) };
	}
	status
}

unsafe extern "C" fn nm_update_text(handle: NotificationHandle, text: *const c_char) -> RawStatus {
	record(HostCall::UpdateText {
		handle: handle.0,
		// SAFETY: the binding passes a NUL-terminated string.
		text: unsafe { owned_text(text) },
	})
}

unsafe extern "C" fn nm_update_background_color(handle: NotificationHandle, color: Color) -> RawStatus {
	record(HostCall::UpdateBackgroundColor {
		handle: handle.0,
		color,
	})
}

unsafe extern "C" fn nm_update_text_color(handle: NotificationHandle, color: Color) -> RawStatus {
	record(HostCall::UpdateTextColor {
		handle: handle.0,
		color,
	})
}

unsafe extern "C" fn nm_finish_dynamic(
	handle: NotificationHandle,
	mode: FinishMode,
	fade_out_delay: f32,
	shake_duration: f32,
) -> RawStatus {
	record(HostCall::FinishDynamic {
		handle: handle.0,
		mode,
		fade_out_delay,
		shake_duration,
	})
}

fn address_of(export: Export) -> *mut c_void {
	match export {
		Export::GetVersion => nm_get_version as GetVersionFn as *mut c_void,
		Export::IsOverlayReady => nm_is_overlay_ready as IsOverlayReadyFn as *mut c_void,
		Export::AddStatic => nm_add_static as AddStaticFn as *mut c_void,
		Export::AddDynamic => nm_add_dynamic as AddDynamicFn as *mut c_void,
		Export::UpdateText => nm_update_text as UpdateTextFn as *mut c_void,
		Export::UpdateBackgroundColor => nm_update_background_color as UpdateColorFn as *mut c_void,
		Export::UpdateTextColor => nm_update_text_color as UpdateColorFn as *mut c_void,
		Export::FinishDynamic => nm_finish_dynamic as FinishDynamicFn as *mut c_void,
	}
}

/// Symbol table exporting every mock function except `missing`.
pub fn host_table(missing: &[Export]) -> SymbolTable {
	let mut table = SymbolTable::new().with_module(MODULE_NAME);
	for export in Export::ALL {
		if missing.contains(&export) {
			continue;
		}
		let address = SymbolAddress::new(address_of(export)).expect("function address is non-null");
		// SAFETY: `address_of` casts each mock through the declared signature.
		table = unsafe { table.with_symbol(MODULE_NAME, export.symbol(), address) };
	}
	table
}

/// Initialized binding against the full mock host.
pub fn ready_module() -> NotificationModule<SymbolTable> {
	init_tracing();
	let mut module = NotificationModule::new(host_table(&[]));
	module.init().expect("mock host initializes");
	clear_calls();
	module
}

pub extern "C" fn on_finish(_handle: NotificationHandle, _context: *mut c_void) {}

pub extern "C" fn on_finish_other(_handle: NotificationHandle, _context: *mut c_void) {}

/// Context pointing at a leaked value, distinct per call.
pub fn context() -> CallbackContext {
	CallbackContext::from(Box::into_raw(Box::new(0u64)))
}
