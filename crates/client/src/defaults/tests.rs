use core::ffi::c_void;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use notifmod_abi::NotificationHandle;

extern "C" fn on_finish(_handle: NotificationHandle, _context: *mut c_void) {}

#[rstest]
#[case::info(NotificationKind::Info, Color::NEUTRAL_GRAY)]
#[case::error(NotificationKind::Error, Color::ERROR_RED)]
#[case::dynamic(NotificationKind::Dynamic, Color::NEUTRAL_GRAY)]
fn first_access_seeds_record(#[case] kind: NotificationKind, #[case] background: Color) {
	let mut store = DefaultStore::new();
	assert!(store.peek(kind).is_none());

	let record = *store.get(kind);
	assert_eq!(record.background_color, background);
	assert_eq!(record.text_color, Color::new(255, 255, 255, 255));
	assert_eq!(record.fade_out_delay, 2.0);
	assert_eq!(record.shake_duration, 0.5);
	assert!(record.finish_callback.is_none());
	assert!(record.finish_context.is_null());
}

#[test]
fn error_seed_matches_documented_red() {
	assert_eq!(
		DefaultValueRecord::seed(NotificationKind::Error).background_color,
		Color::new(237, 28, 36, 255)
	);
	assert_eq!(
		DefaultValueRecord::seed(NotificationKind::Info).background_color,
		Color::new(100, 100, 100, 255)
	);
}

#[rstest]
#[case::info(NotificationKind::Info)]
#[case::error(NotificationKind::Error)]
#[case::dynamic(NotificationKind::Dynamic)]
fn first_set_keeps_other_seed_fields(#[case] kind: NotificationKind) {
	let mut store = DefaultStore::new();
	store.set(kind, DefaultValue::DurationBeforeFadeOut(4.5));

	let record = store.peek(kind).copied().unwrap();
	let seed = DefaultValueRecord::seed(kind);
	assert_eq!(record.fade_out_delay, 4.5);
	assert_eq!(record.background_color, seed.background_color);
	assert_eq!(record.text_color, seed.text_color);
	assert_eq!(record.shake_duration, seed.shake_duration);
}

#[test]
fn explicit_set_wins_over_error_seed() {
	let mut store = DefaultStore::new();
	let blue = Color::new(0, 0, 255, 255);
	store.set(NotificationKind::Error, DefaultValue::BackgroundColor(blue));
	assert_eq!(store.get(NotificationKind::Error).background_color, blue);
	store.set(NotificationKind::Error, DefaultValue::TextColor(Color::WHITE));
	assert_eq!(store.get(NotificationKind::Error).background_color, blue);
}

#[test]
fn kinds_are_independent() {
	let mut store = DefaultStore::new();
	store.set(NotificationKind::Info, DefaultValue::TextColor(Color::new(1, 2, 3, 4)));
	assert_eq!(store.get(NotificationKind::Dynamic).text_color, Color::WHITE);
	assert_eq!(store.get(NotificationKind::Info).text_color, Color::new(1, 2, 3, 4));
}

#[test]
fn callback_and_context_are_stored() {
	let mut store = DefaultStore::new();
	let mut data = 7u32;
	let context = CallbackContext::from(&mut data as *mut u32);
	store.set(NotificationKind::Info, DefaultValue::FinishFunction(Some(on_finish)));
	store.set(NotificationKind::Info, DefaultValue::FinishFunctionContext(context));

	let record = store.get(NotificationKind::Info);
	assert_eq!(
		record.finish_callback.map(|f| f as usize),
		Some(on_finish as usize)
	);
	assert_eq!(record.finish_context, context);
}

#[test]
fn clear_and_reseed() {
	let mut store = DefaultStore::new();
	assert!(store.is_empty());
	store.set(NotificationKind::Info, DefaultValue::DurationBeforeFadeOut(9.0));
	assert!(!store.is_empty());

	store.reseed();
	assert_eq!(store.peek(NotificationKind::Info).unwrap().fade_out_delay, 2.0);
	assert!(NotificationKind::ALL.iter().all(|k| store.peek(*k).is_some()));

	store.clear();
	assert!(store.is_empty());
}

#[rstest]
#[case(OptionTag::BackgroundColor, OptionPayload::Color(Color::WHITE), true)]
#[case(OptionTag::TextColor, OptionPayload::Color(Color::WHITE), true)]
#[case(OptionTag::DurationBeforeFadeOut, OptionPayload::Seconds(1.0), true)]
#[case(OptionTag::FinishFunction, OptionPayload::Callback(None), true)]
#[case(OptionTag::FinishFunctionContext, OptionPayload::Context(CallbackContext::NULL), true)]
#[case(OptionTag::BackgroundColor, OptionPayload::Seconds(1.0), false)]
#[case(OptionTag::DurationBeforeFadeOut, OptionPayload::Color(Color::WHITE), false)]
#[case(OptionTag::FinishFunction, OptionPayload::Context(CallbackContext::NULL), false)]
#[case(OptionTag::FinishFunctionContext, OptionPayload::Callback(None), false)]
fn from_parts_checks_payload_shape(
	#[case] tag: OptionTag,
	#[case] payload: OptionPayload,
	#[case] accepted: bool,
) {
	let value = DefaultValue::from_parts(tag, payload);
	assert_eq!(value.is_some(), accepted);
	if let Some(value) = value {
		assert_eq!(value.tag(), tag);
	}
}
