//! Per-kind default values used by the convenience calls.

use notifmod_abi::{CallbackContext, Color, FinishCallback, NotificationKind, OptionTag};

/// Defaults for one notification kind.
#[derive(Debug, Clone, Copy)]
pub struct DefaultValueRecord {
	/// Seconds from creation until the notification fades out.
	pub fade_out_delay: f32,
	/// Seconds an error notification shakes; part of `fade_out_delay`.
	pub shake_duration: f32,
	pub background_color: Color,
	pub text_color: Color,
	pub finish_callback: Option<FinishCallback>,
	pub finish_context: CallbackContext,
}

impl DefaultValueRecord {
	pub const FADE_OUT_DELAY: f32 = 2.0;
	pub const SHAKE_DURATION: f32 = 0.5;

	/// Seed values of `kind`. Only the error kind differs, with a red
	/// background.
	pub const fn seed(kind: NotificationKind) -> Self {
		let background_color = match kind {
			NotificationKind::Error => Color::ERROR_RED,
			NotificationKind::Info | NotificationKind::Dynamic => Color::NEUTRAL_GRAY,
		};
		Self {
			fade_out_delay: Self::FADE_OUT_DELAY,
			shake_duration: Self::SHAKE_DURATION,
			background_color,
			text_color: Color::WHITE,
			finish_callback: None,
			finish_context: CallbackContext::NULL,
		}
	}

	/// Applies a single-field update.
	pub fn apply(&mut self, value: DefaultValue) {
		match value {
			DefaultValue::BackgroundColor(color) => self.background_color = color,
			DefaultValue::TextColor(color) => self.text_color = color,
			DefaultValue::DurationBeforeFadeOut(secs) => self.fade_out_delay = secs,
			DefaultValue::FinishFunction(callback) => self.finish_callback = callback,
			DefaultValue::FinishFunctionContext(context) => self.finish_context = context,
		}
	}
}

/// New value for one field of a [`DefaultValueRecord`].
///
/// Each variant carries the payload type of its option, so a value can
/// never be read back as the wrong type.
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
	BackgroundColor(Color),
	TextColor(Color),
	/// Seconds before fading out.
	DurationBeforeFadeOut(f32),
	FinishFunction(Option<FinishCallback>),
	FinishFunctionContext(CallbackContext),
}

/// Untagged payload for [`DefaultValue::from_parts`].
#[derive(Debug, Clone, Copy)]
pub enum OptionPayload {
	Color(Color),
	Seconds(f32),
	Callback(Option<FinishCallback>),
	Context(CallbackContext),
}

impl DefaultValue {
	pub const fn tag(&self) -> OptionTag {
		match self {
			DefaultValue::BackgroundColor(_) => OptionTag::BackgroundColor,
			DefaultValue::TextColor(_) => OptionTag::TextColor,
			DefaultValue::DurationBeforeFadeOut(_) => OptionTag::DurationBeforeFadeOut,
			DefaultValue::FinishFunction(_) => OptionTag::FinishFunction,
			DefaultValue::FinishFunctionContext(_) => OptionTag::FinishFunctionContext,
		}
	}

	/// Pairs a tag with a payload; `None` if the payload has the wrong shape
	/// for the tag.
	pub const fn from_parts(tag: OptionTag, payload: OptionPayload) -> Option<Self> {
		Some(match (tag, payload) {
			(OptionTag::BackgroundColor, OptionPayload::Color(color)) => DefaultValue::BackgroundColor(color),
			(OptionTag::TextColor, OptionPayload::Color(color)) => DefaultValue::TextColor(color),
			(OptionTag::DurationBeforeFadeOut, OptionPayload::Seconds(secs)) => {
				DefaultValue::DurationBeforeFadeOut(secs)
			}
			(OptionTag::FinishFunction, OptionPayload::Callback(callback)) => DefaultValue::FinishFunction(callback),
			(OptionTag::FinishFunctionContext, OptionPayload::Context(context)) => {
				DefaultValue::FinishFunctionContext(context)
			}
			_ => return None,
		})
	}
}

/// Default-value records keyed by notification kind.
///
/// Records are created lazily from [`DefaultValueRecord::seed`] the first
/// time a kind is referenced.
#[derive(Debug, Default)]
pub struct DefaultStore {
	records: [Option<DefaultValueRecord>; NotificationKind::COUNT],
}

impl DefaultStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the record of `kind`, seeding it on first access.
	pub fn get(&mut self, kind: NotificationKind) -> &DefaultValueRecord {
		self.records[kind.index()].get_or_insert_with(|| DefaultValueRecord::seed(kind))
	}

	/// Returns the record of `kind` if it has been created.
	pub fn peek(&self, kind: NotificationKind) -> Option<&DefaultValueRecord> {
		self.records[kind.index()].as_ref()
	}

	/// Updates one field of the record of `kind`, seeding it first if needed.
	pub fn set(&mut self, kind: NotificationKind, value: DefaultValue) {
		self.records[kind.index()]
			.get_or_insert_with(|| DefaultValueRecord::seed(kind))
			.apply(value);
	}

	/// Creates every record from its seed, dropping previous values.
	pub fn reseed(&mut self) {
		for kind in NotificationKind::ALL {
			self.records[kind.index()] = Some(DefaultValueRecord::seed(kind));
		}
	}

	pub fn clear(&mut self) {
		self.records = Default::default();
	}

	pub fn is_empty(&self) -> bool {
		self.records.iter().all(Option::is_none)
	}
}

#[cfg(test)]
mod tests;
