//! JSON shapes of the REST API.
//!
//! Writes and reads are modelled separately: a [StateUpdate] is sparse and carries
//! bare values, a [StateInfo] read back from the device carries every property
//! together with its `min`/`max` bounds.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::led::led_color::Hsl;

/// `{"value": ...}` as sent to the device.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetValue<T> {
    pub value: T,
}

/// Brightness as sent, with an optional transition in tenths of a second.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBrightness {
    pub value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u16>,
}

/**
A sparse state update, sent with `PUT state`.

Only properties that are `Some` are serialized. Everything else is left as it is
on the device, so a hue of `0` or a brightness of `0` is still sent.
 */
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<SetValue<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<SetBrightness>,
    #[serde(rename = "ct", skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<SetValue<u16>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<SetValue<u16>>,
    #[serde(rename = "sat", skip_serializing_if = "Option::is_none")]
    pub saturation: Option<SetValue<u8>>,
}

impl StateUpdate {
    pub fn with_power(mut self, on: bool) -> Self {
        self.on = Some(SetValue { value: on });
        self
    }

    pub fn with_brightness(mut self, value: u8, duration: Option<u16>) -> Self {
        self.brightness = Some(SetBrightness { value, duration });
        self
    }

    pub fn with_color_temperature(mut self, kelvin: u16) -> Self {
        self.color_temperature = Some(SetValue { value: kelvin });
        self
    }

    /// Hue and saturation, with lightness carried in the brightness property.
    pub fn with_hsl(mut self, hsl: Hsl) -> Self {
        self.brightness = Some(SetBrightness {
            value: hsl.lightness,
            duration: None,
        });
        self.hue = Some(SetValue { value: hsl.hue });
        self.saturation = Some(SetValue {
            value: hsl.saturation,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == StateUpdate::default()
    }
}

/// Body of `PUT effects/select`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectEffectRequest<'a> {
    pub select: &'a str,
}

/// Body of `PUT effects` that switches the device into UDP streaming mode.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectWriteRequest {
    pub write: EffectCommand,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EffectCommand {
    pub command: &'static str,
    pub anim_type: &'static str,
    pub ext_control_version: &'static str,
}

impl EffectWriteRequest {
    pub fn external_control() -> Self {
        EffectWriteRequest {
            write: EffectCommand {
                command: "display",
                anim_type: "extControl",
                ext_control_version: "v2",
            },
        }
    }
}

/// `{"value": ..., "min": ..., "max": ...}` as read back.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangedValue {
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnState {
    pub value: bool,
}

/// The full state as reported by the device.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StateInfo {
    pub on: OnState,
    pub brightness: RangedValue,
    pub hue: RangedValue,
    #[serde(rename = "sat")]
    pub saturation: RangedValue,
    #[serde(rename = "ct")]
    pub color_temperature: RangedValue,
    /// `hs`, `ct` or `effect`.
    #[serde(rename = "colorMode", default)]
    pub color_mode: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EffectsInfo {
    #[serde(rename = "select")]
    pub selected: String,
    #[serde(rename = "effectsList", default)]
    pub list: Vec<String>,
}

/// One physical panel.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanelPosition {
    pub panel_id: u16,
    pub x: i32,
    pub y: i32,
    /// Rotation in degrees.
    #[serde(rename = "o")]
    pub orientation: i32,
    pub shape_type: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub num_panels: usize,
    pub side_length: i32,
    pub position_data: Vec<PanelPosition>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanelLayout {
    pub layout: Layout,
    pub global_orientation: RangedValue,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct RhythmPosition {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "o")]
    pub orientation: f64,
}

/**
Status of the sound module.

Devices without one report it as disconnected and leave the rest empty or null,
hence the options.
 */
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RhythmInfo {
    pub rhythm_connected: bool,
    pub rhythm_active: Option<bool>,
    pub rhythm_id: Option<i64>,
    pub hardware_version: Option<String>,
    pub firmware_version: Option<String>,
    pub aux_available: Option<bool>,
    pub rhythm_mode: Option<i64>,
    pub rhythm_pos: Option<RhythmPosition>,
}

/// Everything `GET /` returns.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanelInfo {
    pub name: String,
    pub serial_no: String,
    pub manufacturer: String,
    pub firmware_version: String,
    pub model: String,
    pub state: StateInfo,
    pub effects: EffectsInfo,
    pub panel_layout: PanelLayout,
    #[serde(default)]
    pub rhythm: Option<RhythmInfo>,
}

/**
The raw `GET /` document.

Kept as text so callers can still show it when it doesn't decode into [PanelInfo].
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelInfoDocument {
    raw: String,
}

impl PanelInfoDocument {
    pub fn new(raw: String) -> Self {
        PanelInfoDocument { raw }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }

    pub fn parse(&self) -> Result<PanelInfo> {
        serde_json::from_str(&self.raw).map_err(Error::JsonDecode)
    }
}
