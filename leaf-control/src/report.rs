//! Human readable rendering of what the device reports.

use std::fmt::Write;

use leaf_control_lib::control_interface::state::{
    PanelInfo, PanelLayout, RangedValue, RhythmInfo, StateInfo,
};

fn ranged(value: &RangedValue) -> String {
    format!("{} ({}-{})", value.value, value.min, value.max)
}

pub fn render_state(state: &StateInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Power: {}", if state.on.value { "on" } else { "off" });
    let _ = writeln!(out, "Brightness: {}", ranged(&state.brightness));
    let _ = writeln!(out, "Hue: {}", ranged(&state.hue));
    let _ = writeln!(out, "Saturation: {}", ranged(&state.saturation));
    let _ = writeln!(out, "Color temperature: {}", ranged(&state.color_temperature));
    if !state.color_mode.is_empty() {
        let _ = writeln!(out, "Color mode: {}", state.color_mode);
    }
    out
}

pub fn render_layout(layout: &PanelLayout) -> String {
    let panels = &layout.layout.position_data;
    let headers = ["Panel ID", "X", "Y", "Rotation", "Shape"];
    let rows: Vec<[String; 5]> = panels
        .iter()
        .map(|panel| {
            [
                panel.panel_id.to_string(),
                panel.x.to_string(),
                panel.y.to_string(),
                panel.orientation.to_string(),
                panel.shape_type.to_string(),
            ]
        })
        .collect();

    // Every column is as wide as its widest cell, plus some padding.
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(headers[i].len()))
                .max()
                .unwrap_or(0)
                + 2
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Panels: {}, side length: {}, global orientation: {}",
        layout.layout.num_panels,
        layout.layout.side_length,
        ranged(&layout.global_orientation)
    );
    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<String>()
            .trim_end()
            .to_string()
    };
    let _ = writeln!(out, "{}", line(headers.to_vec()));
    let separators: Vec<String> = widths.iter().map(|width| "-".repeat(width - 2)).collect();
    let _ = writeln!(
        out,
        "{}",
        line(separators.iter().map(String::as_str).collect())
    );
    for row in &rows {
        let _ = writeln!(out, "{}", line(row.iter().map(String::as_str).collect()));
    }
    out
}

fn render_rhythm(rhythm: &RhythmInfo) -> String {
    let mut out = String::new();
    if !rhythm.rhythm_connected {
        let _ = writeln!(out, "Rhythm module: not connected");
        return out;
    }
    let _ = writeln!(out, "Rhythm module: connected");
    if let Some(active) = rhythm.rhythm_active {
        let _ = writeln!(out, "  Active: {}", active);
    }
    if let Some(id) = rhythm.rhythm_id {
        let _ = writeln!(out, "  ID: {}", id);
    }
    if let Some(version) = &rhythm.hardware_version {
        let _ = writeln!(out, "  Hardware version: {}", version);
    }
    if let Some(version) = &rhythm.firmware_version {
        let _ = writeln!(out, "  Firmware version: {}", version);
    }
    if let Some(aux) = rhythm.aux_available {
        let _ = writeln!(out, "  Aux input available: {}", aux);
    }
    if let Some(mode) = rhythm.rhythm_mode {
        let _ = writeln!(out, "  Mode: {}", mode);
    }
    if let Some(pos) = &rhythm.rhythm_pos {
        let _ = writeln!(
            out,
            "  Position: x={} y={} rotation={}",
            pos.x, pos.y, pos.orientation
        );
    }
    out
}

pub fn render_panel_info(info: &PanelInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", info.name);
    let _ = writeln!(out, "Manufacturer: {}", info.manufacturer);
    let _ = writeln!(out, "Model: {}", info.model);
    let _ = writeln!(out, "Serial number: {}", info.serial_no);
    let _ = writeln!(out, "Firmware version: {}", info.firmware_version);
    let _ = writeln!(out);
    out.push_str(&render_state(&info.state));
    let _ = writeln!(out);
    let _ = writeln!(out, "Selected effect: {}", info.effects.selected);
    let _ = writeln!(out, "Installed effects: {}", info.effects.list.len());
    for name in &info.effects.list {
        let _ = writeln!(out, "  {}", name);
    }
    let _ = writeln!(out);
    out.push_str(&render_layout(&info.panel_layout));
    if let Some(rhythm) = &info.rhythm {
        let _ = writeln!(out);
        out.push_str(&render_rhythm(rhythm));
    }
    out
}

/// Pretty prints the raw document when it is JSON, passes it through otherwise.
pub fn render_raw_json(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL_INFO: &str = r#"{
        "name": "Hallway",
        "serialNo": "S1",
        "manufacturer": "Nanoleaf",
        "firmwareVersion": "3.1.0",
        "model": "NL29",
        "state": {
            "on": {"value": true},
            "brightness": {"value": 70, "max": 100, "min": 0},
            "hue": {"value": 200, "max": 360, "min": 0},
            "sat": {"value": 50, "max": 100, "min": 0},
            "ct": {"value": 3000, "max": 6500, "min": 1200},
            "colorMode": "hs"
        },
        "effects": {"select": "Forest", "effectsList": ["Flames", "Forest"]},
        "panelLayout": {
            "layout": {
                "numPanels": 2,
                "sideLength": 100,
                "positionData": [
                    {"panelId": 1234, "x": 0, "y": 0, "o": 0, "shapeType": 2},
                    {"panelId": 7, "x": 100, "y": -50, "o": 270, "shapeType": 2}
                ]
            },
            "globalOrientation": {"value": 90, "max": 360, "min": 0}
        },
        "rhythm": {
            "rhythmConnected": true,
            "rhythmActive": true,
            "hardwareVersion": "2.4",
            "rhythmPos": {"x": 1.5, "y": 2.0, "o": 180.0}
        }
    }"#;

    fn panel_info() -> PanelInfo {
        serde_json::from_str(PANEL_INFO).unwrap()
    }

    #[test]
    fn test_render_state() {
        let out = render_state(&panel_info().state);
        assert!(out.contains("Power: on\n"));
        assert!(out.contains("Brightness: 70 (0-100)\n"));
        assert!(out.contains("Color temperature: 3000 (1200-6500)\n"));
        assert!(out.contains("Color mode: hs\n"));
    }

    #[test]
    fn test_render_layout_aligns_columns() {
        let out = render_layout(&panel_info().panel_layout);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Panels: 2, side length: 100, global orientation: 90 (0-360)"
        );
        assert_eq!(lines[1], "Panel ID  X    Y    Rotation  Shape");
        assert_eq!(lines[2], "--------  ---  ---  --------  -----");
        assert_eq!(lines[3], "1234      0    0    0         2");
        assert_eq!(lines[4], "7         100  -50  270       2");
    }

    #[test]
    fn test_render_panel_info() {
        let out = render_panel_info(&panel_info());
        assert!(out.starts_with("Name: Hallway\n"));
        assert!(out.contains("Firmware version: 3.1.0\n"));
        assert!(out.contains("Selected effect: Forest\n"));
        assert!(out.contains("  Flames\n"));
        assert!(out.contains("Rhythm module: connected\n"));
        assert!(out.contains("  Position: x=1.5 y=2 rotation=180\n"));
        assert!(!out.contains("  ID:"));
    }

    #[test]
    fn test_render_raw_json() {
        assert_eq!(render_raw_json(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
        assert_eq!(render_raw_json("not json"), "not json");
    }
}
