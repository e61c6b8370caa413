// Color types and the RGB to HSL conversion the panels expect.
pub mod led_color;
