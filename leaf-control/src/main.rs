use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use leaf_control_lib::control_interface::state::PanelInfoDocument;
use leaf_control_lib::control_interface::ControlInterface;
use leaf_control_lib::led::led_color::{Hsl, RGB};
use leaf_control_lib::util::external_control::CustomColorFrame;
use leaf_control_lib::util::ranges;

use crate::config::Config;

mod config;
mod report;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    handle_cli(cli).await
}

/// This struct defines the command line interface of the application
#[derive(Parser)]
#[clap(
    name = "leaf",
    about = "Controls light panels over their local network API",
    version
)]
pub struct Cli {
    /// Logs every request and response
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Config file to read instead of ~/.leafrc
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Device host, as name, name:port or [v6]:port
    #[clap(long, global = true, env = "LEAF_HOST")]
    pub host: Option<String>,

    /// Access token issued by the device
    #[clap(long, global = true, env = "LEAF_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

fn parse_hue(s: &str) -> Result<u16, String> {
    ranges::parse("hue", s, &ranges::HUE).map_err(|e| e.to_string())
}

fn parse_saturation(s: &str) -> Result<u8, String> {
    ranges::parse("saturation", s, &ranges::SATURATION).map_err(|e| e.to_string())
}

fn parse_lightness(s: &str) -> Result<u8, String> {
    ranges::parse("lightness", s, &ranges::LIGHTNESS).map_err(|e| e.to_string())
}

fn parse_brightness(s: &str) -> Result<u8, String> {
    ranges::parse("brightness", s, &ranges::BRIGHTNESS).map_err(|e| e.to_string())
}

fn parse_color_temperature(s: &str) -> Result<u16, String> {
    ranges::parse("color temperature", s, &ranges::COLOR_TEMPERATURE).map_err(|e| e.to_string())
}

/// Subcommands available for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Turns the panels on.
    On,
    /// Turns the panels off.
    Off,
    /// Sets hue, saturation and lightness.
    Hsl {
        /// Hue (0-360)
        #[clap(value_parser = parse_hue)]
        hue: u16,
        /// Saturation (0-100)
        #[clap(value_parser = parse_saturation)]
        saturation: u8,
        /// Lightness, sent as brightness (0-100)
        #[clap(value_parser = parse_lightness)]
        lightness: u8,
    },
    /// Sets a color given as red, green and blue.
    Rgb {
        /// Red component of the color (0-255)
        red: u8,
        /// Green component of the color (0-255)
        green: u8,
        /// Blue component of the color (0-255)
        blue: u8,
    },
    /// Sets the color temperature.
    Temp {
        /// Kelvin (1200-6500)
        #[clap(value_parser = parse_color_temperature)]
        kelvin: u16,
    },
    /// Sets the brightness.
    Brightness {
        /// Brightness (0-100)
        #[clap(value_parser = parse_brightness)]
        brightness: u8,
        /// Fade over this many tenths of a second
        #[clap(long)]
        duration: Option<u16>,
    },
    /// Lists, selects or streams effects.
    Effect {
        #[clap(subcommand)]
        action: EffectAction,
    },
    /// Queries the panels.
    Panel {
        #[clap(subcommand)]
        query: PanelQuery,
    },
}

#[derive(Subcommand)]
pub enum EffectAction {
    /// Lists the installed effects.
    List,
    /// Activates an installed effect.
    Select {
        /// Effect name, as listed
        name: String,
    },
    /// Sets panel colors directly through external control.
    Custom {
        /// Groups of five: panel id, red, green, blue, transition time in tenths of a second
        #[clap(allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum PanelQuery {
    /// Prints a report of the whole device.
    Info,
    /// Prints the device document as JSON.
    #[clap(name = "info_json")]
    InfoJson,
    /// Prints the model number.
    Model,
    /// Prints the device name.
    Name,
    /// Prints the firmware version.
    Version,
    /// Prints the current state with its bounds.
    State,
    /// Prints the panel layout.
    Layout,
}

/// Turns `panel r g b transition` groups into frames.
fn parse_custom_frames(values: &[String]) -> Result<Vec<CustomColorFrame>> {
    if values.len() % 5 != 0 {
        return Err(anyhow!(
            "Custom colors take groups of five values (panel red green blue transition), got {} values",
            values.len()
        ));
    }

    values
        .chunks(5)
        .map(|group| -> Result<CustomColorFrame> {
            Ok(CustomColorFrame::new(
                ranges::parse("panel id", &group[0], &ranges::PANEL_ID)?,
                ranges::parse("red", &group[1], &ranges::COLOR_CHANNEL)?,
                ranges::parse("green", &group[2], &ranges::COLOR_CHANNEL)?,
                ranges::parse("blue", &group[3], &ranges::COLOR_CHANNEL)?,
                ranges::parse("transition time", &group[4], &ranges::TRANSITION_TIME)?,
            ))
        })
        .collect()
}

/// Renders one `panel` query, decoding the document unless it's wanted raw.
fn render_panel_query(query: &PanelQuery, document: &PanelInfoDocument) -> Result<String> {
    let info = || document.parse().context("Failed to decode panel info");
    Ok(match query {
        PanelQuery::InfoJson => format!("{}\n", report::render_raw_json(document.raw())),
        PanelQuery::Info => report::render_panel_info(&info()?),
        PanelQuery::Model => format!("{}\n", info()?.model),
        PanelQuery::Name => format!("{}\n", info()?.name),
        PanelQuery::Version => format!("{}\n", info()?.firmware_version),
        PanelQuery::State => report::render_state(&info()?.state),
        PanelQuery::Layout => report::render_layout(&info()?.panel_layout),
    })
}

async fn handle_cli(cli: Cli) -> Result<()> {
    let endpoint = Config::load_or_default(cli.config.as_deref())?.endpoint(cli.host, cli.token)?;
    if cli.verbose {
        info!("Host: {}", endpoint.authority());
    }
    let control_interface = ControlInterface::new(endpoint, cli.verbose)?;

    match cli.command {
        Commands::On => control_interface.turn_on().await.context("Failed to turn on")?,
        Commands::Off => control_interface.turn_off().await.context("Failed to turn off")?,
        Commands::Hsl {
            hue,
            saturation,
            lightness,
        } => {
            control_interface
                .set_hsl(Hsl {
                    hue,
                    saturation,
                    lightness,
                })
                .await
                .context("Failed to set HSL")?;
        }
        Commands::Rgb { red, green, blue } => {
            control_interface
                .set_rgb(RGB { red, green, blue })
                .await
                .context("Failed to set RGB")?;
        }
        Commands::Temp { kelvin } => {
            control_interface
                .set_color_temperature(kelvin)
                .await
                .context("Failed to set color temperature")?;
        }
        Commands::Brightness {
            brightness,
            duration,
        } => {
            let result = match duration {
                Some(duration) => {
                    control_interface
                        .set_brightness_with_duration(brightness, duration)
                        .await
                }
                None => control_interface.set_brightness(brightness).await,
            };
            result.context("Failed to set brightness")?;
        }
        Commands::Effect { action } => match action {
            EffectAction::List => {
                let effects = control_interface
                    .list_effects()
                    .await
                    .context("Failed to retrieve effects list")?;
                for name in effects {
                    println!("{}", name);
                }
            }
            EffectAction::Select { name } => {
                control_interface
                    .select_effect(&name)
                    .await
                    .context("Failed to select effect")?;
            }
            EffectAction::Custom { values } => {
                let frames = parse_custom_frames(&values)?;
                control_interface
                    .set_custom_colors(&frames)
                    .await
                    .context("Failed to set custom colors")?;
            }
        },
        Commands::Panel { query } => {
            let document = control_interface
                .get_panel_info_document()
                .await
                .context("Failed to retrieve panel info")?;
            print!("{}", render_panel_query(&query, &document)?);
        }
    }

    Ok(())
}
