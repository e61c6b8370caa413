//! # Leaf Control Library
//!
//! `leaf-control-lib` talks to light panels over their local network API. It provides
//! a client for the REST endpoints (power, color, brightness, color temperature,
//! effects and panel introspection) and the UDP "external control" stream used to
//! color individual panels.
//!
//! The library never prints. Errors are returned as [Error] and left to the caller
//! to present. A client created with `verbose` set logs its requests and responses
//! through the `log` facade.
//!
//! ## Example
//!
//! ```no_run
//! use leaf_control_lib::control_interface::ControlInterface;
//! use leaf_control_lib::led::led_color::RGB;
//! use leaf_control_lib::util::endpoint::DeviceEndpoint;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = DeviceEndpoint::parse("192.168.1.20:16021", "my-access-token")?;
//!     let control = ControlInterface::new(endpoint, false)?;
//!
//!     control.turn_on().await?;
//!     control.set_rgb(RGB { red: 255, green: 120, blue: 0 }).await?;
//!     for effect in control.list_effects().await? {
//!         println!("{}", effect);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Disclaimer
//!
//! This project is not affiliated with, authorized by, endorsed by, or in any way officially connected
//! with Nanoleaf or its affiliates.
//!
//! ## License
//!
//! This project is dual-licensed under the MIT License and the Apache License, Version 2.0.
//! You may choose to use either license, depending on your project needs.

// The `control_interface` module holds the device client and the JSON shapes of
// the REST API.
pub mod control_interface;

// The `error` module defines the error every fallible operation returns.
pub mod error;

// The `led` module contains the color types and the RGB to HSL conversion the
// device expects.
pub mod led;

// The `util` module provides the device endpoint, the external control frame
// encoding and the range checks callers apply to user input.
pub mod util;

pub use error::{Error, Result};
