use derivative::Derivative;
use log::info;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::net::{lookup_host, UdpSocket};

use crate::error::{Error, Result};
use crate::led::led_color::{Hsl, RGB};
use crate::util::endpoint::DeviceEndpoint;
use crate::util::external_control::{encode_frames, CustomColorFrame, EXTERNAL_CONTROL_PORT};

use self::state::{
    EffectWriteRequest, PanelInfo, PanelInfoDocument, SelectEffectRequest, StateInfo,
    StateUpdate,
};

pub mod state;

const JSON: &str = "application/json";

/**
Client for one device.

Holds nothing but the endpoint, the verbosity and an HTTP client that keeps no idle
connections, so every operation is one self-contained round trip. Failures are
returned as they happen, nothing is retried.

With `verbose` set, requests and responses are logged at `info` level. Otherwise
the client never logs.
 */
#[derive(Derivative)]
#[derivative(Debug)]
#[derive(Clone)]
pub struct ControlInterface {
    endpoint: DeviceEndpoint,
    verbose: bool,
    external_control_port: u16,
    #[derivative(Debug = "ignore")]
    client: Client,
}

impl ControlInterface {
    pub fn new(endpoint: DeviceEndpoint, verbose: bool) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::http("building the HTTP client", e))?;

        Ok(ControlInterface {
            endpoint,
            verbose,
            external_control_port: EXTERNAL_CONTROL_PORT,
            client,
        })
    }

    /// Sends external control datagrams to `port` instead of the standard one.
    pub fn with_external_control_port(mut self, port: u16) -> Self {
        self.external_control_port = port;
        self
    }

    pub fn endpoint(&self) -> &DeviceEndpoint {
        &self.endpoint
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Performs a GET and returns the body, whatever the status.
    pub async fn get(&self, path: &str) -> Result<String> {
        self.get_with_status(path).await.map(|(_, body)| body)
    }

    async fn get_with_status(&self, path: &str) -> Result<(StatusCode, String)> {
        if self.verbose {
            info!("GET {}", path);
        }

        let action = format!("GET {}", path);
        let response = self
            .client
            .get(self.endpoint.url(path))
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(|e| Error::http(&action, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::http(&action, e))?;

        if self.verbose {
            info!("<=== {}", status);
            info!("<=== {}", body);
        }
        Ok((status, body))
    }

    /**
    Performs a PUT with a JSON body and returns the response body.

    The status isn't inspected, only transport failures are errors. The device
    answers most writes with `204 No Content`.
     */
    pub async fn put(&self, path: &str, body: String) -> Result<String> {
        if self.verbose {
            info!("PUT {}", path);
            info!("===> {}", body);
        }

        let action = format!("PUT {}", path);
        let response = self
            .client
            .put(self.endpoint.url(path))
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::http(&action, e))?;

        let status = response.status();
        let response_body = response.text().await.map_err(|e| Error::http(&action, e))?;

        if self.verbose {
            info!("<=== {}", status);
            if !response_body.is_empty() {
                info!("<=== {}", response_body);
            }
        }
        Ok(response_body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (status, body) = self.get_with_status(path).await?;
        serde_json::from_str(&body).map_err(|source| Error::ResponseDecode {
            path: path.to_string(),
            status: status.as_u16(),
            source,
        })
    }

    async fn put_json<T: Serialize>(&self, path: &str, value: &T) -> Result<String> {
        let body = serde_json::to_string(value).map_err(Error::JsonEncode)?;
        self.put(path, body).await
    }

    /// Sends a sparse state update, untouched properties keep their values.
    pub async fn set_state(&self, update: &StateUpdate) -> Result<()> {
        self.put_json("state", update).await?;
        Ok(())
    }

    pub async fn set_power(&self, on: bool) -> Result<()> {
        self.set_state(&StateUpdate::default().with_power(on)).await
    }

    pub async fn turn_on(&self) -> Result<()> {
        self.set_power(true).await
    }

    pub async fn turn_off(&self) -> Result<()> {
        self.set_power(false).await
    }

    /// Sets hue and saturation, and the lightness as brightness, in one update.
    pub async fn set_hsl(&self, hsl: Hsl) -> Result<()> {
        self.set_state(&StateUpdate::default().with_hsl(hsl)).await
    }

    /// The device has no RGB property, the color goes out as HSL.
    pub async fn set_rgb(&self, rgb: RGB) -> Result<()> {
        self.set_hsl(rgb.into()).await
    }

    /// Helper method to set the device brightness.
    ///
    /// # Arguments
    /// - `brightness`: Range is 0..=100.
    pub async fn set_brightness(&self, brightness: u8) -> Result<()> {
        self.set_state(&StateUpdate::default().with_brightness(brightness, None))
            .await
    }

    /// Fades to `brightness` over `duration` tenths of a second.
    pub async fn set_brightness_with_duration(&self, brightness: u8, duration: u16) -> Result<()> {
        self.set_state(&StateUpdate::default().with_brightness(brightness, Some(duration)))
            .await
    }

    /// Color temperature in Kelvin, range is 1200..=6500.
    pub async fn set_color_temperature(&self, kelvin: u16) -> Result<()> {
        self.set_state(&StateUpdate::default().with_color_temperature(kelvin))
            .await
    }

    pub async fn get_state(&self) -> Result<StateInfo> {
        self.get_json("state").await
    }

    /// Names of the installed effects, in device order.
    pub async fn list_effects(&self) -> Result<Vec<String>> {
        self.get_json("effects/effectsList").await
    }

    pub async fn get_selected_effect(&self) -> Result<String> {
        self.get_json("effects/select").await
    }

    pub async fn select_effect(&self, name: &str) -> Result<()> {
        self.put_json("effects/select", &SelectEffectRequest { select: name })
            .await?;
        Ok(())
    }

    /// Fetches the device root document without decoding it.
    pub async fn get_panel_info_document(&self) -> Result<PanelInfoDocument> {
        self.get("").await.map(PanelInfoDocument::new)
    }

    pub async fn get_panel_info(&self) -> Result<PanelInfo> {
        self.get_panel_info_document().await?.parse()
    }

    /// Switches the active effect to UDP streaming. Safe to repeat.
    pub async fn enable_external_control(&self) -> Result<()> {
        self.put_json("effects", &EffectWriteRequest::external_control())
            .await?;
        Ok(())
    }

    /**
    Sets individual panel colors through external control.

    Enables external control, then writes all frames as one datagram to the device
    on the external control port. Nothing is read back.

    # Errors
    - [Error::TooManyPanels] before anything is sent.
    - Any failure to enable external control, in which case no datagram is sent.
    - Resolve and socket failures.
     */
    pub async fn set_custom_colors(&self, frames: &[CustomColorFrame]) -> Result<()> {
        let datagram = encode_frames(frames)?;

        self.enable_external_control().await?;

        let authority = self.endpoint.authority();
        let mut address = lookup_host(authority.as_str())
            .await
            .map_err(|e| Error::socket("resolve", e))?
            .next()
            .ok_or_else(|| Error::Resolve(authority.clone()))?;
        address.set_port(self.external_control_port);

        let local = if address.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };
        let socket = UdpSocket::bind(local)
            .await
            .map_err(|e| Error::socket("bind", e))?;
        socket
            .connect(address)
            .await
            .map_err(|e| Error::socket("connect", e))?;

        if self.verbose {
            info!("UDP {}", address);
            info!("===> {}", hex::encode(&datagram));
        }

        socket
            .send(&datagram)
            .await
            .map_err(|e| Error::socket("send", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_token() {
        let endpoint = DeviceEndpoint::parse("10.1.1.1:16021", "hunter2").unwrap();
        let control = ControlInterface::new(endpoint, true).unwrap();
        let debug = format!("{:?}", control);
        assert!(debug.contains("10.1.1.1"));
        assert!(debug.contains("verbose: true"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_default_external_control_port() {
        let endpoint = DeviceEndpoint::parse("10.1.1.1", "tok").unwrap();
        let control = ControlInterface::new(endpoint, false).unwrap();
        assert_eq!(control.external_control_port, 60222);
        let control = control.with_external_control_port(4000);
        assert_eq!(control.external_control_port, 4000);
        assert!(!control.is_verbose());
    }
}
