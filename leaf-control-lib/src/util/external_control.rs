use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The UDP port the device listens on once external control is enabled.
pub const EXTERNAL_CONTROL_PORT: u16 = 60222;

const HEADER_SIZE: usize = 2;
const PANEL_FRAME_SIZE: usize = 8;

/// One panel's entry in an external control datagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomColorFrame {
    pub panel_id: u16,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Unused by current panels, sent as zero unless given.
    pub white: u8,
    /// Tenths of a second.
    pub transition_time: u16,
}

impl CustomColorFrame {
    pub fn new(panel_id: u16, red: u8, green: u8, blue: u8, transition_time: u16) -> Self {
        CustomColorFrame {
            panel_id,
            red,
            green,
            blue,
            white: 0,
            transition_time,
        }
    }

    fn write_to(&self, packet: &mut BytesMut) {
        packet.put_u16(self.panel_id);
        packet.put_u8(self.red);
        packet.put_u8(self.green);
        packet.put_u8(self.blue);
        packet.put_u8(self.white);
        packet.put_u16(self.transition_time);
    }
}

/**
Encodes frames into one external control (v2) datagram.

Layout, big-endian:

| bytes | field                      |
|-------|----------------------------|
| 0..2  | panel count                |
| +0..2 | panel ID                   |
| +2    | red                        |
| +3    | green                      |
| +4    | blue                       |
| +5    | white                      |
| +6..8 | transition time (1/10 sec) |

# Errors
[Error::TooManyPanels] when the count doesn't fit in the 16-bit header.
 */
pub fn encode_frames(frames: &[CustomColorFrame]) -> Result<Bytes> {
    let num_panels =
        u16::try_from(frames.len()).map_err(|_| Error::TooManyPanels(frames.len()))?;

    let mut packet = BytesMut::with_capacity(HEADER_SIZE + PANEL_FRAME_SIZE * frames.len());
    packet.put_u16(num_panels);
    for frame in frames {
        frame.write_to(&mut packet);
    }
    Ok(packet.freeze())
}
