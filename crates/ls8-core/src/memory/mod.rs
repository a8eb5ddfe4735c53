//! Flat 256-byte memory with wraparound addressing.

use crate::fault::ImageError;

/// Size in bytes of the flat architectural address space.
pub const ADDRESS_SPACE_BYTES: usize = u8::MAX as usize + 1;

/// Byte-addressable store shared by program, data and stack.
///
/// Addresses are `u8`, so every access already lies inside the address space
/// and arithmetic on addresses wraps modulo 256.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Memory {
    bytes: [u8; ADDRESS_SPACE_BYTES],
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            bytes: [0; ADDRESS_SPACE_BYTES],
        }
    }
}

impl Memory {
    /// Reads the byte at `address`.
    #[must_use]
    pub const fn read(&self, address: u8) -> u8 {
        self.bytes[address as usize]
    }

    /// Writes `value` at `address`.
    pub const fn write(&mut self, address: u8, value: u8) {
        self.bytes[address as usize] = value;
    }

    /// Copies `image` into memory starting at address 0.
    ///
    /// Bytes past the end of the image keep their current value.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::TooLarge`] when the image does not fit the
    /// address space; memory is left untouched in that case.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), ImageError> {
        if image.len() > ADDRESS_SPACE_BYTES {
            return Err(ImageError::TooLarge {
                len: image.len(),
                capacity: ADDRESS_SPACE_BYTES,
            });
        }

        self.bytes[..image.len()].copy_from_slice(image);
        log::debug!("loaded {} byte image at address 0x00", image.len());
        Ok(())
    }

    /// Returns the full memory contents in address order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_SPACE_BYTES] {
        &self.bytes
    }
}

impl TryFrom<Vec<u8>> for Memory {
    type Error = ImageError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let bytes: [u8; ADDRESS_SPACE_BYTES] =
            bytes
                .try_into()
                .map_err(|rejected: Vec<u8>| ImageError::LengthMismatch {
                    len: rejected.len(),
                    expected: ADDRESS_SPACE_BYTES,
                })?;
        Ok(Self { bytes })
    }
}

impl From<Memory> for Vec<u8> {
    fn from(memory: Memory) -> Self {
        memory.bytes.to_vec()
    }
}
