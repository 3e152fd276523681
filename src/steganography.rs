use image::RgbImage;
use thiserror::Error;

use crate::constants::{BITS_PER_PIXEL, TERMINATOR, TERMINATOR_BITS};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "The message requires {required} bits but the image can only hold {available} bits."
)]
pub struct CapacityError {
    pub required: usize,
    pub available: usize,
}

pub fn capacity_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * BITS_PER_PIXEL
}

pub fn fits(bitstream_len: usize, width: u32, height: u32) -> bool {
    bitstream_len <= capacity_bits(width, height)
}

pub fn hide(image: &mut RgbImage, message: &[u8]) -> Result<(), CapacityError> {
    let required = message.len() * 8 + TERMINATOR_BITS;
    if !fits(required, image.width(), image.height()) {
        return Err(CapacityError {
            required,
            available: capacity_bits(image.width(), image.height()),
        });
    }

    // Message bytes MSB first, then the terminator pattern.
    let mut bits = message
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .chain((0..TERMINATOR_BITS).rev().map(|i| ((TERMINATOR >> i) & 1) as u8));

    // pixels_mut() walks the buffer row by row; channels are visited R, G, B.
    // Extraction depends on exactly this order.
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            match bits.next() {
                Some(bit) => *channel = (*channel & !1) | bit,
                None => return Ok(()),
            }
        }
    }

    Ok(())
}

pub fn reveal(image: &RgbImage) -> Option<Vec<u8>> {
    let mut bits: Vec<u8> = Vec::new();
    let mut window: u16 = 0;

    for pixel in image.pixels() {
        for &channel in pixel.0.iter() {
            let bit = channel & 1;
            bits.push(bit);
            window = (window << 1) | bit as u16;

            // The terminator may start at any bit offset, so the rolling
            // window is checked after every appended bit.
            if bits.len() >= TERMINATOR_BITS && window == TERMINATOR {
                let payload = &bits[..bits.len() - TERMINATOR_BITS];
                return Some(
                    payload
                        .chunks_exact(8)
                        .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | bit))
                        .collect(),
                );
            }
        }
    }

    None
}
