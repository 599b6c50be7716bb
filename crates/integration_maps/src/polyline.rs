//! Encoded polyline decoding
//!
//! Google's polyline format stores each coordinate as a zig-zag encoded delta
//! from the previous point, scaled by 1e5, in 5-bit chunks offset by 63.

use crate::error::MapsError;
use crate::models::LatLng;

const PRECISION: f64 = 1e5;

/// Decode an encoded polyline into its points
///
/// # Errors
///
/// Returns `MapsError::ParseError` if the string is truncated or contains
/// characters outside the encoding alphabet, or if a coordinate overflows.
pub fn decode(encoded: &str) -> Result<Vec<LatLng>, MapsError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat = accumulate(lat, next_delta(bytes, &mut index)?)?;
        lng = accumulate(lng, next_delta(bytes, &mut index)?)?;
        #[allow(clippy::cast_precision_loss)]
        points.push(LatLng {
            lat: lat as f64 / PRECISION,
            lng: lng as f64 / PRECISION,
        });
    }

    Ok(points)
}

fn accumulate(value: i64, delta: i64) -> Result<i64, MapsError> {
    value
        .checked_add(delta)
        .ok_or_else(|| MapsError::ParseError("Polyline value overflow".to_string()))
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, MapsError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes
            .get(*index)
            .ok_or_else(|| MapsError::ParseError("Truncated polyline".to_string()))?;
        *index += 1;

        let chunk = i64::from(byte)
            .checked_sub(63)
            .filter(|c| (0..64).contains(c))
            .ok_or_else(|| MapsError::ParseError(format!("Invalid polyline byte {byte}")))?;

        if shift > 60 {
            return Err(MapsError::ParseError("Polyline value overflow".to_string()));
        }
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 { !(result >> 1) } else { result >> 1 })
}
