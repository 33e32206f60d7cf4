//! Pointer binding for the human paddle
//!
//! The pointer's vertical position becomes the paddle center, clamped to the
//! field. No smoothing or inertia.

use crate::sim::state::{Paddle, PlayField, clamp_paddle_y};

/// Convert a client-space pointer y into field coordinates.
///
/// `rect_top` and `rect_height` describe the field's on-screen box; a canvas
/// drawn at its native size maps one to one.
pub fn client_to_field_y(client_y: f32, rect_top: f32, rect_height: f32, field: &PlayField) -> f32 {
    let local = client_y - rect_top;
    if rect_height > 0.0 {
        local * field.height / rect_height
    } else {
        local
    }
}

/// Paddle top edge for a pointer at `pointer_y` (field coordinates)
pub fn paddle_y_for_pointer(pointer_y: f32, paddle_height: f32, field: &PlayField) -> f32 {
    clamp_paddle_y(pointer_y - paddle_height / 2.0, paddle_height, field)
}

/// Move the human paddle under the pointer
pub fn bind_pointer(paddle: &mut Paddle, pointer_y: f32, field: &PlayField) {
    paddle.y = paddle_y_for_pointer(pointer_y, paddle.height, field);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: PlayField = PlayField {
        width: 800.0,
        height: 400.0,
    };

    #[test]
    fn test_pointer_centers_paddle() {
        assert_eq!(paddle_y_for_pointer(200.0, 100.0, &FIELD), 150.0);
    }

    #[test]
    fn test_pointer_clamped_to_field() {
        assert_eq!(paddle_y_for_pointer(20.0, 100.0, &FIELD), 0.0);
        assert_eq!(paddle_y_for_pointer(-500.0, 100.0, &FIELD), 0.0);
        assert_eq!(paddle_y_for_pointer(390.0, 100.0, &FIELD), 300.0);
    }

    #[test]
    fn test_client_to_field_native_size() {
        assert_eq!(client_to_field_y(250.0, 50.0, 400.0, &FIELD), 200.0);
    }

    #[test]
    fn test_client_to_field_scaled_canvas() {
        // Canvas shown at half size
        assert_eq!(client_to_field_y(150.0, 50.0, 200.0, &FIELD), 200.0);
        // Degenerate box passes through
        assert_eq!(client_to_field_y(150.0, 50.0, 0.0, &FIELD), 100.0);
    }
}
