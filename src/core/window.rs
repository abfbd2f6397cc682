const X_PADDING_FACTOR: f64 = 1.1;
const Y_PADDING_FACTOR: f64 = 1.2;
const MIN_DRAWABLE_SPAN: f64 = 1.0;

/// Upper ends of the value axes; both axes start at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisBounds {
    pub x_max: f64,
    pub y_max: f64,
}

impl AxisBounds {
    /// Bounds a renderer can divide by: degenerate flights (zero range or
    /// height, NaN from pathological input) fall back to a unit span.
    pub fn drawable(self) -> Self {
        let span = |v: f64| {
            if v.is_finite() && v >= MIN_DRAWABLE_SPAN {
                v
            } else {
                MIN_DRAWABLE_SPAN
            }
        };
        Self {
            x_max: span(self.x_max),
            y_max: span(self.y_max),
        }
    }
}

pub fn padded_axis_bounds(range: f64, max_height: f64) -> AxisBounds {
    AxisBounds {
        x_max: range * X_PADDING_FACTOR,
        y_max: max_height * Y_PADDING_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisBounds, padded_axis_bounds};

    #[test]
    fn pads_range_and_height() {
        let bounds = padded_axis_bounds(40.0, 10.0);
        assert!((bounds.x_max - 44.0).abs() < 1e-9);
        assert!((bounds.y_max - 12.0).abs() < 1e-9);
    }

    #[test]
    fn drawable_keeps_regular_bounds() {
        let bounds = padded_axis_bounds(40.0, 10.0);
        assert_eq!(bounds.drawable(), bounds);
    }

    #[test]
    fn drawable_replaces_degenerate_spans() {
        let bounds = AxisBounds {
            x_max: 0.0,
            y_max: f64::NAN,
        }
        .drawable();
        assert_eq!(bounds.x_max, 1.0);
        assert_eq!(bounds.y_max, 1.0);

        let leftward = padded_axis_bounds(-12.0, 3.0).drawable();
        assert_eq!(leftward.x_max, 1.0);
    }
}
