use rand::Rng;

/// Square scalar field drawn as a heat-map.
///
/// Values are stored row-major with row 0 at the bottom of the axes
/// (origin lower-left).
#[derive(Clone, Debug)]
pub struct HeatMap {
    size: usize,
    values: Vec<f32>,
}

impl HeatMap {
    /// Fills a `size x size` field with independent uniform samples in [0, 1).
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let values = (0..size * size).map(|_| rng.random::<f32>()).collect();
        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dimensions(&self) -> [usize; 2] {
        [self.size, self.size]
    }

    #[cfg(test)]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn value(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.size + x]
    }

    /// Colour limits, autoscaled to the data like an image plot does.
    pub fn value_range(&self) -> (f32, f32) {
        let mut min_v = f32::INFINITY;
        let mut max_v = f32::NEG_INFINITY;
        for &value in &self.values {
            min_v = min_v.min(value);
            max_v = max_v.max(value);
        }
        (min_v, max_v)
    }

    /// RGB of the cell at data coordinates `(x, y)`.
    #[cfg(test)]
    pub fn color_at(&self, x: usize, y: usize) -> [u8; 3] {
        let (min_v, max_v) = self.value_range();
        color_for(self.value(x, y), min_v, max_v)
    }

    /// RGBA pixels with the top image row first, ready for a texture upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let (min_v, max_v) = self.value_range();
        let mut rgba = Vec::with_capacity(self.size * self.size * 4);

        for y in (0..self.size).rev() {
            for x in 0..self.size {
                let [r, g, b] = color_for(self.value(x, y), min_v, max_v);
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
        }

        rgba
    }
}

fn color_for(value: f32, min_v: f32, max_v: f32) -> [u8; 3] {
    let span = max_v - min_v;
    let t = if span > 0.0 {
        (value - min_v) / span
    } else {
        0.0
    };
    let [r, g, b] = greens_color(t);
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

/// Sequential white-to-dark-green ramp.
pub fn greens_color(t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    let anchors: [[f32; 3]; 9] = [
        [247.0, 252.0, 245.0],
        [229.0, 245.0, 224.0],
        [199.0, 233.0, 192.0],
        [161.0, 217.0, 155.0],
        [116.0, 196.0, 118.0],
        [65.0, 171.0, 93.0],
        [35.0, 139.0, 69.0],
        [0.0, 109.0, 44.0],
        [0.0, 68.0, 27.0],
    ];

    let scaled = t * (anchors.len() - 1) as f32;
    let lower = (scaled.floor() as usize).min(anchors.len() - 2);
    let alpha = scaled - lower as f32;
    let c0 = anchors[lower];
    let c1 = anchors[lower + 1];

    [
        (c0[0] + (c1[0] - c0[0]) * alpha) / 255.0,
        (c0[1] + (c1[1] - c0[1]) * alpha) / 255.0,
        (c0[2] + (c1[2] - c0[2]) * alpha) / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_field_has_requested_shape_and_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [1, 2, 10, 37] {
            let field = HeatMap::random(size, &mut rng);
            assert_eq!(field.dimensions(), [size, size]);
            assert_eq!(field.values().len(), size * size);
            assert!(field.values().iter().all(|v| (0.0..1.0).contains(v)));
        }
    }

    #[test]
    fn rgba_rows_are_flipped_for_lower_origin() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = HeatMap::random(4, &mut rng);
        let rgba = field.to_rgba8();
        assert_eq!(rgba.len(), 4 * 4 * 4);

        // First texture row is the top data row.
        let [r, g, b] = field.color_at(0, 3);
        assert_eq!(&rgba[0..4], &[r, g, b, 255]);
        let [r, g, b] = field.color_at(3, 0);
        let last = rgba.len() - 4;
        assert_eq!(&rgba[last..], &[r, g, b, 255]);
    }

    #[test]
    fn greens_ramp_goes_from_pale_to_dark() {
        let low = greens_color(0.0);
        let high = greens_color(1.0);
        assert!(low[1] > high[1]);
        assert!((low[0] - 247.0 / 255.0).abs() < 1.0e-6);
        assert!((high[1] - 68.0 / 255.0).abs() < 1.0e-6);
        assert_eq!(greens_color(-3.0), low);
        assert_eq!(greens_color(9.0), high);
    }

    #[test]
    fn constant_field_maps_to_lowest_color() {
        let field = HeatMap {
            size: 2,
            values: vec![0.5; 4],
        };
        let pale = color_for(0.0, 0.0, 1.0);
        assert_eq!(field.color_at(1, 1), pale);
    }
}
