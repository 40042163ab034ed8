//! Color schemes from ColorBrewer and Tableau

use super::ColorStopsInterpolator;

const GREENS: [&[u32]; 7] = [
    &[0xe5f5e0, 0xa1d99b, 0x31a354],
    &[0xedf8e9, 0xbae4b3, 0x74c476, 0x238b45],
    &[0xedf8e9, 0xbae4b3, 0x74c476, 0x31a354, 0x006d2c],
    &[0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x31a354, 0x006d2c],
    &[0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x005a32],
    &[
        0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x005a32,
    ],
    &[
        0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b,
    ],
];

const TABLEAU10: [u32; 10] = [
    0x4e79a7, 0xf28e2c, 0xe15759, 0x76b7b2, 0x59a14f, 0xedc949, 0xaf7aa1, 0xff9da7, 0x9c755f,
    0xbab0ab,
];

/// Opaque color from a packed `0xrrggbb` value
pub fn rgb_hex(rgb: u32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// The sequential Greens scheme with `k` classes, for `k` in 3..=9
pub fn greens(k: usize) -> Option<Vec<[f32; 4]>> {
    let colors = GREENS.get(k.checked_sub(3)?)?;
    Some(colors.iter().map(|c| rgb_hex(*c)).collect())
}

/// Continuous ramp through the nine class Greens scheme
pub fn interpolate_greens() -> ColorStopsInterpolator {
    let colors: Vec<[f32; 4]> = GREENS[6].iter().map(|c| rgb_hex(*c)).collect();
    ColorStopsInterpolator::new(&colors)
}

/// The ten color categorical Tableau scheme
pub fn tableau10() -> Vec<[f32; 4]> {
    TABLEAU10.iter().map(|c| rgb_hex(*c)).collect()
}
