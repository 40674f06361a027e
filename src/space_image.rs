/// One layer of the transmitted image: width * height pixel digits.
pub type Layer = Vec<u8>;

/// Split the digit stream into layers of the given dimensions. A trailing
/// partial layer (line noise) is dropped.
pub fn parse_layers(text: &str, width: usize, height: usize) -> Vec<Layer> {
    let digits: Vec<u8> = text
        .trim()
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    digits
        .chunks_exact(width * height)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Transmission checksum: on the layer with the fewest 0 digits, the number
/// of 1 digits times the number of 2 digits.
pub fn checksum(layers: &[Layer]) -> usize {
    let count = |layer: &Layer, digit: u8| layer.iter().filter(|&&d| d == digit).count();
    layers
        .iter()
        .min_by_key(|layer| count(layer, 0))
        .map(|layer| count(layer, 1) * count(layer, 2))
        .unwrap_or(0)
}

/// Stack the layers front to back: 2 is transparent, the first opaque digit
/// wins. White (1) renders as '*', black (0) as a space.
pub fn composite(layers: &[Layer], width: usize, height: usize) -> String {
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            let pixel = layers
                .iter()
                .map(|layer| layer[index])
                .find(|&digit| digit != 2)
                .unwrap_or(2);
            out.push(if pixel == 1 { '*' } else { ' ' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layers() {
        let layers = parse_layers("123456789012", 3, 2);
        assert_eq!(layers, vec![vec![1, 2, 3, 4, 5, 6], vec![7, 8, 9, 0, 1, 2]]);
    }

    #[test]
    fn test_checksum_picks_layer_with_fewest_zeroes() {
        let layers = parse_layers("123456789012", 3, 2);
        // First layer has no zeroes: one 1 times one 2.
        assert_eq!(checksum(&layers), 1);
    }

    #[test]
    fn test_composite_transparency() {
        // Documented 2x2 example: decodes to black/white on the diagonal.
        let layers = parse_layers("0222112222120000", 2, 2);
        assert_eq!(composite(&layers, 2, 2), " *\n* \n");
    }
}
