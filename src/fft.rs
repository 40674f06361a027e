/// Digits of a transmitted signal.
pub fn parse_signal(text: &str) -> Vec<i32> {
    text.trim()
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| (b - b'0') as i32)
        .collect()
}

/// One phase of the flawed frequency transmission: output digit i is the
/// last digit of the signal dotted with the base pattern 0, 1, 0, -1
/// stretched i + 1 times and shifted left by one.
pub fn fft_phase(signal: &[i32]) -> Vec<i32> {
    (0..signal.len())
        .map(|i| {
            let mut sum: i64 = 0;
            for (j, &digit) in signal.iter().enumerate() {
                // Pattern value for position j: index (j+1)/(i+1) into the
                // base cycle.
                match (j + 1) / (i + 1) % 4 {
                    1 => sum += digit as i64,
                    3 => sum -= digit as i64,
                    _ => {}
                }
            }
            (sum.abs() % 10) as i32
        })
        .collect()
}

/// Run the given number of phases and return the final signal.
pub fn fft(signal: &[i32], phases: usize) -> Vec<i32> {
    let mut current = signal.to_vec();
    for _ in 0..phases {
        current = fft_phase(&current);
    }
    current
}

/// The conventional eight-digit readout of a signal prefix.
pub fn first_eight(signal: &[i32]) -> String {
    signal.iter().take(8).map(|d| d.to_string()).collect()
}

/// Decode the real signal: the input repeated 10 000 times, with the
/// message found at the offset named by the first seven digits.
///
/// The offset always lands in the back half, where every pattern
/// coefficient is 1: each output digit is just a suffix sum mod 10, so a
/// phase is one reverse sweep over the tail.
pub fn decode_at_offset(signal: &[i32], phases: usize) -> String {
    let offset = signal[..7].iter().fold(0usize, |acc, &d| acc * 10 + d as usize);
    let total = signal.len() * 10_000;
    debug_assert!(offset >= total / 2, "offset must fall in the back half");

    let mut tail: Vec<i32> = (offset..total).map(|i| signal[i % signal.len()]).collect();
    for _ in 0..phases {
        let mut sum: i64 = 0;
        for digit in tail.iter_mut().rev() {
            sum += *digit as i64;
            *digit = (sum % 10) as i32;
        }
    }
    first_eight(&tail)
}
