/// 反覆加總十進位數字直到結果 ≤ 9。0 仍回傳 0。
pub fn reduce_to_single_digit(mut value: u64) -> u8 {
    while value > 9 {
        value = digit_sum(value);
    }
    value as u8
}

fn digit_sum(mut value: u64) -> u64 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}
