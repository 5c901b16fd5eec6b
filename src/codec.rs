//! # 位编解码模块
//!
//! 负责文本与位序列之间的相互转换。
//! 文本在转换前会被转写为最接近的 ASCII 形式，
//! 保证每个字符都能放进 8 bits。

use crate::constants::BITS_PER_CHAR;
use deunicode::deunicode;

/// 将消息转换为位序列。
///
/// 消息先经 `deunicode` 转写为 7 位 ASCII（去除变音符号、近似非拉丁字符，
/// 这是一次有损的单向归一化），随后每个字符按高位在前展开为 8 bits，
/// 按字符顺序拼接。空消息产生空序列。
pub fn text_to_bits(message: &str) -> Vec<u8> {
    deunicode(message)
        .bytes()
        .flat_map(|byte| (0..BITS_PER_CHAR).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

/// 将位序列还原为文本。
///
/// 序列被切分为连续的 8 位分组（不足 8 位的末尾分组直接丢弃），
/// 每个完整分组解码为一个 ASCII 字符。
/// 遇到第一个全零分组（"没有更多数据" 的哨兵）即停止，
/// 返回哨兵之前解码出的全部内容。
pub fn bits_to_text(bits: &[u8]) -> String {
    let mut message = String::new();

    for group in bits.chunks_exact(BITS_PER_CHAR) {
        let value = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
        if value == 0 {
            break;
        }
        message.push(value as char);
    }

    message
}
