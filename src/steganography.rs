//! # 隐写核心模块
//!
//! 在已解码的像素缓冲区上实现 LSB (最低有效位) 隐写：
//! 计算容量、嵌入消息、提取消息。
//! 本模块不做任何 I/O，缓冲区的来源与去向由调用方负责。

use crate::codec;
use crate::color::ColorMode;
use crate::constants::{BITS_PER_CHAR, LSB_CLEAR_MASK};
use crate::error::StegoError;

/// 计算给定尺寸和颜色模式的图像最多能编码多少个字符。
///
/// 采用向下取整的整数除法：`width * height * bytes_per_pixel / 8`。
/// 刻意舍弃不足一个字符的零头，保证每个嵌入的 bit 都有对应的像素字节。
pub fn capacity(width: u32, height: u32, mode: ColorMode) -> usize {
    (width as usize) * (height as usize) * mode.bytes_per_pixel() / BITS_PER_CHAR
}

/// 将消息嵌入像素缓冲区，返回一个全新的缓冲区。
///
/// 先将每个字节的 LSB 归零，再把消息的位序列依次写入前
/// `bits.len()` 个字节的 LSB。消息之后的字节保持 LSB 为零，
/// 这段连续的零位串就是解码时定位消息结尾的哨兵，
/// 其后不得再写入任何数据。输入缓冲区不会被修改。
///
/// # Errors
///
/// * [`StegoError::MalformedBuffer`] - 缓冲区长度无法整除为完整像素。
/// * [`StegoError::MessageTooLarge`] - 消息位数超过图像容量，
///   此时不写入任何数据（绝不静默截断）。
pub fn encode(buffer: &[u8], mode: ColorMode, message: &str) -> Result<Vec<u8>, StegoError> {
    if buffer.len() % mode.bytes_per_pixel() != 0 {
        return Err(StegoError::MalformedBuffer {
            len: buffer.len(),
            bytes_per_pixel: mode.bytes_per_pixel(),
        });
    }

    // 缓冲区长度恒等于 width * height * bytes_per_pixel，
    // 因此按长度折算的容量与按尺寸计算的容量一致。
    let capacity_chars = buffer.len() / BITS_PER_CHAR;
    let available_bits = capacity_chars * BITS_PER_CHAR;

    let bits = codec::text_to_bits(message);
    if bits.len() > available_bits {
        return Err(StegoError::MessageTooLarge {
            required_bits: bits.len(),
            available_bits,
        });
    }

    let mut encoded: Vec<u8> = buffer.iter().map(|byte| byte & LSB_CLEAR_MASK).collect();
    for (byte, bit) in encoded.iter_mut().zip(&bits) {
        *byte |= bit;
    }

    Ok(encoded)
}

/// 从像素缓冲区中提取隐藏的消息。
///
/// 按缓冲区顺序收集每个字节的 LSB，交给位解码器还原文本。
/// LSB 的提取与颜色模式无关，因此无需传入模式。
/// 本操作永不失败：未经编码的图像会解码出空串或噪声文本。
pub fn decode(buffer: &[u8]) -> String {
    let bits: Vec<u8> = buffer.iter().map(|byte| byte & 1).collect();
    codec::bits_to_text(&bits)
}
