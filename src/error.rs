//! # 错误类型模块
//!
//! 定义核心隐写操作可能返回的所有结构化错误。
//! 每个变体都携带出错的具体数值，方便调用方生成面向用户的提示信息。

use thiserror::Error;

/// 核心隐写操作的错误分类。
///
/// 核心从不在内部捕获或恢复这些错误，全部原样返回给直接调用方。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 图像的颜色模式没有已知的每像素字节数映射（如灰度、调色板、CMYK）。
    #[error("Unsupported color mode '{mode}'. Only RGB and RGBA images are supported.")]
    UnsupportedFormat { mode: String },

    /// 转写后的消息所需的位数超过了图像的隐写容量。
    #[error(
        "The message is too long to be encoded in this image. \nRequired: {required_bits} bits, Available: {available_bits} bits. \nTry choosing a shorter message or a bigger image."
    )]
    MessageTooLarge {
        required_bits: usize,
        available_bits: usize,
    },

    /// 像素缓冲区的长度无法被整除为完整像素，说明缓冲区与颜色模式不匹配。
    #[error(
        "Pixel buffer of {len} bytes does not divide into whole {bytes_per_pixel}-byte pixels."
    )]
    MalformedBuffer { len: usize, bytes_per_pixel: usize },
}
