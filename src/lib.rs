//! # lsb_text 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：
//! 在已解码的像素缓冲区中隐藏文本消息、恢复消息、
//! 计算隐写容量以及汇总图像元数据。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod color;
pub mod constants;
pub mod error;
pub mod handler;
pub mod info;
pub mod steganography;
