//! # 图像信息模块
//!
//! 汇总一张已加载图像的描述性元数据，供展示与编码前的预检使用。
//! 文件系统事实（路径、文件大小、格式标签）由调用方提供，
//! 本模块只做纯聚合，不访问磁盘。

use crate::color::ColorMode;
use crate::steganography;
use std::path::{Path, PathBuf};

/// 一张图像的不可变元数据快照，按需构建，不做缓存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// 文件名（不含扩展名）。
    pub name: String,
    /// 图像格式标签（如 "PNG"、"BMP"）。
    pub extension: String,
    /// 图像文件的绝对路径。
    pub absolute_path: PathBuf,
    /// 宽度（像素）。
    pub width: u32,
    /// 高度（像素）。
    pub height: u32,
    /// 像素总数。
    pub total_pixels: u64,
    /// 文件大小（字节）。
    pub file_size: u64,
    /// 使用 LSB 隐写最多可编码的字符数。
    pub capacity: usize,
    /// 颜色模式。
    pub color_mode: ColorMode,
}

/// 汇总图像的元数据。
///
/// 名称取自路径的最后一段去掉扩展名，格式标签由调用方
/// 从解码器获得后原样传入。相同输入总是产生相同的快照。
pub fn describe(
    mode: ColorMode,
    width: u32,
    height: u32,
    absolute_path: &Path,
    file_size: u64,
    format_tag: &str,
) -> ImageInfo {
    let name = absolute_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    ImageInfo {
        name,
        extension: format_tag.to_string(),
        absolute_path: absolute_path.to_path_buf(),
        width,
        height,
        total_pixels: u64::from(width) * u64::from(height),
        file_size,
        capacity: steganography::capacity(width, height, mode),
        color_mode: mode,
    }
}
