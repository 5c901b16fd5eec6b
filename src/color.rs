//! # 颜色模式模块
//!
//! 将图像的颜色模式映射为每像素字节数。
//! 不受支持的模式在构造 [`ColorMode`] 时即被拒绝，
//! 因此后续的缓冲区操作无需再做合法性检查。

use crate::error::StegoError;
use image::ColorType;
use std::fmt;
use std::str::FromStr;

/// 受支持的颜色模式：RGB (3 通道) 和 RGBA (4 通道)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
}

impl ColorMode {
    /// 返回该模式下单个像素占用的字节数。
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    /// 由 `image` crate 解码出的颜色类型构造颜色模式。
    ///
    /// # Errors
    ///
    /// 对 RGB8 和 RGBA8 之外的任何颜色类型（灰度、16 位、调色板等）
    /// 返回 [`StegoError::UnsupportedFormat`]。
    pub fn from_color_type(color: ColorType) -> Result<Self, StegoError> {
        match color {
            ColorType::Rgb8 => Ok(ColorMode::Rgb),
            ColorType::Rgba8 => Ok(ColorMode::Rgba),
            other => Err(StegoError::UnsupportedFormat {
                mode: format!("{other:?}"),
            }),
        }
    }
}

impl FromStr for ColorMode {
    type Err = StegoError;

    /// 解析文本形式的模式标签（如 "RGB"、"RGBA"）。
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "RGB" => Ok(ColorMode::Rgb),
            "RGBA" => Ok(ColorMode::Rgba),
            other => Err(StegoError::UnsupportedFormat {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Rgb => write!(f, "RGB"),
            ColorMode::Rgba => write!(f, "RGBA"),
        }
    }
}
