//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `info` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O 与图像编解码、调用核心隐写算法以及向用户报告结果。
//! 核心算法本身不做任何 I/O，图像的加载、重建与保存都发生在这里。

use crate::cli::{HideArgs, InfoArgs, RecoverArgs};
use crate::color::ColorMode;
use crate::info;
use crate::steganography;
use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// 加载一张图像并确定其颜色模式。
///
/// # Errors
///
/// 如果图像文件无法读取，或其颜色模式不是 RGB8/RGBA8，将返回错误。
fn load_image(path: &Path) -> Result<(DynamicImage, ColorMode)> {
    let img = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let mode = ColorMode::from_color_type(img.color()).with_context(|| {
        format!(
            "Unable to process image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    Ok((img, mode))
}

/// 用编码后的像素缓冲区重建一张与原图同尺寸、同模式的图像。
fn rebuild_image(
    pixels: Vec<u8>,
    mode: ColorMode,
    width: u32,
    height: u32,
) -> Result<DynamicImage> {
    let img = match mode {
        ColorMode::Rgb => {
            ImageBuffer::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8)
        }
        ColorMode::Rgba => {
            ImageBuffer::from_raw(width, height, pixels).map(DynamicImage::ImageRgba8)
        }
    };

    img.context("The encoded pixel buffer does not match the image dimensions.")
}

/// 检查输出路径是否可以安全写入。
///
/// 文件已存在且未指定 `--force` 时返回错误，避免意外覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 在给定路径的同一目录下生成一个默认输出文件路径。
fn default_sibling(path: &Path, file_name: String) -> PathBuf {
    path.parent()
        .map_or_else(|| PathBuf::from(&file_name), |parent| parent.join(&file_name))
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、调用核心编码函数将消息嵌入像素缓冲区，
/// 再把返回的新缓冲区重建为图像并写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖开关的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 图像的颜色模式不受支持，或文本文件为空。
/// * 消息超出图像容量（核心编码函数 `encode` 失败）。
/// * 输出文件已存在且未指定 `--force`，或无法写入目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let (img, mode) = load_image(&args.image)?;

    let message = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        !message.is_empty(),
        "The text file is empty, there is nothing to hide: {}",
        args.text.to_string_lossy().red().bold()
    );

    let encoded = steganography::encode(img.as_bytes(), mode, &message).with_context(|| {
        format!(
            "Failed to hide the message in image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let (width, height) = img.dimensions();
    let encoded_img = rebuild_image(encoded, mode, width, height)?;

    let dest = args.dest.unwrap_or_else(|| {
        let file_name = args
            .image
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("image.png"));
        default_sibling(&args.image, format!("encoded_{file_name}"))
    });

    ensure_writable(&dest, args.force)?;

    encoded_img.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用核心解码函数提取隐藏的消息，
/// 最后将消息内容写入目标文本文件。
///
/// 解码只读取每个字节的最低有效位，与颜色模式无关，
/// 因此未经隐写的图像也会"恢复"出空串或噪声文本，这不是错误。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖开关的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 输出文件已存在且未指定 `--force`，或无法写入目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let img = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = steganography::decode(img.as_bytes());

    let text = args.text.unwrap_or_else(|| {
        let stem = args
            .image
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("image"));
        default_sibling(&args.image, format!("recovered_{stem}.txt"))
    });

    ensure_writable(&text, args.force)?;

    fs::write(&text, &message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully recovered and saved: {}",
        text.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Info' 命令的执行逻辑。
///
/// 负责读取图像文件并收集文件系统事实（绝对路径、文件大小、格式标签），
/// 调用核心汇总函数生成元数据快照，并逐项打印给用户。
///
/// # Arguments
///
/// * `args` - 包含图像路径的 `InfoArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件或其元数据。
/// * 图像的颜色模式不受支持。
pub fn handle_info(args: InfoArgs) -> Result<()> {
    let (img, mode) = load_image(&args.image)?;
    let (width, height) = img.dimensions();

    let absolute_path = fs::canonicalize(&args.image).with_context(|| {
        format!(
            "Unable to resolve the absolute path of: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let file_size = fs::metadata(&args.image)
        .with_context(|| {
            format!(
                "Unable to read metadata of image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .len();

    let format_tag = ImageFormat::from_path(&args.image)
        .ok()
        .and_then(|format| format.extensions_str().first().copied())
        .map(str::to_uppercase)
        .unwrap_or_else(|| String::from("Unknown"));

    let info = info::describe(mode, width, height, &absolute_path, file_size, &format_tag);

    println!("{} {}", "Name:".bold(), info.name);
    println!("{} {}", "Extension:".bold(), info.extension);
    println!(
        "{} {}",
        "Absolute path:".bold(),
        info.absolute_path.to_string_lossy()
    );
    println!(
        "{} {}x{} ({} pixels in total)",
        "Dimensions:".bold(),
        info.width,
        info.height,
        info.total_pixels
    );
    println!("{} {} B", "File size:".bold(), info.file_size);
    println!("{} {}", "Color mode:".bold(), info.color_mode);
    println!(
        "{} {} characters",
        "Capacity:".bold(),
        info.capacity.to_string().green().bold()
    );

    Ok(())
}
