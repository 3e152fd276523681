//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `reveal` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{HideArgs, RevealArgs};
use crate::steganography::{hide, reveal};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 根据输入图像路径生成默认的隐写输出路径：`doctored_<原文件名>`。
fn default_hidden_path(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("doctored_{name}"))
}

/// 根据输入图像路径生成默认的文本输出路径：`recovered_<原文件名主干>.txt`。
fn default_text_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("recovered_{stem}.txt"))
}

/// 覆盖保护：输出文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、将图像统一转换为 RGB 像素、调用隐写核心函数嵌入消息，
/// 最后将结果图像写入目标路径 (必须为无损格式)。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和覆盖标志的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 无法读取要隐藏的文本文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像容量不足以容纳消息和结束标记。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    // 无论输入是灰度、调色板还是 RGBA，核心算法只处理 RGB 像素。
    let mut pixels = picture.to_rgb8();

    let text = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let dest = args.dest.unwrap_or_else(|| default_hidden_path(&args.image));
    ensure_writable(&dest, args.force)?;

    hide(&mut pixels, &text).map_err(|e| {
        anyhow::anyhow!(
            "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
            e.required.to_string().red().bold(),
            e.available.to_string().green().bold()
        )
    })?;

    // 仅编译了无损格式支持，向有损格式路径 (如 .jpg) 保存会在此处失败。
    pixels.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {} \nMake sure the extension is a supported lossless format (PNG, BMP, TIFF, WebP, QOI).",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Reveal' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、扫描像素最低有效位直到找到结束标记，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和覆盖标志的 `RevealArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 图像中未找到结束标记 (即没有隐藏消息)。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_reveal(args: RevealArgs) -> Result<()> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let pixels = picture.to_rgb8();

    let Some(text) = reveal(&pixels) else {
        anyhow::bail!(
            "No hidden message found in: {} \nThe image may not contain a hidden message, or it was re-saved in a lossy format.",
            args.image.to_string_lossy().red().bold()
        );
    };

    let dest = args.text.unwrap_or_else(|| default_text_path(&args.image));
    ensure_writable(&dest, args.force)?;

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}
