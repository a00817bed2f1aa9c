use std::fs;
use std::path::{Path, PathBuf};
use raylib::prelude::*;

use crate::catalog::Catalog;

const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

// --- Scale a texture down so it fits inside a box, never up ---
pub fn fit_scale(tex_width: f32, tex_height: f32, box_width: f32, box_height: f32) -> f32 {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return 1.0;
    }
    (box_width / tex_width).min(box_height / tex_height).min(1.0)
}

// --- Decode a product image and upload it to the GPU ---
pub fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, String> {
    if !is_supported_image(image_path) {
        return Err(format!("Unsupported image format: {:?}", image_path));
    }

    let bytes = fs::read(image_path)
        .map_err(|e| format!("Failed to read {:?}: {}", image_path, e))?;

    // raylib picks the decoder from the extension, including the dot
    let file_type = image_path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();
    let image = Image::load_image_from_mem(&file_type, &bytes)
        .map_err(|e| format!("Failed to decode {:?}: {}", image_path, e))?;

    // The CPU-side image is released when `image` goes out of scope
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| format!("Failed to upload {:?}: {}", image_path, e))
}

// --- Catalog image paths are site-relative; a leading slash still means <assets> ---
pub fn asset_path(assets_dir: &Path, image: &str) -> PathBuf {
    assets_dir.join(image.trim_start_matches('/'))
}

// --- One texture slot per catalog entry; None means draw a placeholder ---
pub fn load_product_images(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets_dir: &Path,
    catalog: &Catalog,
) -> Vec<Option<Texture2D>> {
    catalog
        .products()
        .iter()
        .map(|product| {
            let path = asset_path(assets_dir, &product.image);
            match load_texture(rl, thread, &path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    log::warn!("Using placeholder for {}: {}", product.name, e);
                    None
                }
            }
        })
        .collect()
}
