//! Product image commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use tienda_client::forms::ImageUpload;
use tienda_client::validate;
use tienda_client::App;
use tienda_core::{ImageId, ProductId};

use super::{ensure_admin, ensure_valid, finish, CliError};

#[derive(Subcommand)]
pub enum ImagesAction {
    /// List a product's images
    List {
        /// Product ID
        product_id: i32,
    },
    /// Upload an image for a product (admin)
    Upload {
        /// Product ID
        product_id: i32,
        /// Path to the image file
        file: PathBuf,
    },
    /// Delete an image (admin)
    Delete {
        /// Image ID
        id: i32,
    },
}

fn mime_for(path: &Path) -> String {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg".to_owned(),
        Some("png") => "image/png".to_owned(),
        Some("gif") => "image/gif".to_owned(),
        Some("webp") => "image/webp".to_owned(),
        Some(other) => format!("application/{other}"),
        None => "application/octet-stream".to_owned(),
    }
}

pub async fn run(app: &App, action: ImagesAction) -> Result<(), CliError> {
    match action {
        ImagesAction::List { product_id } => {
            if let Some(images) = finish(app.images().by_product(ProductId::new(product_id)).await)?
            {
                if images.is_empty() {
                    println!("No hay imágenes");
                }
                for image in &images {
                    println!("{:>4}  {}", image.id, image.url);
                }
            }
        }
        ImagesAction::Upload { product_id, file } => {
            ensure_admin(app)?;
            let bytes = std::fs::read(&file)?;
            let upload = ImageUpload {
                file_name: file
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("imagen")
                    .to_owned(),
                content_type: mime_for(&file),
                bytes,
            };
            ensure_valid(&validate::image(Some(&upload)))?;
            finish(app.images().upload(ProductId::new(product_id), upload).await)?;
        }
        ImagesAction::Delete { id } => {
            ensure_admin(app)?;
            finish(app.images().delete(ImageId::new(id)).await)?;
        }
    }
    Ok(())
}
