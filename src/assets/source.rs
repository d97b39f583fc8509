use std::{path::PathBuf, sync::Arc};

use crate::foundation::error::{FourierError, FourierResult};

/// Where the traced shape comes from.
#[derive(Clone, Debug)]
pub enum ShapeSource {
    /// An in-memory SVG document.
    SvgBytes(Arc<[u8]>),
    /// An SVG document on disk.
    SvgFile(PathBuf),
    /// Raw SVG path data (`d` attribute syntax).
    PathData(String),
}

impl ShapeSource {
    /// Wrap an in-memory SVG document.
    pub fn svg_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::SvgBytes(bytes.into())
    }

    /// Reference an SVG file on disk.
    pub fn svg_file(path: impl Into<PathBuf>) -> Self {
        Self::SvgFile(path.into())
    }

    /// Use raw SVG path data.
    pub fn path_data(d: impl Into<String>) -> Self {
        Self::PathData(d.into())
    }

    /// Fetch the SVG document bytes. `PathData` sources have no document and yield `None`.
    pub fn fetch_svg(&self) -> FourierResult<Option<Arc<[u8]>>> {
        match self {
            Self::SvgBytes(b) => Ok(Some(b.clone())),
            Self::SvgFile(p) => {
                let bytes = std::fs::read(p).map_err(|e| {
                    FourierError::asset_fetch(format!("SVG request failed ({}): {e}", p.display()))
                })?;
                Ok(Some(bytes.into()))
            }
            Self::PathData(_) => Ok(None),
        }
    }
}
