//! One-shot asynchronous texture resolution.
//!
//! Each particle system requests its sprite texture exactly once. The fetch
//! runs outside the frame loop and completes into a write-once slot; the
//! system renders untextured until then, for however many frames that takes.
//! A failed fetch is logged and never retried.

use std::sync::{Arc, OnceLock};
use std::thread::JoinHandle;

use thiserror::Error;

/// Error raised when a texture cannot be fetched or decoded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    /// The resource could not be fetched.
    #[error("failed to fetch '{url}': {reason}")]
    Fetch {
        /// Requested resource URL or name.
        url: String,
        /// What went wrong.
        reason: String,
    },
    /// The fetched bytes were not a decodable image.
    #[error("failed to decode '{url}': {reason}")]
    Decode {
        /// Requested resource URL or name.
        url: String,
        /// What went wrong.
        reason: String,
    },
}

/// Loading state of a texture slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No request issued yet.
    Idle,
    /// Request issued, not yet completed.
    Loading,
    /// Texture bound.
    Loaded,
}

/// Decoded texture image data.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTexture {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// RGBA8 pixel data (4 bytes per pixel, tightly packed).
    pub data: Vec<u8>,
}

impl LoadedTexture {
    /// Create a new loaded texture.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

/// A write-once slot a texture resolves into.
///
/// The slot fills at most once; later completions are dropped, so a slow
/// fetch arriving after the fact is harmless. Readers only ever see empty
/// or fully bound.
#[derive(Debug, Clone, Default)]
pub struct TextureSlot {
    cell: Arc<OnceLock<LoadedTexture>>,
    requested: Arc<OnceLock<String>>,
}

impl TextureSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bound texture, if resolution has completed.
    #[inline]
    pub fn texture(&self) -> Option<&LoadedTexture> {
        self.cell.get()
    }

    /// Current loading state.
    pub fn state(&self) -> LoadState {
        if self.cell.get().is_some() {
            LoadState::Loaded
        } else if self.requested.get().is_some() {
            LoadState::Loading
        } else {
            LoadState::Idle
        }
    }

    /// Bind a texture directly. Returns false if the slot was already
    /// filled (the new texture is dropped).
    pub fn fill(&self, texture: LoadedTexture) -> bool {
        self.cell.set(texture).is_ok()
    }

    /// Issue the one-shot asynchronous request for this slot.
    ///
    /// `loader` runs on its own thread, outside the frame loop. Success
    /// binds the texture into the slot; failure logs and leaves the slot
    /// empty for good. A second call is ignored — one attempt per resource.
    ///
    /// The returned handle may be dropped for fire-and-forget use or joined
    /// for deterministic shutdown.
    pub fn resolve_with<F>(&self, url: impl Into<String>, loader: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(&str) -> Result<LoadedTexture, LoadError> + Send + 'static,
    {
        let url = url.into();
        if self.requested.set(url.clone()).is_err() {
            log::warn!("texture slot already requested, ignoring '{}'", url);
            return None;
        }

        let cell = Arc::clone(&self.cell);
        Some(std::thread::spawn(move || match loader(&url) {
            Ok(texture) => {
                if cell.set(texture).is_ok() {
                    log::debug!("texture '{}' resolved", url);
                }
            }
            Err(err) => {
                // render untextured from here on; no retry
                log::warn!("{}", err);
            }
        }))
    }
}
