//! Font resolution and caching.
//!
//! Local families come from the system font database; "remote" families
//! come from a directory filled by whatever fetches web fonts. Resolved
//! fonts are cached for the life of the [`FontCache`], and concurrent
//! async loads of the same face share one resolution.

use boothkit_core::LayoutError;
use boothkit_settings::FontSettings;
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use parking_lot::Mutex;
use rusttype::Font;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// One face of one family.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FontKey {
    pub family: String,
    pub remote: bool,
    pub bold: bool,
    pub italic: bool,
}

impl FontKey {
    pub fn new(family: impl Into<String>, remote: bool, bold: bool, italic: bool) -> Self {
        Self {
            family: family.into(),
            remote,
            bold,
            italic,
        }
    }
}

/// Font resolution collaborator.
pub trait FontResolver: Send + Sync {
    fn resolve(&self, key: &FontKey) -> Result<Font<'static>, LayoutError>;
}

/// Resolver over fontdb databases.
pub struct SystemFontResolver {
    system: Database,
    remote: Database,
}

impl SystemFontResolver {
    /// Load system fonts, plus the remote font directory if configured.
    pub fn new(settings: &FontSettings) -> Self {
        let mut system = Database::new();
        system.load_system_fonts();

        let mut remote = Database::new();
        if let Some(dir) = &settings.remote_font_dir {
            if dir.is_dir() {
                remote.load_fonts_dir(dir);
            } else {
                tracing::warn!("Remote font directory {} does not exist", dir.display());
            }
        }

        tracing::debug!(
            "Font databases loaded: {} system faces, {} remote faces",
            system.len(),
            remote.len()
        );
        Self { system, remote }
    }

    /// Resolver over explicit databases.
    pub fn with_databases(system: Database, remote: Database) -> Self {
        Self { system, remote }
    }

    /// Sorted family names, local or remote.
    pub fn list_font_families(&self, remote: bool) -> Vec<String> {
        let db = if remote { &self.remote } else { &self.system };
        let mut set = HashSet::new();
        for face in db.faces() {
            for (name, _) in &face.families {
                set.insert(name.clone());
            }
        }
        let mut out: Vec<_> = set.into_iter().collect();
        out.sort();
        out
    }
}

impl FontResolver for SystemFontResolver {
    fn resolve(&self, key: &FontKey) -> Result<Font<'static>, LayoutError> {
        let unavailable = || LayoutError::FontUnavailable {
            family: key.family.clone(),
        };
        let db = if key.remote { &self.remote } else { &self.system };

        let families: Vec<Family<'_>> = match key.family.trim() {
            "" | "Sans" | "sans-serif" => vec![Family::SansSerif],
            "Serif" | "serif" => vec![Family::Serif],
            "Monospace" | "monospace" => vec![Family::Monospace],
            other => vec![Family::Name(other)],
        };
        let query = Query {
            families: &families,
            weight: if key.bold { Weight::BOLD } else { Weight::NORMAL },
            stretch: Stretch::Normal,
            style: if key.italic { Style::Italic } else { Style::Normal },
        };

        let id = db.query(&query).ok_or_else(unavailable)?;
        let face = db.face(id).ok_or_else(unavailable)?;
        let bytes = match &face.source {
            fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => fs::read(path)?,
            fontdb::Source::Binary(bytes) => bytes.as_ref().as_ref().to_vec(),
        };
        Font::try_from_vec_and_index(bytes, face.index).ok_or_else(unavailable)
    }
}

type FontSlot = Arc<OnceCell<Arc<Font<'static>>>>;

/// Cache of resolved fonts keyed by face.
///
/// Only successes are cached; a failed family is retried on the next
/// request.
pub struct FontCache {
    resolver: Arc<dyn FontResolver>,
    fallback_family: String,
    slots: Mutex<HashMap<FontKey, FontSlot>>,
}

impl FontCache {
    pub fn new(resolver: Arc<dyn FontResolver>, fallback_family: impl Into<String>) -> Self {
        Self {
            resolver,
            fallback_family: fallback_family.into(),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Cache over the system resolver configured by `settings`.
    pub fn from_settings(settings: &FontSettings) -> Self {
        Self::new(
            Arc::new(SystemFontResolver::new(settings)),
            settings.fallback_family.clone(),
        )
    }

    fn slot(&self, key: &FontKey) -> FontSlot {
        self.slots.lock().entry(key.clone()).or_default().clone()
    }

    /// Resolve synchronously, caching a success.
    pub fn get(&self, key: &FontKey) -> Result<Arc<Font<'static>>, LayoutError> {
        let slot = self.slot(key);
        if let Some(font) = slot.get() {
            return Ok(font.clone());
        }
        let font = Arc::new(self.resolver.resolve(key)?);
        // Losing a race to another loader is fine; keep whichever landed
        let _ = slot.set(font.clone());
        Ok(slot.get().cloned().unwrap_or(font))
    }

    /// Resolve on the blocking pool. Concurrent calls for the same key
    /// wait on a single resolution.
    pub async fn load(&self, key: FontKey) -> Result<Arc<Font<'static>>, LayoutError> {
        let slot = self.slot(&key);
        let resolver = self.resolver.clone();
        let family = key.family.clone();
        slot.get_or_try_init(|| async move {
            match tokio::task::spawn_blocking(move || resolver.resolve(&key).map(Arc::new)).await
            {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!("Font task for {} failed: {}", family, e);
                    Err(LayoutError::FontUnavailable { family })
                }
            }
        })
        .await
        .cloned()
    }

    /// Resolve `key`, falling back to the configured local family.
    ///
    /// Returns `None` only when the fallback is unavailable as well.
    pub fn get_or_fallback(&self, key: &FontKey) -> Option<Arc<Font<'static>>> {
        match self.get(key) {
            Ok(font) => return Some(font),
            Err(e) => tracing::warn!("{}; falling back to {}", e, self.fallback_family),
        }
        let fallback = FontKey::new(self.fallback_family.clone(), false, key.bold, key.italic);
        match self.get(&fallback) {
            Ok(font) => Some(font),
            Err(e) => {
                tracing::warn!("Fallback font unavailable: {}", e);
                None
            }
        }
    }

    /// Number of faces resolved so far.
    pub fn cached_len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("fallback_family", &self.fallback_family)
            .field("cached", &self.cached_len())
            .finish()
    }
}
