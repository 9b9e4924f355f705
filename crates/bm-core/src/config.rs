use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::placement::{BlockPos, Orientation};

/// Chemin de color map utilisé quand un config set n'en précise pas.
pub const DEFAULT_COLOR_MAP: &str = "color_map_rgb.json";

/// Fichier batch complet : une session et une liste de config sets numérotés.
///
/// # Example
/// ```
/// use bm_core::config::BatchConfig;
/// let batch: BatchConfig = toml::from_str(r#"
///     [[config_sets]]
///     image = { img_path = "logo.png" }
///     size_ratio = { block_size = 8 }
///     location = { view_from = "z", x0 = 0, y0 = 64, z0 = 0 }
/// "#).unwrap();
/// assert_eq!(batch.config_sets.len(), 1);
/// assert_eq!(batch.session.pacing_ms, 1);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Session-wide settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Conversions, addressed by index from the command line.
    #[serde(default)]
    pub config_sets: Vec<ConfigSet>,
}

/// Réglages communs à tous les config sets d'une exécution.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Player the placements are reported for. Informational.
    pub player_name: String,
    /// World position of the session origin; added to every reported coordinate.
    pub player_origin: BlockPos,
    /// Délai entre deux appels au sink, en millisecondes.
    pub pacing_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            player_origin: BlockPos::default(),
            pacing_ms: 1,
        }
    }
}

impl SessionConfig {
    /// Pacing as a `Duration`.
    #[must_use]
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

/// One conversion: image, block size, target location and adjustments.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConfigSet {
    /// Source image.
    pub image: ImageSection,
    /// Pixels per block.
    pub size_ratio: SizeRatioSection,
    /// Where and how the grid is laid out.
    pub location: LocationSection,
    /// Contrast/brightness. Neutral when absent.
    #[serde(default)]
    pub image_adjust: ImageAdjustSection,
    /// Color map. `color_map_rgb.json` when absent.
    #[serde(default)]
    pub color_map: ColorMapSection,
}

/// `[image]` section.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImageSection {
    /// Chemin de l'image source.
    pub img_path: PathBuf,
}

/// `[size_ratio]` section.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SizeRatioSection {
    /// Côté d'un bloc, en pixels.
    pub block_size: u32,
}

/// `[location]` section.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LocationSection {
    /// "y" | "x" | "z". Parsed with [`ConfigSet::orientation`].
    pub view_from: String,
    /// Origin X.
    pub x0: i32,
    /// Origin Y.
    pub y0: i32,
    /// Origin Z.
    pub z0: i32,
}

/// `[image_adjust]` section.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageAdjustSection {
    /// Contraste. 1.0 = neutre.
    pub contrast_ratio: f32,
    /// Luminosité, appliquée comme facteur `1 + offset`. 0.0 = neutre.
    pub brightness_offset: f32,
}

impl Default for ImageAdjustSection {
    fn default() -> Self {
        Self {
            contrast_ratio: 1.0,
            brightness_offset: 0.0,
        }
    }
}

/// `[color_map]` section.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorMapSection {
    /// Chemin de la color map JSON.
    pub color_map_path: PathBuf,
}

impl Default for ColorMapSection {
    fn default() -> Self {
        Self {
            color_map_path: PathBuf::from(DEFAULT_COLOR_MAP),
        }
    }
}

impl ConfigSet {
    /// Parsed `view_from`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for anything but "y", "x" or "z".
    pub fn orientation(&self) -> Result<Orientation, CoreError> {
        self.location.view_from.parse()
    }

    /// Origin of the projection.
    #[must_use]
    pub fn origin(&self) -> BlockPos {
        BlockPos::new(self.location.x0, self.location.y0, self.location.z0)
    }

    /// Vérifie les valeurs avant tout chargement de fichier.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a zero block size or an unknown orientation.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.size_ratio.block_size == 0 {
            return Err(CoreError::InvalidInput(
                "block_size must be a positive integer".into(),
            ));
        }
        self.orientation().map(|_| ())
    }

    /// Rebase relative image and color map paths onto `base`.
    #[must_use]
    pub fn resolved_against(mut self, base: &Path) -> Self {
        if self.image.img_path.is_relative() {
            self.image.img_path = base.join(&self.image.img_path);
        }
        if self.color_map.color_map_path.is_relative() {
            self.color_map.color_map_path = base.join(&self.color_map.color_map_path);
        }
        self
    }
}

impl BatchConfig {
    /// Config set number `index`.
    ///
    /// # Errors
    /// Returns an error if `index` is out of range.
    pub fn config_set(&self, index: usize) -> Result<&ConfigSet> {
        self.config_sets.get(index).with_context(|| {
            format!(
                "Config set {index} introuvable ({} disponibles)",
                self.config_sets.len()
            )
        })
    }
}

/// Charge un fichier batch TOML.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use bm_core::config::load_batch;
/// use std::path::Path;
/// let batch = load_batch(Path::new("batch_list.toml")).unwrap();
/// ```
pub fn load_batch(path: &Path) -> Result<BatchConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let batch: BatchConfig = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    log::debug!(
        "{} config sets chargés depuis {}",
        batch.config_sets.len(),
        path.display()
    );
    Ok(batch)
}
