//! Configuration for diploma generation, loaded from a JSON file.

use crate::style::{FontFamily, FontWeight};
use crate::DiplomaError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A font file to load for a family and weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSource {
    pub family: FontFamily,
    #[serde(default)]
    pub weight: FontWeight,
    pub path: PathBuf,
}

/// The fixed institutional text printed on every diploma
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letterhead {
    pub institution: String,
    pub subtitle: String,
    pub address: String,
    pub presentation: String,
    pub completion: String,
    pub director_title: String,
    pub secretary_title: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Letterhead {
            institution: "INSTITUTO BAUTISTA MARANATA".to_string(),
            subtitle: "IGLESIA BAUTISTA MARANATA DE TUXTLA A.R.".to_string(),
            address: "4A NTE. OTE. #717, TUXTLA GUTIERREZ, CHIAPAS SGAR 1598/93".to_string(),
            presentation: "OTORGA ESTE DIPLOMA A:".to_string(),
            completion: "POR HABER CUMPLIDO SATISFACTORIAMENTE".to_string(),
            director_title: "Director".to_string(),
            secretary_title: "Secretario".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fonts available to the rasterizer
    pub fonts: Vec<FontSource>,
    /// Image drawn in the logo slot at the top of the page
    pub logo: Option<PathBuf>,
    /// Where remembered field values are kept
    pub store_path: PathBuf,
    /// Directory exported PDFs are written to
    pub output_dir: PathBuf,
    /// Raster resolution relative to the 896px preview
    pub raster_scale: f32,
    pub letterhead: Letterhead,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fonts: Vec::new(),
            logo: None,
            store_path: PathBuf::from("diploma-store.json"),
            output_dir: PathBuf::from("."),
            raster_scale: 4.0,
            letterhead: Letterhead::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`. A missing file yields the defaults; a file
    /// that exists but doesn't parse is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, DiplomaError> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };
        let mut config: Config = serde_json::from_slice(&bytes)?;
        config.resolve_relative_to(path.parent().unwrap_or_else(|| Path::new(".")));
        Ok(config)
    }

    /// Make relative paths in the config relative to the config file's directory
    fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        for font in self.fonts.iter_mut() {
            resolve(&mut font.path);
        }
        if let Some(logo) = self.logo.as_mut() {
            resolve(logo);
        }
        resolve(&mut self.store_path);
        resolve(&mut self.output_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.raster_scale, 4.0);
    }

    #[test]
    fn partial_file_fills_in_defaults_and_resolves_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diploma-gen.json");
        std::fs::write(
            &path,
            r#"{
                "fonts": [
                    { "family": "script", "path": "fonts/DancingScript.ttf" },
                    { "family": "lato", "weight": "bold", "path": "/abs/Lato-Bold.ttf" }
                ],
                "letterhead": { "institution": "COLEGIO" }
            }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.fonts.len(), 2);
        assert_eq!(config.fonts[0].weight, FontWeight::Regular);
        assert_eq!(config.fonts[0].path, dir.path().join("fonts/DancingScript.ttf"));
        assert_eq!(config.fonts[1].path, PathBuf::from("/abs/Lato-Bold.ttf"));
        assert_eq!(config.letterhead.institution, "COLEGIO");
        assert_eq!(config.letterhead.director_title, "Director");
        assert_eq!(config.store_path, dir.path().join("diploma-store.json"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diploma-gen.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(Config::load(&path), Err(DiplomaError::Config(_))));
    }
}
