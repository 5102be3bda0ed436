//! Persisted high score
//!
//! A single integer, stored as decimal text: a `high_score.txt` file on
//! native, one LocalStorage item on wasm. Reads fall back to 0 and
//! writes fail silently (logged) - gameplay is never blocked by storage.

/// The session-spanning best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub value: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flap_high_score";

    /// Native file path
    #[cfg(not(target_arch = "wasm32"))]
    const FILE_PATH: &'static str = "high_score.txt";

    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Record a finished run. Returns true only when the score beats
    /// the stored value; the caller persists with `save()`.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    fn parse(text: &str) -> Option<u32> {
        text.trim().parse().ok()
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(text)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(value) = Self::parse(&text) {
                    log::info!("Loaded high score: {}", value);
                    return Self::new(value);
                }
                log::warn!("Stored high score is not a number, resetting to 0");
            }
        }

        Self::default()
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if storage
                .set_item(Self::STORAGE_KEY, &self.value.to_string())
                .is_ok()
            {
                log::info!("High score saved: {}", self.value);
            } else {
                log::warn!("Failed to save high score");
            }
        }
    }

    /// Load the high score from the text file, defaulting to 0 on any
    /// missing or malformed content
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(std::path::Path::new(Self::FILE_PATH))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match Self::parse(&text) {
                Some(value) => {
                    log::info!("Loaded high score: {}", value);
                    Self::new(value)
                }
                None => {
                    log::warn!("{} is not a number, resetting to 0", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No high score file ({}), starting at 0", e);
                Self::default()
            }
        }
    }

    /// Overwrite the text file wholesale; failure is logged and ignored
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        self.save_to(std::path::Path::new(Self::FILE_PATH));
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) {
        if let Err(e) = std::fs::write(path, self.value.to_string()) {
            log::warn!("Failed to save high score: {}", e);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("flap_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        assert_eq!(HighScore::load_from(&path).value, 0);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScore::load_from(&path).value, 0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_roundtrip_with_whitespace() {
        let path = temp_path("roundtrip");
        HighScore::new(42).save_to(&path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "42");
        std::fs::write(&path, " 42\n").unwrap();
        assert_eq!(HighScore::load_from(&path).value, 42);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_record_only_persists_improvements() {
        let path = temp_path("record");
        let _ = std::fs::remove_file(&path);

        // Score 7 beats the stored 5 and is persisted
        let mut hs = HighScore::new(5);
        assert!(hs.record(7));
        hs.save_to(&path);
        assert_eq!(HighScore::load_from(&path).value, 7);

        // A later run ending at 3 leaves the stored value alone
        let mut hs = HighScore::load_from(&path);
        assert!(!hs.record(3));
        assert_eq!(HighScore::load_from(&path).value, 7);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_record_equal_score_is_not_a_record() {
        let mut hs = HighScore::new(10);
        assert!(!hs.record(10));
        assert_eq!(hs.value, 10);
    }
}
