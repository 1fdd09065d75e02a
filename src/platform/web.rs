//! JavaScript bindings for browser builds
//!
//! The board lives in LocalStorage. While a file import is in flight the
//! board is locked and other calls reject with an error.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::highscores::HighscoreManager;
use crate::persistence;
use crate::platform::{
    LocalStorageStore, SystemClock, export_highscores_to_file, import_highscores_from_file,
};
use crate::settings::HighscoreConfig;

type WebManager = HighscoreManager<LocalStorageStore, SystemClock>;

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn busy() -> JsValue {
    JsValue::from_str("highscores are locked by a running import")
}

#[wasm_bindgen(start)]
pub fn start() {
    super::init_logging();
    log::info!("DevOOPS highscores (web) loaded");
}

/// Leaderboard handle exposed to JavaScript
#[wasm_bindgen]
pub struct WebHighscores {
    manager: Rc<RefCell<WebManager>>,
}

#[wasm_bindgen]
impl WebHighscores {
    #[wasm_bindgen(constructor)]
    pub fn new(max_scores: Option<usize>) -> WebHighscores {
        let config = max_scores
            .map(HighscoreConfig::with_max_scores)
            .unwrap_or_default();
        let store = LocalStorageStore::new(config.storage_key.clone());
        Self {
            manager: Rc::new(RefCell::new(HighscoreManager::with_config(
                store,
                SystemClock,
                config,
            ))),
        }
    }

    #[wasm_bindgen(js_name = isHighscore)]
    pub fn is_highscore(&self, score: f64) -> Result<bool, JsValue> {
        let manager = self.manager.try_borrow().map_err(|_| busy())?;
        Ok(manager.is_highscore(score as i64))
    }

    #[wasm_bindgen(js_name = addHighscore)]
    pub fn add_highscore(&self, name: &str, score: f64) -> Result<bool, JsValue> {
        let mut manager = self.manager.try_borrow_mut().map_err(|_| busy())?;
        Ok(manager.add_highscore(name, score as i64))
    }

    /// Board as a JSON array of `{name, score, date}`
    #[wasm_bindgen(js_name = getHighscores)]
    pub fn get_highscores(&self) -> Result<String, JsValue> {
        let manager = self.manager.try_borrow().map_err(|_| busy())?;
        persistence::encode_entries(&manager.get_highscores()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = toCSV)]
    pub fn to_csv(&self) -> Result<String, JsValue> {
        let manager = self.manager.try_borrow().map_err(|_| busy())?;
        manager.to_csv().map_err(to_js)
    }

    #[wasm_bindgen(js_name = importFromCSV)]
    pub fn import_from_csv(&self, content: &str) -> Result<usize, JsValue> {
        let mut manager = self.manager.try_borrow_mut().map_err(|_| busy())?;
        Ok(manager.import_from_csv(content))
    }

    #[wasm_bindgen(js_name = clearHighscores)]
    pub fn clear_highscores(&self) -> Result<(), JsValue> {
        let mut manager = self.manager.try_borrow_mut().map_err(|_| busy())?;
        manager.clear_highscores();
        Ok(())
    }

    #[wasm_bindgen(js_name = exportToFile)]
    pub fn export_to_file(&self, filename: Option<String>) -> Result<(), JsValue> {
        let manager = self.manager.try_borrow().map_err(|_| busy())?;
        export_highscores_to_file(&*manager, filename.as_deref()).map_err(to_js)
    }

    /// Resolves with the number of imported rows
    #[wasm_bindgen(js_name = importFromFile)]
    pub fn import_from_file(&self, file: web_sys::File) -> js_sys::Promise {
        let manager = Rc::clone(&self.manager);
        wasm_bindgen_futures::future_to_promise(async move {
            let mut manager = manager.try_borrow_mut().map_err(|_| busy())?;
            let count = import_highscores_from_file(&file, &mut *manager)
                .await
                .map_err(to_js)?;
            Ok(JsValue::from_f64(count as f64))
        })
    }
}
