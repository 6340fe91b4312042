//! Persistence collaborator: an opaque store of tournaments, upserted by
//! id. The engine never touches storage itself; callers run the
//! load-mutate-persist sequence around it.

use crate::models::{Tournament, TournamentId};
use std::fs;
use std::path::PathBuf;

/// Store contract consumed by the web layer. `save` must be durable
/// before the next `load_all`; there is no retry here. Failures are
/// logged and swallowed: the store never partially writes a tournament,
/// so log-and-continue is acceptable for this app.
pub trait TournamentStore {
    fn load_all(&self) -> Vec<Tournament>;
    fn save(&self, tournament: &Tournament);
    fn delete(&self, id: TournamentId);
}

/// File-backed store: the full tournament list as one JSON document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_all(&self, list: &[Tournament]) {
        let json = match serde_json::to_string(list) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize tournaments: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            log::error!("failed to write {}: {e}", self.path.display());
        }
    }
}

impl TournamentStore for JsonFileStore {
    fn load_all(&self) -> Vec<Tournament> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            // Missing file is a fresh install, not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::error!("failed to read {}: {e}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&json) {
            Ok(list) => list,
            Err(e) => {
                log::error!("failed to parse {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    fn save(&self, tournament: &Tournament) {
        let mut list = self.load_all();
        match list.iter_mut().find(|t| t.id == tournament.id) {
            Some(existing) => *existing = tournament.clone(),
            None => list.push(tournament.clone()),
        }
        self.write_all(&list);
    }

    fn delete(&self, id: TournamentId) {
        let mut list = self.load_all();
        list.retain(|t| t.id != id);
        self.write_all(&list);
    }
}
