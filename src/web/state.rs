//! # Estado da Aplicação Web
//!
//! Define a struct de estado compartilhado entre todos os handlers Axum.
//!
//! ```text
//! AppState
//!  ├── system   Arc<FuzzySystem>            imutável, sem lock
//!  ├── dataset  Arc<RwLock<Vec<DatasetRow>>> recarregável via POST /dataset/reload
//!  └── data_path Arc<PathBuf>               origem do CSV
//! ```
//!
//! O sistema fuzzy nunca muda depois de montado, então é lido por todas as
//! requisições em paralelo sem sincronização. Só o dataset exibido na
//! página é protegido por `RwLock`.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::FuzzySystem;
use crate::dataset::{self, DatasetError, DatasetRow};

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Sistema fuzzy usado por todas as avaliações deste servidor.
    pub system: Arc<FuzzySystem>,
    /// Amostras carregadas do CSV, protegidas por `RwLock`.
    pub dataset: Arc<RwLock<Vec<DatasetRow>>>,
    /// Caminho do CSV para recarga.
    pub data_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(system: FuzzySystem, dataset: Vec<DatasetRow>, data_path: PathBuf) -> Self {
        Self {
            system: Arc::new(system),
            dataset: Arc::new(RwLock::new(dataset)),
            data_path: Arc::new(data_path),
        }
    }

    /// Relê o CSV e substitui o dataset em memória.
    ///
    /// Em caso de erro o dataset anterior é mantido.
    pub fn reload_dataset(&self) -> Result<usize, DatasetError> {
        let rows = dataset::load_samples(self.data_path.as_path())?;
        let count = rows.len();
        *self.dataset.write() = rows;
        Ok(count)
    }
}
