//! # Dataset — Leitura das Amostras em CSV
//!
//! Carrega um arquivo CSV com uma amostra por linha. As colunas são
//! localizadas pelo cabeçalho (ordem livre, sem diferenciar maiúsculas),
//! aceitando tanto os nomes em inglês quanto os cabeçalhos do levantamento
//! de campo:
//!
//! | Campo | Cabeçalhos aceitos |
//! |-------|--------------------|
//! | número | `no` (opcional) |
//! | acidity | `acidity`, `ph` |
//! | nutrition | `nutrition`, `nutrisi` |
//! | heavy_metal | `heavy_metal`, `logam_berat` |
//! | organic_matter | `organic_matter`, `bahan_organik` |
//!
//! ## Exemplo
//!
//! ```text
//! No,pH,Nutrisi,Logam_Berat,Bahan_Organik
//! 1,6.5,150,12,3
//! 2,7.5,250,5,6
//! ```
//!
//! Linhas em branco são ignoradas. Células não numéricas ou não finitas
//! falham com o número da linha (1-based, contando o cabeçalho).

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::{Input, InputError, SoilSample};

/// Uma linha do dataset: número do caso + amostra.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DatasetRow {
    pub no: u32,
    pub sample: SoilSample,
}

/// Erro ao carregar ou interpretar o dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("falha ao ler {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset vazio (sem cabeçalho)")]
    Empty,

    #[error("coluna obrigatória ausente: {0}")]
    MissingColumn(&'static str),

    #[error("linha {line}: esperado {expected} colunas, encontrado {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("linha {line}, coluna '{column}': valor inválido '{value}'")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("linha {line}: {source}")]
    NonFinite {
        line: usize,
        #[source]
        source: InputError,
    },
}

/// Os cinco casos de referência usados quando nenhum CSV é informado.
pub fn default_samples() -> Vec<DatasetRow> {
    [
        SoilSample::new(6.5, 150.0, 12.0, 3.0),
        SoilSample::new(7.5, 250.0, 5.0, 6.0),
        SoilSample::new(5.5, 50.0, 25.0, 1.0),
        SoilSample::new(6.8, 180.0, 15.0, 4.0),
        SoilSample::new(8.0, 300.0, 10.0, 7.0),
    ]
    .into_iter()
    .zip(1..)
    .map(|(sample, no)| DatasetRow { no, sample })
    .collect()
}

/// Lê e interpreta um arquivo CSV.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<DatasetRow>, DatasetError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_samples(&text)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Dataset carregado");
    Ok(rows)
}

/// Interpreta o conteúdo de um CSV já em memória.
pub fn parse_samples(text: &str) -> Result<Vec<DatasetRow>, DatasetError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(DatasetError::Empty)?;
    let columns = Columns::from_header(header)?;

    let mut rows = Vec::new();
    for (line, content) in lines {
        let cells = split_cells(content);
        if cells.len() != columns.width {
            return Err(DatasetError::ColumnCount {
                line,
                expected: columns.width,
                found: cells.len(),
            });
        }

        let number = |index: usize, column: &'static str| -> Result<f64, DatasetError> {
            cells[index]
                .parse::<f64>()
                .map_err(|_| DatasetError::InvalidNumber {
                    line,
                    column,
                    value: cells[index].clone(),
                })
        };

        let mut values = [0.0; 4];
        for input in Input::ALL {
            values[input.index()] = number(columns.inputs[input.index()], input.name())?;
        }
        let sample = SoilSample::checked(values[0], values[1], values[2], values[3])
            .map_err(|source| DatasetError::NonFinite { line, source })?;

        let no = match columns.no {
            Some(index) => cells[index]
                .parse::<u32>()
                .map_err(|_| DatasetError::InvalidNumber {
                    line,
                    column: "no",
                    value: cells[index].clone(),
                })?,
            None => rows.len() as u32 + 1,
        };

        rows.push(DatasetRow { no, sample });
    }

    tracing::debug!(rows = rows.len(), "CSV interpretado");
    Ok(rows)
}

/// Posição de cada campo no cabeçalho.
struct Columns {
    no: Option<usize>,
    inputs: [usize; 4],
    width: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, DatasetError> {
        let names: Vec<String> = split_cells(header)
            .into_iter()
            .map(|c| c.to_lowercase())
            .collect();
        let find = |wanted: &[&str]| names.iter().position(|n| wanted.contains(&n.as_str()));

        let mut inputs = [0; 4];
        for input in Input::ALL {
            inputs[input.index()] =
                find(aliases(input)).ok_or(DatasetError::MissingColumn(input.name()))?;
        }

        Ok(Self {
            no: find(&["no"]),
            inputs,
            width: names.len(),
        })
    }
}

fn aliases(input: Input) -> &'static [&'static str] {
    match input {
        Input::Acidity => &["acidity", "ph"],
        Input::Nutrition => &["nutrition", "nutrisi"],
        Input::HeavyMetal => &["heavy_metal", "logam_berat"],
        Input::OrganicMatter => &["organic_matter", "bahan_organik"],
    }
}

/// Separa uma linha em células. Vírgulas dentro de aspas pertencem à célula
/// e `""` dentro de aspas vira uma aspa literal. Campos com quebra de linha
/// não são suportados.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => cells.push(std::mem::take(&mut cell).trim().to_string()),
            _ => cell.push(ch),
        }
    }
    cells.push(cell.trim().to_string());
    cells
}
