//! # Relatório — Tabela no Terminal e JSON em Disco
//!
//! Monta o resultado da avaliação de um dataset em dois formatos:
//!
//! - **Tabela** de largura fixa para o terminal ([`render_table`])
//! - **JSON** "pretty-printed" para inspeção manual ([`save_report`])
//!
//! ## Formato da Tabela
//!
//! ```text
//! No |  pH | Nutrition | Heavy metal | Organic matter | Score | Quality
//! ---------------------------------------------------------------------
//!  1 | 6.5 |       150 |          12 |              3 |  50.0 | medium
//! ```
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita **não é atômica**: um crash durante a escrita pode deixar o
//! arquivo truncado. O relatório é sempre regenerável a partir do CSV.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{Category, FuzzySystem, SoilSample};
use crate::dataset::DatasetRow;
use crate::inference::{classify, DefuzzMethod};

const RULE_WIDTH: usize = 69;

/// Uma linha avaliada do relatório.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub no: u32,
    #[serde(flatten)]
    pub sample: SoilSample,
    pub score: f64,
    pub category: Category,
}

/// Relatório completo de um dataset.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub method: DefuzzMethod,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Quantas linhas caíram em cada categoria, na ordem de [`Category::ALL`].
    pub fn counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for row in &self.rows {
            counts[row.category.index()] += 1;
        }
        counts
    }
}

/// Avalia todas as linhas do dataset (em paralelo) e monta o relatório.
pub fn build_report(system: &FuzzySystem, rows: &[DatasetRow]) -> Report {
    let samples: Vec<SoilSample> = rows.iter().map(|r| r.sample).collect();
    let assessments = system.evaluate_batch(&samples);

    let rows = rows
        .iter()
        .zip(assessments)
        .map(|(row, assessment)| ReportRow {
            no: row.no,
            sample: row.sample,
            score: assessment.score,
            category: assessment.category,
        })
        .collect();

    Report {
        generated_at: Utc::now(),
        method: system.method(),
        rows,
    }
}

/// Renderiza a tabela de resultados com a legenda das faixas.
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "No |  pH | Nutrition | Heavy metal | Organic matter | Score | Quality"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for row in rows {
        let s = &row.sample;
        let _ = writeln!(
            out,
            "{:2} | {:3.1} | {:9.0} | {:11.0} | {:14.0} | {:5.1} | {}",
            row.no, s.acidity, s.nutrition, s.heavy_metal, s.organic_matter, row.score, row.category
        );
    }
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Legenda:");
    for (range, category) in [("0-40", classify(0.0)), ("40-70", classify(40.0)), ("70-100", classify(70.0))] {
        let _ = writeln!(out, "- Score {range}: {category}");
    }
    out
}

/// Salva o relatório como JSON pretty-printed.
///
/// Cria o diretório pai se não existir.
///
/// # Erros
///
/// Retorna erro se não conseguir criar o diretório, serializar,
/// ou escrever no arquivo.
pub fn save_report(path: impl AsRef<Path>, report: &Report) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Falha ao criar diretório {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("Falha ao serializar relatório")?;
    std::fs::write(path, json)
        .with_context(|| format!("Falha ao escrever {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = report.rows.len(), "Relatório salvo");
    Ok(())
}
