#![allow(rustdoc::broken_intra_doc_links)]
//! # Soil Quality — Avaliador Fuzzy Mamdani
//!
//! Avalia a qualidade do solo a partir de quatro medições (pH, nutrição,
//! metais pesados e matéria orgânica) e produz um score em `[0, 100]` com
//! uma categoria `bad`, `medium` ou `good`.
//!
//! ## Camadas
//!
//! | Módulo | Papel |
//! |--------|-------|
//! | [`core`] | Tipos do domínio e a configuração imutável [`core::FuzzySystem`] |
//! | [`inference`] | Pipeline Mamdani: fuzzificação → regras → agregação → defuzzificação |
//! | [`dataset`] | Leitura de amostras em CSV |
//! | [`report`] | Tabela para o terminal e relatório JSON |
//! | [`compare`] | Comparação entre os dois métodos de defuzzificação |
//! | [`config`] | Linha de comando (`clap`) |
//! | [`web`] | API HTTP (`axum`) e página HTML (`maud`) |
//!
//! ## Exemplo
//!
//! ```rust
//! use soil_quality::evaluate;
//! use soil_quality::core::Category;
//!
//! let (score, category) = evaluate(7.5, 250.0, 5.0, 6.0);
//! assert!(score >= 70.0);
//! assert_eq!(category, Category::Good);
//! ```

/// Módulo `core` — tipos fundamentais: Degree, LinguisticVariable, RuleBase, FuzzySystem.
pub mod core;

/// Módulo `inference` — motor de inferência Mamdani.
pub mod inference;

/// Módulo `dataset` — amostras em CSV.
pub mod dataset;

/// Módulo `report` — tabela e relatório JSON.
pub mod report;

/// Módulo `compare` — discretizado vs. forma fechada.
pub mod compare;

/// Módulo `config` — CLI e variáveis de ambiente.
pub mod config;

/// Módulo `web` — servidor axum, handlers HTTP e templates.
pub mod web;

pub use inference::{checked_sample, evaluate};
