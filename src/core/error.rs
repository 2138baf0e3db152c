//! # Erros de Configuração e de Entrada
//!
//! Dois tipos de falha podem acontecer antes da inferência:
//!
//! | Tipo | Quando | Exemplo |
//! |------|--------|---------|
//! | [`ConfigError`] | Na montagem do [`FuzzySystem`](super::FuzzySystem) | triângulo `[5, 3, 8]` |
//! | [`InputError`] | Na fronteira (CSV, HTTP, CLI) | pH = `NaN` |
//!
//! A avaliação em si é **total**: nenhuma entrada finita produz erro.

use thiserror::Error;

/// Erro de configuração detectado na montagem do sistema fuzzy.
///
/// Parâmetros de forma, universos e passo de discretização são validados
/// uma única vez, antes de qualquer avaliação.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Parâmetros fora de ordem (`a ≤ b ≤ c (≤ d)` violado).
    #[error("forma '{set}' da variável '{variable}' tem parâmetros fora de ordem: {params:?}")]
    UnorderedParameters {
        variable: String,
        set: String,
        params: Vec<f64>,
    },

    /// Parâmetro `NaN` ou infinito.
    #[error("forma '{set}' da variável '{variable}' tem parâmetro não finito: {params:?}")]
    NonFiniteParameter {
        variable: String,
        set: String,
        params: Vec<f64>,
    },

    /// Suporte de largura zero (`a == c` no triângulo, `a == d` no trapézio).
    #[error("forma '{set}' da variável '{variable}' tem suporte vazio em {at}")]
    EmptySupport {
        variable: String,
        set: String,
        at: f64,
    },

    /// Universo de discurso inválido (`min ≥ max` ou não finito).
    #[error("universo inválido para '{variable}': [{min}, {max}]")]
    InvalidUniverse { variable: String, min: f64, max: f64 },

    /// Passo de discretização não positivo, não finito, maior que o universo
    /// ou fino demais (mais intervalos que o limite de amostragem).
    #[error("passo de discretização inválido: {0}")]
    InvalidStep(f64),

    /// Regra com expressão `All`/`Any` vazia.
    #[error("regra R{rule} tem antecedente vazio")]
    EmptyAntecedent { rule: usize },

    /// Duas regras com o mesmo identificador.
    #[error("identificador de regra duplicado: R{0}")]
    DuplicateRule(usize),
}

/// Erro de validação de entrada — rejeita `NaN` e `±∞` na fronteira.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Medição não finita.
    #[error("medição '{field}' não é finita: {value}")]
    NonFinite { field: &'static str, value: f64 },
}
