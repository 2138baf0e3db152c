//! # Configuração — Linha de Comando e Variáveis de Ambiente
//!
//! Toda a configuração vem da linha de comando (`clap` derive), com
//! variável de ambiente como fallback para cada opção:
//!
//! | Opção | Variável | Padrão |
//! |-------|----------|--------|
//! | `--method` | `SOIL_DEFUZZ` | `discretized` |
//! | `--step` | `SOIL_STEP` | `0.1` |
//! | `--data` | `SOIL_DATA` | `data.csv` |
//! | `--addr` | `SOIL_ADDR` | `0.0.0.0:3000` |
//! | `--report` | `SOIL_REPORT` | (não salva) |
//!
//! ## Subcomandos
//!
//! ```text
//! soil-quality evaluate --acidity 6.5 --nutrition 150 --heavy-metal 12 --organic-matter 3 [--explain]
//! soil-quality table [--data data.csv] [--report output/report.json]
//! soil-quality curves --variable acidity [--points 51]
//! soil-quality compare [--data data.csv] [--iterations 1000]
//! soil-quality serve [--addr 0.0.0.0:3000] [--data data.csv]
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::inference::{DefuzzMethod, DEFAULT_STEP};

/// Avaliador fuzzy Mamdani da qualidade do solo.
#[derive(Debug, Parser)]
#[command(name = "soil-quality")]
#[command(version)]
#[command(about = "Fuzzy Mamdani soil quality evaluator", long_about = None)]
pub struct Cli {
    /// Método de defuzzificação
    #[arg(long, global = true, value_enum, env = "SOIL_DEFUZZ", default_value = "discretized")]
    pub method: MethodArg,

    /// Passo do centróide discretizado
    #[arg(long, global = true, env = "SOIL_STEP", default_value_t = DEFAULT_STEP)]
    pub step: f64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Avalia uma única amostra
    Evaluate {
        /// pH do solo
        #[arg(long, allow_hyphen_values = true)]
        acidity: f64,
        /// Nutrição (mg/kg)
        #[arg(long, allow_hyphen_values = true)]
        nutrition: f64,
        /// Metais pesados (mg/kg)
        #[arg(long, allow_hyphen_values = true)]
        heavy_metal: f64,
        /// Matéria orgânica (%)
        #[arg(long, allow_hyphen_values = true)]
        organic_matter: f64,
        /// Mostra graus, regras disparadas e agregação
        #[arg(long)]
        explain: bool,
    },

    /// Avalia todas as linhas do CSV e imprime a tabela
    Table {
        #[arg(long, value_name = "FILE", env = "SOIL_DATA", default_value = "data.csv")]
        data: PathBuf,
        /// Também salva o relatório JSON neste caminho
        #[arg(long, value_name = "FILE", env = "SOIL_REPORT")]
        report: Option<PathBuf>,
    },

    /// Curvas de pertinência de uma variável, em JSON
    Curves {
        /// acidity, nutrition, heavy_metal, organic_matter ou quality
        #[arg(long)]
        variable: String,
        /// Pontos por curva (de 2 a 1001; valores fora disso são ajustados)
        #[arg(long, default_value_t = 51)]
        points: usize,
    },

    /// Compara centróide discretizado e forma fechada (precisão e tempo)
    Compare {
        /// CSV com as amostras; sem ele, usa os cinco casos de referência
        #[arg(long, value_name = "FILE", env = "SOIL_DATA")]
        data: Option<PathBuf>,
        #[arg(long, default_value_t = 1000)]
        iterations: usize,
    },

    /// Sobe o servidor HTTP
    Serve {
        #[arg(long, env = "SOIL_ADDR", default_value = "0.0.0.0:3000")]
        addr: String,
        #[arg(long, value_name = "FILE", env = "SOIL_DATA", default_value = "data.csv")]
        data: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Centróide amostrado no universo de saída
    Discretized,
    /// Média ponderada dos centróides fixos (25/50/75)
    ClosedForm,
}

impl Cli {
    /// Método de defuzzificação escolhido, com o passo aplicado.
    pub fn defuzz_method(&self) -> DefuzzMethod {
        match self.method {
            MethodArg::Discretized => DefuzzMethod::Discretized { step: self.step },
            MethodArg::ClosedForm => DefuzzMethod::ClosedForm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_with_defaults() {
        let cli = Cli::try_parse_from([
            "soil-quality",
            "evaluate",
            "--acidity",
            "6.5",
            "--nutrition",
            "150",
            "--heavy-metal",
            "12",
            "--organic-matter",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.defuzz_method(), DefuzzMethod::default());
        match cli.command {
            Command::Evaluate {
                acidity, explain, ..
            } => {
                assert_eq!(acidity, 6.5);
                assert!(!explain);
            }
            other => panic!("subcomando inesperado: {other:?}"),
        }
    }

    #[test]
    fn global_method_after_subcommand() {
        let cli = Cli::try_parse_from([
            "soil-quality",
            "compare",
            "--iterations",
            "10",
            "--method",
            "closed-form",
        ])
        .unwrap();
        assert_eq!(cli.defuzz_method(), DefuzzMethod::ClosedForm);
        assert!(matches!(
            cli.command,
            Command::Compare { iterations: 10, .. }
        ));
    }

    #[test]
    fn negative_measurements_are_accepted() {
        let cli = Cli::try_parse_from([
            "soil-quality",
            "evaluate",
            "--acidity",
            "6.5",
            "--nutrition",
            "150",
            "--heavy-metal",
            "-2",
            "--organic-matter",
            "3",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Evaluate { heavy_metal, .. } if heavy_metal == -2.0));
    }

    #[test]
    fn missing_measurement_is_rejected() {
        assert!(Cli::try_parse_from(["soil-quality", "evaluate", "--acidity", "6.5"]).is_err());
    }

    #[test]
    fn custom_step() {
        let cli = Cli::try_parse_from(["soil-quality", "--step", "0.5", "table"]).unwrap();
        assert_eq!(cli.defuzz_method(), DefuzzMethod::Discretized { step: 0.5 });
    }
}
