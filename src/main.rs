//! # Soil Quality — CLI e Servidor
//!
//! **Ponto de entrada principal** do avaliador fuzzy de qualidade do solo.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê a linha de comando (clap + variáveis de ambiente)
//!   ├── Monta e valida o FuzzySystem com o método escolhido
//!   └── Despacha o subcomando:
//!       ├── evaluate → score + categoria (ou explicação completa)
//!       ├── table    → tabela do CSV (+ relatório JSON opcional)
//!       ├── curves   → curvas de pertinência em JSON
//!       ├── compare  → discretizado vs. forma fechada
//!       └── serve    → servidor HTTP (porta 3000)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Uma amostra, com explicação
//! cargo run -- evaluate --acidity 6.5 --nutrition 150 --heavy-metal 12 --organic-matter 3 --explain
//!
//! # Dataset inteiro, com logs detalhados
//! RUST_LOG=debug cargo run -- table --data data.csv --report output/report.json
//!
//! # Servidor em http://localhost:3000
//! cargo run -- serve
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use soil_quality::compare;
use soil_quality::config::{Cli, Command};
use soil_quality::core::FuzzySystem;
use soil_quality::dataset::{self, DatasetRow};
use soil_quality::inference::{checked_sample, EvaluationTrace};
use soil_quality::report;
use soil_quality::web::{self, state::AppState};

/// Função principal assíncrona.
///
/// # Erros
///
/// Retorna erro se a configuração do sistema for inválida, se o CSV não
/// puder ser lido, ou se o servidor não conseguir fazer bind.
#[tokio::main]
async fn main() -> Result<()> {
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    // Exemplo: RUST_LOG=debug cargo run -- table
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let method = cli.defuzz_method();
    let system =
        FuzzySystem::soil_quality(method).context("Configuração do sistema fuzzy inválida")?;
    tracing::debug!(%method, "🌱 Sistema fuzzy pronto");

    match cli.command {
        Command::Evaluate {
            acidity,
            nutrition,
            heavy_metal,
            organic_matter,
            explain,
        } => {
            let sample = checked_sample(acidity, nutrition, heavy_metal, organic_matter)?;
            let trace = system.trace(&sample);
            if explain {
                print_explanation(&trace);
            } else {
                println!("{:.1} {}", trace.score, trace.category);
            }
        }

        Command::Table { data, report: report_path } => {
            let rows = dataset::load_samples(&data)
                .with_context(|| format!("Falha ao carregar {}", data.display()))?;
            let report = report::build_report(&system, &rows);

            println!("AVALIAÇÃO FUZZY MAMDANI DA QUALIDADE DO SOLO");
            print!("{}", report::render_table(&report.rows));

            if let Some(path) = report_path {
                report::save_report(&path, &report)?;
            }
        }

        Command::Curves { variable, points } => {
            let var = system
                .variable(&variable)
                .with_context(|| format!("Variável desconhecida: {variable}"))?;
            let curve = serde_json::json!({
                "variable": var.name,
                "universe": var.universe,
                "labels": var.sets.map(|s| s.label),
                "points": var.curve(points),
            });
            println!("{}", serde_json::to_string_pretty(&curve)?);
        }

        Command::Compare { data, iterations } => {
            let rows: Vec<DatasetRow> = match data {
                Some(path) => dataset::load_samples(&path)
                    .with_context(|| format!("Falha ao carregar {}", path.display()))?,
                None => dataset::default_samples(),
            };
            let comparison = compare::compare_methods(&rows, iterations, cli.step)
                .context("Configuração inválida para comparação")?;
            print!("{}", compare::render_comparison(&comparison));
        }

        Command::Serve { addr, data } => {
            // Sem CSV, o servidor sobe com dataset vazio (recarregável via POST /dataset/reload).
            let rows = match dataset::load_samples(&data) {
                Ok(rows) => rows,
                Err(e) => {
                    tracing::warn!(error = %e, "Falha ao carregar dataset, iniciando vazio");
                    Vec::new()
                }
            };
            let state = AppState::new(system, rows, data);
            web::serve(state, &addr).await?;
        }
    }

    Ok(())
}

fn print_explanation(trace: &EvaluationTrace) {
    println!("Fuzzificação:");
    for (name, memberships) in [
        ("acidity", &trace.fuzzified.acidity),
        ("nutrition", &trace.fuzzified.nutrition),
        ("heavy_metal", &trace.fuzzified.heavy_metal),
        ("organic_matter", &trace.fuzzified.organic_matter),
    ] {
        let degrees: Vec<String> = memberships
            .iter()
            .map(|(label, degree)| format!("{label} {degree}"))
            .collect();
        println!("  {name:<15} {}", degrees.join("  "));
    }

    println!("Regras:");
    for firing in &trace.firings {
        let mark = if firing.strength.is_zero() { " " } else { "✓" };
        println!("  {mark} {}", firing.explanation);
    }

    let agg = &trace.aggregated;
    println!(
        "Agregado: bad {}  medium {}  good {}",
        agg.bad, agg.medium, agg.good
    );
    println!("Método: {}", trace.method);
    println!("Score: {:.2} → {}", trace.score, trace.category);
}
