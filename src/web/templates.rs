//! # Templates Maud — HTML Server-Side Rendering
//!
//! Templates HTML renderizados em tempo de compilação usando o macro
//! [`maud`](https://maud.lambda.xyz/).
//!
//! ## Templates Disponíveis
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Formulário + regras + tabela do dataset |
//! | [`trace_fragment()`] | Fragment HTMX | Resultado de uma avaliação com explicação |
//!
//! ## Layout Principal (`full_page`)
//!
//! ```text
//! ┌──────────────── header ─────────────────────┐
//! │ Soil Quality │ método │ n amostras           │
//! ├──────────────────────────┬──────────────────┤
//! │ [pH][Nutr][Metal][M.O.]  │  Regras R1..R6   │
//! │ [Avaliar]                │                  │
//! │ #result (fragment HTMX)  │                  │
//! ├──────────────────────────┴──────────────────┤
//! │ Tabela do dataset + legenda                 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Os valores são apenas exibidos; nenhum template altera o resultado.

use maud::{html, Markup, DOCTYPE};

use crate::core::{Category, FuzzySystem, Input};
use crate::inference::{describe_rule, EvaluationTrace};
use crate::report::Report;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f4ef; color: #2b2b2b; }
header { padding: 1rem 2rem; background: #4a6b3a; color: #fff; display: flex; gap: 2rem; align-items: baseline; }
main { padding: 1.5rem 2rem; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
section.wide { grid-column: 1 / span 2; }
table { border-collapse: collapse; width: 100%; }
th, td { padding: .35rem .6rem; border-bottom: 1px solid #ddd; text-align: right; }
th:last-child, td:last-child { text-align: left; }
.bad { color: #a33; } .medium { color: #a67c00; } .good { color: #2f7a2f; }
.fired { font-weight: 600; } .idle { color: #999; }
form label { display: block; margin: .3rem 0; }
"#;

fn category_class(category: Category) -> &'static str {
    category.label()
}

/// Página principal — formulário, regras e tabela do dataset.
pub fn full_page(system: &FuzzySystem, report: &Report) -> Markup {
    let [bad, medium, good] = report.counts();

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Soil Quality — Fuzzy Mamdani" }
                script src="https://unpkg.com/htmx.org@2.0.4" {}
                style { (STYLE) }
            }
            body {
                header {
                    h1 { "Soil Quality" }
                    span { "Método: " (system.method().to_string()) }
                    span { (report.rows.len()) " amostras" }
                }
                main {
                    section {
                        h2 { "Avaliar amostra" }
                        form hx-post="/evaluate/form" hx-target="#result" hx-swap="innerHTML" {
                            @for input in Input::ALL {
                                label {
                                    (input.name()) " "
                                    input type="number" step="any" name=(input.name()) required;
                                }
                            }
                            button type="submit" { "Avaliar" }
                        }
                        div id="result" {}
                    }

                    section {
                        h2 { "Regras" }
                        ul {
                            @for rule in system.rules() {
                                li { code { (describe_rule(system, rule)) } }
                            }
                        }
                    }

                    section class="wide" {
                        h2 { "Dataset" }
                        @if report.rows.is_empty() {
                            p { "Nenhuma amostra carregada." }
                        } @else {
                            table {
                                thead {
                                    tr {
                                        th { "No" } th { "pH" } th { "Nutrition" }
                                        th { "Heavy metal" } th { "Organic matter" }
                                        th { "Score" } th { "Quality" }
                                    }
                                }
                                tbody {
                                    @for row in &report.rows {
                                        tr {
                                            td { (row.no) }
                                            td { (format!("{:.1}", row.sample.acidity)) }
                                            td { (format!("{:.0}", row.sample.nutrition)) }
                                            td { (format!("{:.0}", row.sample.heavy_metal)) }
                                            td { (format!("{:.0}", row.sample.organic_matter)) }
                                            td { (format!("{:.1}", row.score)) }
                                            td class=(category_class(row.category)) { (row.category.label()) }
                                        }
                                    }
                                }
                            }
                            p {
                                "bad: " (bad) " · medium: " (medium) " · good: " (good)
                            }
                        }
                        p class="idle" { "Score 0-40: bad · 40-70: medium · 70-100: good" }
                    }
                }
            }
        }
    }
}

/// Fragmento com o resultado de uma avaliação e a explicação regra a regra.
pub fn trace_fragment(trace: &EvaluationTrace) -> Markup {
    html! {
        div class="trace" {
            p {
                "Score "
                strong { (format!("{:.1}", trace.score)) }
                " → "
                strong class=(category_class(trace.category)) { (trace.category.label()) }
            }
            ul {
                @for firing in &trace.firings {
                    li class=(if firing.strength.is_zero() { "idle" } else { "fired" }) {
                        (firing.explanation)
                    }
                }
            }
            p class="idle" {
                "Agregado: bad " (trace.aggregated.bad.to_string())
                " · medium " (trace.aggregated.medium.to_string())
                " · good " (trace.aggregated.good.to_string())
            }
        }
    }
}
