//! # featgen-core — Geração Adaptativa de Features para Rotulagem de Sequências
//!
//! Este crate implementa o subsistema de geração de features consumido por
//! rotuladores estatísticos de sequência (POS tagging, NER): dada uma
//! sentença tokenizada e o índice do token em foco, produz strings de
//! feature descrevendo aquele token.
//!
//! ## Arquitetura do Sistema
//!
//! 1. **Contrato** ([`generator`]): todo gerador implementa uma única
//!    operação, que apenas acrescenta features a um acumulador compartilhado.
//! 2. **Geradores concretos** ([`char_ngram`], [`token_class`], [`lexical`]):
//!    n-gramas de caracteres, forma lexical e sinais de superfície.
//! 3. **Colaboradores** ([`ngram`], [`shape`], [`text`]): conjunto
//!    deduplicador de n-gramas, classificador de forma e fold de caixa.
//! 4. **Montagem declarativa** ([`config`], [`factory`]): descritores JSON
//!    viram instâncias via registro de fábricas, com toda a validação na
//!    construção — configuração ruim falha na montagem do modelo, nunca
//!    durante a inferência.
//! 5. **Orquestração** ([`pipeline`]): featurização de sentenças inteiras,
//!    em paralelo ou emitindo eventos em tempo real.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use featgen_core::FeatureGenPipeline;
//!
//! // 1. Monta o pipeline a partir da configuração declarativa
//! let pipeline = FeatureGenPipeline::from_json(r#"{
//!     "name": "aggregated",
//!     "generators": [
//!         { "name": "char_ngram", "params": { "min": 2, "max": 5 } },
//!         { "name": "token_class", "params": { "word_and_class": true } }
//!     ]
//! }"#).unwrap();
//!
//! // 2. Sentença tokenizada (a tokenização é responsabilidade do chamador)
//! let tokens: Vec<String> = ["Brasil", "venceu"]
//!     .iter().map(|s| s.to_string()).collect();
//!
//! // 3. Features por token, prontas para o rotulador
//! let features = pipeline.featurize(&tokens);
//! assert!(features[0].contains(&"wc=ic".to_string()));
//! assert!(features[0].contains(&"ng=bras".to_string()));
//! ```

pub mod char_ngram;
pub mod config;
pub mod factory;
pub mod generator;
pub mod lexical;
pub mod ngram;
pub mod pipeline;
pub mod shape;
pub mod text;
pub mod token_class;

pub use char_ngram::CharNgramFeatureGenerator;
pub use config::{GeneratorDescriptor, Parameters};
pub use factory::{DescriptorError, GeneratorRegistry};
pub use generator::{AggregatedFeatureGenerator, FeatureGenerator};
pub use lexical::{SentenceFeatureGenerator, TokenFeatureGenerator};
pub use pipeline::{FeatureEvent, FeatureGenPipeline};
pub use token_class::TokenClassFeatureGenerator;
