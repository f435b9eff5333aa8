//! # Pipeline de Geração de Features
//!
//! Orquestra um gerador (tipicamente um agregado montado pela configuração
//! declarativa) sobre sentenças inteiras, e emite eventos observáveis por
//! token via um canal Rust (`mpsc`) — o servidor web usa esses eventos para
//! mostrar, em tempo real, o que o modelo "vê" de cada palavra.

use std::sync::mpsc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::char_ngram::CharNgramFeatureGenerator;
use crate::config::GeneratorDescriptor;
use crate::factory::{DescriptorError, GeneratorRegistry};
use crate::generator::{AggregatedFeatureGenerator, FeatureGenerator};
use crate::lexical::{SentenceFeatureGenerator, TokenFeatureGenerator};
use crate::token_class::TokenClassFeatureGenerator;

/// Eventos emitidos durante a featurização de uma sentença.
///
/// Permitem que a UI visualize o processo passo a passo: um evento de
/// abertura, um por token (em ordem) e um de conclusão com estatísticas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FeatureEvent {
    /// A sentença foi recebida e a featurização vai começar
    Started { total_tokens: usize },
    /// Features de um token específico foram geradas
    TokenFeaturized {
        token_index: usize,
        token_text: String,
        features: Vec<String>,
    },
    /// Featurização concluída
    Done {
        total_tokens: usize,
        total_features: usize,
        processing_ms: u64,
    },
}

/// Pipeline pronto para featurizar sentenças.
///
/// Depois de montado, carrega apenas configuração imutável: pode ser
/// compartilhado entre threads e reutilizado por qualquer número de
/// chamadas sem sincronização.
pub struct FeatureGenPipeline {
    generator: Box<dyn FeatureGenerator>,
}

impl FeatureGenPipeline {
    /// Embrulha um gerador já construído.
    pub fn new(generator: Box<dyn FeatureGenerator>) -> Self {
        Self { generator }
    }

    /// Monta o pipeline a partir de um descritor, com o registro embutido.
    pub fn from_descriptor(descriptor: &GeneratorDescriptor) -> Result<Self, DescriptorError> {
        Self::with_registry(&GeneratorRegistry::default(), descriptor)
    }

    /// Monta o pipeline com um registro customizado (fábricas próprias).
    pub fn with_registry(
        registry: &GeneratorRegistry,
        descriptor: &GeneratorDescriptor,
    ) -> Result<Self, DescriptorError> {
        Ok(Self::new(registry.create(descriptor)?))
    }

    /// Monta o pipeline a partir do descritor em JSON.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Self::from_descriptor(&GeneratorDescriptor::from_json(json)?)
    }

    /// Features de um único token, num acumulador novo.
    pub fn featurize_token(
        &self,
        tokens: &[String],
        index: usize,
        prior_labels: &[Option<String>],
    ) -> Vec<String> {
        let mut features = Vec::new();
        self.generator
            .generate(&mut features, tokens, index, prior_labels);
        features
    }

    /// Features de todos os tokens da sentença, em paralelo.
    ///
    /// Cada índice recebe seu próprio acumulador; como os geradores
    /// carregam apenas configuração imutável, as chamadas podem rodar em
    /// threads distintas sem sincronização.
    pub fn featurize(&self, tokens: &[String]) -> Vec<Vec<String>> {
        let prior_labels = vec![None; tokens.len()];
        (0..tokens.len())
            .into_par_iter()
            .map(|index| self.featurize_token(tokens, index, &prior_labels))
            .collect()
    }

    /// Featuriza enviando eventos de progresso pelo canal `tx`.
    ///
    /// Sequência emitida: `Started`, um `TokenFeaturized` por token (em
    /// ordem crescente de índice) e `Done`. Erros de envio são ignorados —
    /// se o receptor desistiu, não há mais ninguém para notificar.
    pub fn featurize_streaming(&self, tokens: &[String], tx: mpsc::Sender<FeatureEvent>) {
        let start = Instant::now();
        let _ = tx.send(FeatureEvent::Started {
            total_tokens: tokens.len(),
        });

        let prior_labels = vec![None; tokens.len()];
        let mut total_features = 0;
        for index in 0..tokens.len() {
            let features = self.featurize_token(tokens, index, &prior_labels);
            total_features += features.len();
            let _ = tx.send(FeatureEvent::TokenFeaturized {
                token_index: index,
                token_text: tokens[index].clone(),
                features,
            });
        }

        let _ = tx.send(FeatureEvent::Done {
            total_tokens: tokens.len(),
            total_features,
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }
}

impl Default for FeatureGenPipeline {
    /// Configuração de fábrica: n-gramas de 2 a 5 caracteres, classe do
    /// token com a feature conjunta, superfície em minúsculas e marca de
    /// início de sentença.
    fn default() -> Self {
        Self::new(Box::new(AggregatedFeatureGenerator::new(vec![
            Box::new(CharNgramFeatureGenerator::default()),
            Box::new(TokenClassFeatureGenerator::new(true)),
            Box::new(TokenFeatureGenerator::default()),
            Box::new(SentenceFeatureGenerator::default()),
        ])))
    }
}
