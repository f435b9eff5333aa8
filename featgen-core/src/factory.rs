//! # Fábricas e Registro de Geradores
//!
//! Traduz a configuração declarativa em instâncias prontas de gerador.
//! Cada nome registrado aponta para uma função construtora pura que lê e
//! valida os parâmetros do descritor. Toda a validação acontece aqui, na
//! montagem do modelo: um pipeline mal configurado falha antes de gerar
//! qualquer feature.
//!
//! ## Nomes embutidos
//!
//! | Nome          | Gerador                          | Parâmetros                  |
//! |---------------|----------------------------------|-----------------------------|
//! | `char_ngram`  | [`CharNgramFeatureGenerator`]    | `min`, `max` (obrigatórios) |
//! | `token_class` | [`TokenClassFeatureGenerator`]   | `word_and_class` (opcional) |
//! | `token`       | [`TokenFeatureGenerator`]        | `lowercase` (opcional)      |
//! | `sentence`    | [`SentenceFeatureGenerator`]     | `begin`, `end` (opcionais)  |
//! | `aggregated`  | [`AggregatedFeatureGenerator`]   | filhos em `generators`      |
//!
//! O registro é aberto: consumidores podem acrescentar fábricas próprias
//! sob nomes novos com [`GeneratorRegistry::register`].

use std::collections::HashMap;

use thiserror::Error;

use crate::char_ngram::CharNgramFeatureGenerator;
use crate::config::GeneratorDescriptor;
use crate::generator::{AggregatedFeatureGenerator, FeatureGenerator};
use crate::lexical::{SentenceFeatureGenerator, TokenFeatureGenerator};
use crate::token_class::TokenClassFeatureGenerator;

/// Falha de validação da configuração declarativa.
///
/// É o único tipo de erro do subsistema: surge na montagem ([`create`]) e
/// nunca durante a geração de features. Não há retry nem construção
/// parcial — o erro é fatal para o passo de montagem que o disparou.
///
/// [`create`]: GeneratorRegistry::create
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// O nome do descritor não consta no registro
    #[error("gerador desconhecido: \"{0}\"")]
    UnknownGenerator(String),
    /// Parâmetro obrigatório ausente no descritor
    #[error("parâmetro obrigatório ausente: \"{name}\"")]
    MissingParameter { name: String },
    /// Parâmetro presente mas com tipo ou valor inválido
    #[error("parâmetro \"{name}\" inválido: {reason}")]
    InvalidParameter { name: String, reason: String },
    /// Agregador declarado sem nenhum gerador filho
    #[error("agregador sem geradores filhos")]
    EmptyAggregate,
    /// O JSON do descritor não pôde ser parseado
    #[error("descritor malformado: {0}")]
    Malformed(String),
}

/// Função construtora registrada para um nome de gerador.
///
/// Recebe o registro junto com o descritor para poder construir filhos
/// (caso do agregador) pelo mesmo caminho validado.
pub type FactoryFn =
    fn(&GeneratorDescriptor, &GeneratorRegistry) -> Result<Box<dyn FeatureGenerator>, DescriptorError>;

/// Registro nome → fábrica.
pub struct GeneratorRegistry {
    factories: HashMap<String, FactoryFn>,
}

impl GeneratorRegistry {
    /// Registro sem nenhum nome embutido.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registra (ou substitui) uma fábrica sob `name`.
    pub fn register(&mut self, name: &str, factory: FactoryFn) {
        self.factories.insert(name.to_string(), factory);
    }

    /// Constrói o gerador descrito, validando nome e parâmetros.
    ///
    /// Idempotente: chamadas repetidas com o mesmo descritor produzem
    /// instâncias independentes e identicamente configuradas, sem nenhum
    /// estado compartilhado entre elas.
    pub fn create(
        &self,
        descriptor: &GeneratorDescriptor,
    ) -> Result<Box<dyn FeatureGenerator>, DescriptorError> {
        match self.factories.get(&descriptor.name) {
            Some(factory) => factory(descriptor, self),
            None => Err(DescriptorError::UnknownGenerator(descriptor.name.clone())),
        }
    }
}

impl Default for GeneratorRegistry {
    /// Registro com todos os nomes embutidos.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("char_ngram", create_char_ngram);
        registry.register("token_class", create_token_class);
        registry.register("token", create_token);
        registry.register("sentence", create_sentence);
        registry.register("aggregated", create_aggregated);
        registry
    }
}

/// Lê um parâmetro inteiro obrigatório e exige que não seja negativo.
fn non_negative(descriptor: &GeneratorDescriptor, name: &str) -> Result<usize, DescriptorError> {
    let value = descriptor.params.get_int(name)?;
    usize::try_from(value).map_err(|_| DescriptorError::InvalidParameter {
        name: name.to_string(),
        reason: format!("não pode ser negativo (recebido {value})"),
    })
}

fn create_char_ngram(
    descriptor: &GeneratorDescriptor,
    _registry: &GeneratorRegistry,
) -> Result<Box<dyn FeatureGenerator>, DescriptorError> {
    let min = non_negative(descriptor, "min")?;
    let max = non_negative(descriptor, "max")?;
    Ok(Box::new(CharNgramFeatureGenerator::new(min, max)))
}

fn create_token_class(
    descriptor: &GeneratorDescriptor,
    _registry: &GeneratorRegistry,
) -> Result<Box<dyn FeatureGenerator>, DescriptorError> {
    let word_and_class = descriptor.params.get_bool_or("word_and_class", false)?;
    Ok(Box::new(TokenClassFeatureGenerator::new(word_and_class)))
}

fn create_token(
    descriptor: &GeneratorDescriptor,
    _registry: &GeneratorRegistry,
) -> Result<Box<dyn FeatureGenerator>, DescriptorError> {
    let lowercase = descriptor.params.get_bool_or("lowercase", true)?;
    Ok(Box::new(TokenFeatureGenerator::new(lowercase)))
}

fn create_sentence(
    descriptor: &GeneratorDescriptor,
    _registry: &GeneratorRegistry,
) -> Result<Box<dyn FeatureGenerator>, DescriptorError> {
    let begin = descriptor.params.get_bool_or("begin", true)?;
    let end = descriptor.params.get_bool_or("end", false)?;
    Ok(Box::new(SentenceFeatureGenerator::new(begin, end)))
}

fn create_aggregated(
    descriptor: &GeneratorDescriptor,
    registry: &GeneratorRegistry,
) -> Result<Box<dyn FeatureGenerator>, DescriptorError> {
    if descriptor.generators.is_empty() {
        return Err(DescriptorError::EmptyAggregate);
    }

    let mut children: Vec<Box<dyn FeatureGenerator>> =
        Vec::with_capacity(descriptor.generators.len());
    for child in &descriptor.generators {
        children.push(registry.create(child)?);
    }
    Ok(Box::new(AggregatedFeatureGenerator::new(children)))
}
