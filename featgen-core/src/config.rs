//! # Configuração Declarativa dos Geradores
//!
//! A montagem do pipeline é dirigida por uma descrição declarativa em JSON:
//! uma árvore de descritores, cada um com o nome do gerador, parâmetros
//! nomeados e, no caso do agregador, descritores filhos. Trocar a
//! combinação de geradores de um modelo passa a ser edição de configuração,
//! sem recompilar nada:
//!
//! ```json
//! {
//!   "name": "aggregated",
//!   "generators": [
//!     { "name": "char_ngram", "params": { "min": 2, "max": 5 } },
//!     { "name": "token_class", "params": { "word_and_class": true } }
//!   ]
//! }
//! ```
//!
//! Os acessores tipados ([`Parameters::get_int`], [`Parameters::get_bool_or`])
//! validam presença e tipo **na construção**: configuração malformada falha
//! na montagem do modelo, nunca durante a inferência.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::factory::DescriptorError;

/// Um nó da árvore de descritores de geradores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorDescriptor {
    /// Nome registrado do gerador (ex: "char_ngram", "token_class")
    pub name: String,
    /// Parâmetros nomeados do gerador
    #[serde(default)]
    pub params: Parameters,
    /// Descritores filhos (consumidos pelo agregador)
    #[serde(default)]
    pub generators: Vec<GeneratorDescriptor>,
}

impl GeneratorDescriptor {
    /// Descritor folha, sem parâmetros.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Parameters::default(),
            generators: Vec::new(),
        }
    }

    /// Descritor de agregador com os filhos dados.
    pub fn aggregated(generators: Vec<GeneratorDescriptor>) -> Self {
        Self {
            name: "aggregated".to_string(),
            params: Parameters::default(),
            generators,
        }
    }

    /// Acrescenta um parâmetro inteiro (estilo builder).
    pub fn with_int(mut self, name: &str, value: i64) -> Self {
        self.params.set_int(name, value);
        self
    }

    /// Acrescenta um parâmetro booleano (estilo builder).
    pub fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.params.set_bool(name, value);
        self
    }

    /// Parseia um descritor a partir de JSON.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        serde_json::from_str(json).map_err(|e| DescriptorError::Malformed(e.to_string()))
    }
}

/// Mapa de parâmetros nomeados com acessores tipados.
///
/// A ausência de um parâmetro obrigatório, ou um valor de tipo errado,
/// produz o erro de validação do subsistema ([`DescriptorError`]) — nunca
/// um valor padrão silencioso.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(serde_json::Map<String, Value>);

impl Parameters {
    /// Lê um parâmetro inteiro obrigatório.
    pub fn get_int(&self, name: &str) -> Result<i64, DescriptorError> {
        match self.0.get(name) {
            None => Err(DescriptorError::MissingParameter {
                name: name.to_string(),
            }),
            Some(value) => value.as_i64().ok_or_else(|| DescriptorError::InvalidParameter {
                name: name.to_string(),
                reason: format!("esperado inteiro, encontrado {value}"),
            }),
        }
    }

    /// Lê um parâmetro booleano opcional; ausente vale `default`.
    pub fn get_bool_or(&self, name: &str, default: bool) -> Result<bool, DescriptorError> {
        match self.0.get(name) {
            None => Ok(default),
            Some(value) => value.as_bool().ok_or_else(|| DescriptorError::InvalidParameter {
                name: name.to_string(),
                reason: format!("esperado booleano, encontrado {value}"),
            }),
        }
    }

    pub fn set_int(&mut self, name: &str, value: i64) {
        self.0.insert(name.to_string(), Value::from(value));
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.0.insert(name.to_string(), Value::from(value));
    }
}
